//! Sector inference: maps a free-text job title onto a coarse industry sector.
//!
//! Rules are checked in order and the first hit wins. Patterns match anywhere in
//! the lowercased title, so short terms like "it" or "rn" also hit inside words.

use std::sync::LazyLock;

use regex::Regex;

pub const TECHNOLOGY: &str = "Technology";
pub const OTHER: &str = "Other";

const TECH_TERMS: &str = r"software|engineer|developer|programmer|tech|it|cloud|data science|ai|machine learning|cybersecurity|\.net";

/// Clinical terms that veto the Technology rule. "nurse" and "health" are
/// checked separately because their qualified forms do not veto.
const CLINICAL_TERMS: &str = r"rn|lpn|cna|medical assistant|therapist|psychologist";

const SECTOR_RULES: &[(&str, &str)] = &[
    ("Healthcare", r"nurse|doctor|health|medical|pharma|biotech|therapist|assistant|rn|lpn|cna|medical assistant|physician|surgeon|psychiatrist|mammography|care manager|hospice|patient|clinician|caregiver"),
    ("Healthcare", r"clinical psychologist|psychologist"),
    ("Finance", r"finance|bank|investment|analyst|trading|financial|accountant|accounting|tax|teller"),
    ("Marketing & Sales", r"market|sales|business development|advertising|pr|marketing|sales|events"),
    ("Manufacturing & Engineering", r"manufactur|engineer|production|quality|supply chain|mechanical|electrical|civil|welder|fabricator|machinist|qa"),
    ("Education", r"educat|teacher|professor|training|instruction|lecturer|faculty|instructor|coach|tutor"),
    ("Retail & Customer Service", r"retail|customer service|sales associate|merchandis|store|cashier|clerk|grocery"),
    ("Human Resources", r"human resources|hr|talent|recruitment|people"),
    ("Legal", r"legal|law|compliance|attorney|paralegal|counsel"),
    ("Construction & Architecture", r"construct|architect|civil|structural|builder"),
    ("Research & Development", r"research|scientist|laboratory|investigator"),
    ("Design", r"design|designer|ux|ui|graphic|creative"),
    ("Project Management", r"project manager|program manager|agile|scrum"),
    ("IT Support & Operations", r"support|help desk|technician|administrator|operations|office assistant|administrative assistant|secretary|clerical"),
    ("Management", r"operations manager|branch manager|superintendent|director"),
    ("Food & Beverage", r"restaurant|chef|cook|food|beverage|hospitality|waiter|waitress"),
    ("Animal Care", r"veterinarian|dentist|animal care"),
    ("Logistics & Transportation", r"warehouse|driver|logistics|transportation|supply chain|inventory"),
    ("Social Services", r"social worker|social services|case manager"),
    ("Non-profit/Volunteer", r"volunteer|non-profit|charity|ngo"),
];

static TECH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TECH_TERMS).expect("tech pattern is valid"));

static CLINICAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLINICAL_TERMS).expect("clinical pattern is valid"));

static COMPILED_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SECTOR_RULES
        .iter()
        .map(|(sector, pattern)| (*sector, Regex::new(pattern).expect("sector pattern is valid")))
        .collect()
});

/// Infers the sector for a job title. Falls back to `Other`.
pub fn infer_sector(title: &str) -> &'static str {
    let title = title.to_lowercase();

    if TECH_PATTERN.is_match(&title) && !mentions_clinical_role(&title) {
        return TECHNOLOGY;
    }

    COMPILED_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&title))
        .map(|(sector, _)| *sector)
        .unwrap_or(OTHER)
}

fn mentions_clinical_role(title: &str) -> bool {
    CLINICAL_PATTERN.is_match(title)
        || has_unqualified(title, "nurse", "medical")
        || has_unqualified(title, "health", "home")
}

/// True if `term` occurs somewhere not directly preceded by `qualifier` plus one whitespace char.
fn has_unqualified(title: &str, term: &str, qualifier: &str) -> bool {
    title
        .match_indices(term)
        .any(|(idx, _)| !preceded_by(&title[..idx], qualifier))
}

fn preceded_by(prefix: &str, qualifier: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next_back() {
        Some(c) if c.is_whitespace() => chars.as_str().ends_with(qualifier),
        _ => false,
    }
}
