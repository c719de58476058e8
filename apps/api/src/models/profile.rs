use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Candidate profile submitted alongside a job description.
///
/// Every section is optional. Presence is checked explicitly through the
/// `has_*` helpers; an empty string, map or list counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillSections>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
}

impl CandidateProfile {
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn summary_word_count(&self) -> usize {
        self.summary
            .as_deref()
            .map_or(0, |s| s.split_whitespace().count())
    }

    pub fn has_skills(&self) -> bool {
        self.skills.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_experience(&self) -> bool {
        self.experience.as_ref().is_some_and(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<Responsibility>,
}

/// A bullet under an experience entry. Clients send either a bare string or
/// `{"responsibility": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsibility {
    Text(String),
    Detailed {
        #[serde(default)]
        responsibility: Option<String>,
    },
}

impl Responsibility {
    pub fn text(&self) -> Option<&str> {
        match self {
            Responsibility::Text(text) => Some(text.as_str()),
            Responsibility::Detailed { responsibility } => responsibility.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Skill categories in the order the client listed them.
///
/// Serialized as a JSON object (`{"languages": ["Rust", "Go"], ...}`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillSections(Vec<(String, Vec<String>)>);

impl SkillSections {
    pub fn new(sections: Vec<(String, Vec<String>)>) -> Self {
        Self(sections)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(category, skills)| (category.as_str(), skills.as_slice()))
    }
}

impl Serialize for SkillSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for SkillSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = SkillSections;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category to a list of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, skills)) = map.next_entry::<String, Vec<String>>()? {
                    sections.push((category, skills));
                }
                Ok(SkillSections(sections))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}
