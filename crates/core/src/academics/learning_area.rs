//! Learning-area categorization for report-card layout.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scholar_shared::LearningAreaPolicy;

/// The eight fixed learning areas plus the catch-all "other" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningArea {
    /// Languages.
    Languages,
    /// Sciences.
    Sciences,
    /// Mathematics.
    Mathematics,
    /// Social Studies.
    SocialStudies,
    /// Religious Education.
    ReligiousEducation,
    /// Technology & Enterprise.
    TechnologyAndEnterprise,
    /// Creative Arts.
    CreativeArts,
    /// Life Education.
    LifeEducation,
    /// Anything untagged or unrecognized.
    Other,
}

impl LearningArea {
    /// All buckets in report-card order.
    pub const ALL: [Self; 9] = [
        Self::Languages,
        Self::Sciences,
        Self::Mathematics,
        Self::SocialStudies,
        Self::ReligiousEducation,
        Self::TechnologyAndEnterprise,
        Self::CreativeArts,
        Self::LifeEducation,
        Self::Other,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Sciences => "Sciences",
            Self::Mathematics => "Mathematics",
            Self::SocialStudies => "Social Studies",
            Self::ReligiousEducation => "Religious Education",
            Self::TechnologyAndEnterprise => "Technology & Enterprise",
            Self::CreativeArts => "Creative Arts",
            Self::LifeEducation => "Life Education",
            Self::Other => "Other Subjects",
        }
    }

    /// Fixed numeric key (1-8). The "other" bucket has none.
    #[must_use]
    pub const fn key(self) -> Option<u8> {
        match self {
            Self::Languages => Some(1),
            Self::Sciences => Some(2),
            Self::Mathematics => Some(3),
            Self::SocialStudies => Some(4),
            Self::ReligiousEducation => Some(5),
            Self::TechnologyAndEnterprise => Some(6),
            Self::CreativeArts => Some(7),
            Self::LifeEducation => Some(8),
            Self::Other => None,
        }
    }

    /// Recognizes a subject's learning-area tag.
    ///
    /// Accepts the display name (case-insensitive, `&` and `and` are
    /// interchangeable) or the numeric key. Returns `None` for anything else.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = normalize(tag);
        if normalized.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|area| {
            normalize(area.name()) == normalized
                || area.key().is_some_and(|k| k.to_string() == normalized)
                || (*area == Self::Other && normalized == "other")
        })
    }
}

impl fmt::Display for LearningArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(tag: &str) -> String {
    tag.split_whitespace()
        .map(|word| {
            if word == "&" {
                "and".to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A subject tag that could not be placed under the strict policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Subject {subject_code} has unrecognized learning area {tag:?}")]
pub struct UnrecognizedLearningArea {
    /// Subject code.
    pub subject_code: String,
    /// The tag as stored, `None` when untagged.
    pub tag: Option<String>,
}

/// Places a subject into its learning-area bucket.
///
/// Under [`LearningAreaPolicy::Other`] untagged and unrecognized subjects
/// land in [`LearningArea::Other`]; under [`LearningAreaPolicy::Reject`] they
/// are reported as an error.
pub fn categorize(
    subject_code: &str,
    tag: Option<&str>,
    policy: LearningAreaPolicy,
) -> Result<LearningArea, UnrecognizedLearningArea> {
    match (tag.and_then(LearningArea::from_tag), policy) {
        (Some(area), _) => Ok(area),
        (None, LearningAreaPolicy::Other) => Ok(LearningArea::Other),
        (None, LearningAreaPolicy::Reject) => Err(UnrecognizedLearningArea {
            subject_code: subject_code.to_string(),
            tag: tag.map(String::from),
        }),
    }
}
