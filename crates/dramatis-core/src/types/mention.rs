//! Raw mentions as they come off the extractor.
//!
//! A `RawMention` is the extractor's output unit: a surface form, where it
//! was found, and which pattern recognized it. Extraction confidence is a
//! property of the pattern, so the same pattern always yields the same score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{EntityType, ProfessionalRole};

/// Which pattern family recognized a mention.
///
/// Each pattern carries a fixed base confidence reflecting how unambiguous
/// its shape is. Titled and court names are near-certain; a bare surname is
/// the weakest signal the extractor will emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionPattern {
    /// "Dr. Sarah Johnson", "Judge Patel" style title-plus-name.
    TitledName,
    /// "East London Family Court" style court designation.
    CourtName,
    /// "Children's Services", "Thames Valley Police" style organization.
    OrganizationName,
    /// Plain "Forename Surname" capitalized pair.
    FullName,
    /// "S. Thompson", "J.K. Rowling" initial-plus-surname.
    InitialSurname,
    /// "Mr. Thompson" honorific with surname only.
    HonorificSurname,
    /// A bare capitalized surname already seen with a fuller form.
    SurnameOnly,
}

impl MentionPattern {
    /// Base extraction confidence for this pattern shape.
    pub fn base_confidence(&self) -> f64 {
        match self {
            Self::TitledName => 0.92,
            Self::CourtName => 0.88,
            Self::OrganizationName => 0.85,
            Self::FullName => 0.82,
            Self::InitialSurname => 0.74,
            Self::HonorificSurname => 0.68,
            Self::SurnameOnly => 0.60,
        }
    }

    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitledName => "titled_name",
            Self::CourtName => "court_name",
            Self::OrganizationName => "organization_name",
            Self::FullName => "full_name",
            Self::InitialSurname => "initial_surname",
            Self::HonorificSurname => "honorific_surname",
            Self::SurnameOnly => "surname_only",
        }
    }

    /// Get all pattern variants, strongest first.
    pub fn all() -> &'static [MentionPattern] {
        &[
            Self::TitledName,
            Self::CourtName,
            Self::OrganizationName,
            Self::FullName,
            Self::InitialSurname,
            Self::HonorificSurname,
            Self::SurnameOnly,
        ]
    }
}

impl fmt::Display for MentionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One extracted occurrence of a candidate entity name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMention {
    /// Document the mention came from.
    pub source_doc_id: String,
    /// Matched surface form, whitespace-trimmed.
    pub text: String,
    /// Window of surrounding text for citation.
    pub context_snippet: String,
    /// Byte offset of the match start within the document text.
    pub position: usize,
    /// Pattern family that produced the match.
    pub pattern: MentionPattern,
    /// Entity category implied by the pattern.
    pub candidate_type: EntityType,
    /// Role implied by a recognized title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ProfessionalRole>,
}

impl RawMention {
    /// Extraction confidence, determined entirely by the matching pattern.
    pub fn extraction_confidence(&self) -> f64 {
        self.pattern.base_confidence()
    }
}
