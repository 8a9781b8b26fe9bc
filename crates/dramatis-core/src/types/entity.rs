//! Entity type definitions and resolved entities.
//!
//! `EntityType` is the closed set of categories the extractor can assign;
//! `ResolvedEntity` is the canonical identity the resolver builds up from
//! matching mentions. Aliases stay unique and in insertion order, and
//! confidence stays inside `[0, 1]`. Both invariants are enforced by the
//! mutators here rather than by the callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity categories recognized by the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// An individual person (e.g., "Paul Stephen", "J. Smith").
    Person,
    /// A titled professional (e.g., "Dr. Sarah Johnson", "SW Thompson").
    Professional,
    /// An organization or agency (e.g., "Children's Services").
    Organization,
    /// A court or tribunal (e.g., "East London Family Court").
    Court,
}

impl EntityType {
    /// Parse an entity type from string with flexible matching.
    ///
    /// Handles the variations that appear in stored records and review-UI
    /// payloads ("PERSON", "org", "tribunal", ...).
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "person" | "individual" | "human" => Some(Self::Person),

            "professional" | "practitioner" | "expert" => Some(Self::Professional),

            "organization" | "org" | "organisation" | "company" | "institution" | "agency"
            | "authority" | "trust" => Some(Self::Organization),

            "court" | "tribunal" | "judiciary" => Some(Self::Court),

            _ => None,
        }
    }

    /// Get all entity type variants.
    pub fn all() -> &'static [EntityType] {
        &[
            Self::Person,
            Self::Professional,
            Self::Organization,
            Self::Court,
        ]
    }

    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Professional => "professional",
            Self::Organization => "organization",
            Self::Court => "court",
        }
    }

    /// Whether mentions of this type may resolve against entities of `other`.
    ///
    /// Person and professional cross-match (a bare "Sarah Johnson" later in a
    /// report is the same identity as "Dr. Sarah Johnson"); every other pair
    /// is incompatible, so a person is never compared against a court.
    pub fn is_compatible(&self, other: EntityType) -> bool {
        if *self == other {
            return true;
        }
        matches!(
            (self, other),
            (Self::Person, Self::Professional) | (Self::Professional, Self::Person)
        )
    }

    /// Whether this type carries more information than `other`.
    ///
    /// Only one upgrade exists: a professional mention outranks a plain
    /// person entity, since a title tells us more than a bare name does.
    pub fn outranks(&self, other: EntityType) -> bool {
        matches!((self, other), (Self::Professional, Self::Person))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s).ok_or_else(|| format!("Unknown entity type: {}", s))
    }
}

/// Role a titled professional plays, derived from the title that introduced
/// them ("SW" for a social worker, "DC" for a police officer, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalRole {
    SocialWorker,
    Doctor,
    Psychologist,
    HealthVisitor,
    Nurse,
    PoliceOfficer,
    Judge,
    Solicitor,
    Barrister,
    Guardian,
}

impl ProfessionalRole {
    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SocialWorker => "social_worker",
            Self::Doctor => "doctor",
            Self::Psychologist => "psychologist",
            Self::HealthVisitor => "health_visitor",
            Self::Nurse => "nurse",
            Self::PoliceOfficer => "police_officer",
            Self::Judge => "judge",
            Self::Solicitor => "solicitor",
            Self::Barrister => "barrister",
            Self::Guardian => "guardian",
        }
    }

    /// Get all role variants.
    pub fn all() -> &'static [ProfessionalRole] {
        &[
            Self::SocialWorker,
            Self::Doctor,
            Self::Psychologist,
            Self::HealthVisitor,
            Self::Nurse,
            Self::PoliceOfficer,
            Self::Judge,
            Self::Solicitor,
            Self::Barrister,
            Self::Guardian,
        ]
    }
}

impl fmt::Display for ProfessionalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative confidence band for review displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Definite,
    High,
    Medium,
    Low,
    Speculative,
}

impl ConfidenceBand {
    /// Map a confidence score onto its band.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.95 {
            Self::Definite
        } else if score >= 0.80 {
            Self::High
        } else if score >= 0.60 {
            Self::Medium
        } else if score >= 0.40 {
            Self::Low
        } else {
            Self::Speculative
        }
    }

    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Definite => "definite",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Speculative => "speculative",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One observed occurrence of an entity's name, as carried on the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRecord {
    /// Document the mention was found in.
    pub doc_id: String,
    /// The surface form as it appeared.
    pub text: String,
    /// Surrounding text window for citation.
    pub context: String,
}

/// A canonical identity resolved from one or more mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    /// Stable id within one resolution run (`entity-<index>`).
    pub id: String,
    /// Most complete surface form observed for this identity.
    pub canonical_name: String,
    /// Entity category.
    pub entity_type: EntityType,
    /// Professional role, when a title revealed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ProfessionalRole>,
    /// Distinct surface forms, unique, in insertion order. Never empty.
    pub aliases: Vec<String>,
    /// Every observed occurrence, in processing order.
    pub mentions: Vec<MentionRecord>,
    /// Resolution confidence in `[0, 1]`.
    pub confidence: f64,
}

impl ResolvedEntity {
    /// Seed a new entity from its first observed surface form.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entity_type: EntityType,
        confidence: f64,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            canonical_name: name.clone(),
            entity_type,
            role: None,
            aliases: vec![name],
            mentions: Vec::new(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Set the professional role.
    pub fn with_role(mut self, role: ProfessionalRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Record an observed occurrence of this entity.
    pub fn record_mention(&mut self, mention: MentionRecord) {
        self.mentions.push(mention);
    }

    /// Add a surface form, preserving uniqueness and insertion order.
    ///
    /// Returns true if the alias was new.
    pub fn add_alias(&mut self, alias: impl Into<String>) -> bool {
        let alias = alias.into();
        if self.aliases.iter().any(|a| a == &alias) {
            return false;
        }
        self.aliases.push(alias);
        true
    }

    /// Fold a corroborating observation into the confidence score.
    ///
    /// `base` is the incoming extraction confidence; the stronger of the
    /// current and incoming scores is taken first so a weak early extraction
    /// cannot cap an entity corroborated by stronger ones, then the
    /// diminishing-returns increment is applied. Result stays in `[0, 1]`.
    pub fn corroborate(&mut self, base: f64, weight: f64) {
        let floor = self.confidence.max(base.clamp(0.0, 1.0));
        self.confidence = (floor + (1.0 - floor) * weight.clamp(0.0, 1.0)).min(1.0);
    }

    /// Number of recorded mentions.
    pub fn mention_count(&self) -> usize {
        self.mentions.len()
    }

    /// Qualitative band for the current confidence.
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence)
    }
}
