//! Match algorithms and human-review linkage proposals.
//!
//! When two entities score inside the review band but below the auto-merge
//! tier, the resolver emits a `LinkageProposal` instead of merging. Proposals
//! start `Pending` and move exactly once to `Accepted` or `Rejected`; any
//! other transition is an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DramatisError, DramatisResult};

/// How a pair of names was judged to match.
///
/// Variants are declared in ascending strength so the derived ordering lets
/// tier policy read as a comparison: `algorithm >= config.auto_merge_tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchAlgorithm {
    /// No tier matched.
    None,
    /// Normalized edit-distance similarity cleared the ratio threshold.
    Levenshtein,
    /// Structural name-variant agreement (initials, surname sharing).
    Variant,
    /// Normalized forms are identical.
    Exact,
}

impl MatchAlgorithm {
    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Levenshtein => "levenshtein",
            Self::Variant => "variant",
            Self::Exact => "exact",
        }
    }

    /// Whether this outcome represents an actual match.
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review state of a linkage proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkageStatus {
    /// Awaiting reviewer decision.
    Pending,
    /// Reviewer confirmed the two entities are the same identity.
    Accepted,
    /// Reviewer ruled the entities distinct.
    Rejected,
}

impl LinkageStatus {
    /// Convert to string for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LinkageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reviewer verdict on a pending proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkageDecision {
    Accept,
    Reject,
}

/// A possible-but-uncertain identity link surfaced for human review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageProposal {
    /// Stable id within one resolution run (`linkage-<index>`).
    pub id: String,
    /// Canonical name of the first entity at proposal time.
    pub entity1_name: String,
    /// Canonical name of the second entity at proposal time.
    pub entity2_name: String,
    /// Ids of the two entities, in the order they were compared.
    pub entity_ids: [String; 2],
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
    /// Algorithm tier that produced the candidate match.
    pub algorithm: MatchAlgorithm,
    /// Review state.
    pub status: LinkageStatus,
}

impl LinkageProposal {
    /// Create a new proposal in the `Pending` state.
    pub fn pending(
        id: impl Into<String>,
        entity1_name: impl Into<String>,
        entity2_name: impl Into<String>,
        entity_ids: [String; 2],
        confidence: f64,
        algorithm: MatchAlgorithm,
    ) -> Self {
        Self {
            id: id.into(),
            entity1_name: entity1_name.into(),
            entity2_name: entity2_name.into(),
            entity_ids,
            confidence: confidence.clamp(0.0, 1.0),
            algorithm,
            status: LinkageStatus::Pending,
        }
    }

    /// Apply a reviewer decision.
    ///
    /// Only `Pending` proposals can be reviewed; reviewing an already-decided
    /// proposal returns a `LinkageTransition` error and leaves it unchanged.
    pub fn review(&mut self, decision: LinkageDecision) -> DramatisResult<()> {
        let to = match decision {
            LinkageDecision::Accept => LinkageStatus::Accepted,
            LinkageDecision::Reject => LinkageStatus::Rejected,
        };
        if self.status != LinkageStatus::Pending {
            return Err(DramatisError::linkage_transition(self.status, to));
        }
        self.status = to;
        Ok(())
    }

    /// Whether this proposal still awaits review.
    pub fn is_pending(&self) -> bool {
        self.status == LinkageStatus::Pending
    }

    /// The entity pair with ids in sorted order, so callers can compare
    /// proposals without caring which side was seen first.
    pub fn unordered_pair(&self) -> (&str, &str) {
        let [a, b] = &self.entity_ids;
        if a <= b {
            (a.as_str(), b.as_str())
        } else {
            (b.as_str(), a.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proposal() -> LinkageProposal {
        LinkageProposal::pending(
            "linkage-0",
            "Sarah Thompson",
            "Sam Thompson",
            ["entity-0".to_string(), "entity-3".to_string()],
            0.78,
            MatchAlgorithm::Levenshtein,
        )
    }

    #[test]
    fn test_algorithm_tier_ordering() {
        assert!(MatchAlgorithm::Exact > MatchAlgorithm::Variant);
        assert!(MatchAlgorithm::Variant > MatchAlgorithm::Levenshtein);
        assert!(MatchAlgorithm::Levenshtein > MatchAlgorithm::None);
        assert!(MatchAlgorithm::Exact >= MatchAlgorithm::Variant);
        assert!(!MatchAlgorithm::None.is_match());
        assert!(MatchAlgorithm::Variant.is_match());
    }

    #[test]
    fn test_review_accept() {
        let mut proposal = sample_proposal();
        assert!(proposal.is_pending());
        proposal.review(LinkageDecision::Accept).unwrap();
        assert_eq!(proposal.status, LinkageStatus::Accepted);
        assert!(!proposal.is_pending());
    }

    #[test]
    fn test_review_reject() {
        let mut proposal = sample_proposal();
        proposal.review(LinkageDecision::Reject).unwrap();
        assert_eq!(proposal.status, LinkageStatus::Rejected);
    }

    #[test]
    fn test_double_review_is_an_error() {
        let mut proposal = sample_proposal();
        proposal.review(LinkageDecision::Accept).unwrap();
        let err = proposal.review(LinkageDecision::Reject).unwrap_err();
        assert!(matches!(err, DramatisError::LinkageTransition { .. }));
        // First decision sticks.
        assert_eq!(proposal.status, LinkageStatus::Accepted);
    }

    #[test]
    fn test_unordered_pair_sorts_ids() {
        let proposal = LinkageProposal::pending(
            "linkage-1",
            "B",
            "A",
            ["entity-9".to_string(), "entity-2".to_string()],
            0.7,
            MatchAlgorithm::Variant,
        );
        assert_eq!(proposal.unordered_pair(), ("entity-2", "entity-9"));
    }

    #[test]
    fn test_proposal_serde_camel_case() {
        let json = serde_json::to_string(&sample_proposal()).unwrap();
        assert!(json.contains("\"entity1Name\""));
        assert!(json.contains("\"entityIds\""));
        assert!(json.contains("\"levenshtein\""));
        assert!(json.contains("\"pending\""));
    }
}
