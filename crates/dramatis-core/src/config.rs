//! Configuration for the resolution pipeline.

use serde::{Deserialize, Serialize};

use crate::types::MatchAlgorithm;

/// Tuning knobs for matching, merging, and review-band behavior.
///
/// The defaults reproduce the conservative reference behavior: exact and
/// structural variant matches merge automatically, edit-distance matches
/// never do and go to review instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Weakest algorithm tier allowed to merge without review.
    /// Tiers order as None < Levenshtein < Variant < Exact.
    /// Default: Variant (edit-distance matches always go to review)
    pub auto_merge_tier: MatchAlgorithm,

    /// Minimum confidence for a below-tier match to become a review
    /// proposal; weaker candidates are dropped silently.
    /// Range: 0.0-1.0. Default: 0.60
    pub review_band_floor: f64,

    /// Minimum normalized edit-distance similarity for the levenshtein
    /// tier to report a match.
    /// Range: 0.0-1.0. Default: 0.82
    pub levenshtein_ratio: f64,

    /// Confidence assigned to a variant match won on initial agreement
    /// ("S. Thompson" vs "Sarah Thompson").
    /// Range: 0.0-1.0. Default: 0.90
    pub variant_initial_score: f64,

    /// Confidence assigned to a variant match won on surname sharing
    /// ("Thompson" vs "Sarah Thompson").
    /// Range: 0.0-1.0. Default: 0.85
    pub variant_surname_score: f64,

    /// Confidence increment weight applied when a merge corroborates an
    /// entity: conf' = conf + (1 - conf) * weight.
    /// Range: 0.0-1.0. Default: 0.15
    pub corroboration_weight: f64,

    /// Characters of surrounding text captured on each side of a mention.
    /// Default: 60
    pub context_window: usize,

    /// Allow automatic merges between entities holding conflicting
    /// professional roles. When false such candidates downgrade to review
    /// proposals. Default: false
    pub merge_across_roles: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            auto_merge_tier: MatchAlgorithm::Variant,
            review_band_floor: 0.60,
            levenshtein_ratio: 0.82,
            variant_initial_score: 0.90,
            variant_surname_score: 0.85,
            corroboration_weight: 0.15,
            context_window: 60,
            merge_across_roles: false,
        }
    }
}

impl ResolutionConfig {
    /// Config that only ever merges on exact normalized equality and
    /// surfaces everything else for review.
    pub fn strict() -> Self {
        Self {
            auto_merge_tier: MatchAlgorithm::Exact,
            review_band_floor: 0.70,
            levenshtein_ratio: 0.88,
            ..Default::default()
        }
    }

    /// Config that also auto-merges edit-distance matches and keeps a
    /// wider review band. Useful for small, well-curated document sets.
    pub fn lenient() -> Self {
        Self {
            auto_merge_tier: MatchAlgorithm::Levenshtein,
            review_band_floor: 0.50,
            levenshtein_ratio: 0.78,
            merge_across_roles: true,
            ..Default::default()
        }
    }

    /// Validate configuration values are in valid ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.auto_merge_tier == MatchAlgorithm::None {
            return Err("auto_merge_tier must name a real algorithm tier");
        }
        if !(0.0..=1.0).contains(&self.review_band_floor) {
            return Err("review_band_floor must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.levenshtein_ratio) {
            return Err("levenshtein_ratio must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.variant_initial_score) {
            return Err("variant_initial_score must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.variant_surname_score) {
            return Err("variant_surname_score must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.corroboration_weight) {
            return Err("corroboration_weight must be between 0.0 and 1.0");
        }
        if self.context_window == 0 {
            return Err("context_window must be at least 1");
        }
        Ok(())
    }
}
