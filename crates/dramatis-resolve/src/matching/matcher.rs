//! Tiered name matching.
//!
//! Comparison walks the tiers from strongest to weakest. An exact hit on the
//! normalized form wins outright, variant recognition handles initials and
//! bare surnames, and a Levenshtein ratio catches misspellings. The first
//! tier that accepts a pair decides the score and the algorithm label.

use serde::{Deserialize, Serialize};

use dramatis_core::{MatchAlgorithm, ResolutionConfig};

use super::normalize::NormalizedName;

/// Outcome of comparing two names.
///
/// `score` is always populated, even for rejected pairs, so callers can
/// route near misses into the review band instead of discarding them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether the pair cleared a matching tier.
    pub is_match: bool,
    /// Similarity in `[0.0, 1.0]`.
    pub score: f64,
    /// Which tier produced the score.
    pub algorithm: MatchAlgorithm,
}

impl MatchResult {
    /// A positive result from the given tier.
    pub fn matched(score: f64, algorithm: MatchAlgorithm) -> Self {
        Self {
            is_match: true,
            score,
            algorithm,
        }
    }

    /// A rejection carrying the partial similarity that was observed.
    pub fn no_match(score: f64) -> Self {
        let algorithm = if score > 0.0 {
            MatchAlgorithm::Levenshtein
        } else {
            MatchAlgorithm::None
        };
        Self {
            is_match: false,
            score,
            algorithm,
        }
    }
}

/// Aggregate counts for a batch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Number of pairs compared. Equals the input length.
    pub total_comparisons: usize,
    /// How many pairs cleared a matching tier.
    pub match_count: usize,
}

/// Per-pair results plus the batch summary, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMatchResult {
    pub results: Vec<MatchResult>,
    pub summary: BatchSummary,
}

/// Name comparator parameterized by a [`ResolutionConfig`].
///
/// The matcher is stateless apart from its configuration. Comparisons are
/// symmetric, so `match_names(a, b)` and `match_names(b, a)` agree.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    config: ResolutionConfig,
}

impl NameMatcher {
    /// Creates a matcher with the given thresholds.
    pub fn new(config: ResolutionConfig) -> Self {
        Self { config }
    }

    /// The configuration this matcher scores against.
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Compares two names through the tier cascade.
    ///
    /// Either side being empty after normalization yields a rejection with a
    /// score of zero.
    pub fn match_names(&self, a: &str, b: &str) -> MatchResult {
        let left = NormalizedName::parse(a);
        let right = NormalizedName::parse(b);
        if left.is_empty() || right.is_empty() {
            return MatchResult::no_match(0.0);
        }
        if left.joined() == right.joined() {
            return MatchResult::matched(1.0, MatchAlgorithm::Exact);
        }
        if let Some(result) = self.variant_match(&left, &right) {
            return result;
        }
        self.levenshtein_match(&left, &right)
    }

    /// Compares every pair and tallies the outcome.
    pub fn batch_match(&self, pairs: &[(String, String)]) -> BatchMatchResult {
        let results: Vec<MatchResult> = pairs
            .iter()
            .map(|(a, b)| self.match_names(a, b))
            .collect();
        let match_count = results.iter().filter(|r| r.is_match).count();
        BatchMatchResult {
            summary: BatchSummary {
                total_comparisons: results.len(),
                match_count,
            },
            results,
        }
    }

    /// Returns the candidates that match `target`, preserving input order.
    pub fn find_variations(&self, target: &str, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|candidate| self.match_names(target, candidate).is_match)
            .cloned()
            .collect()
    }

    /// Variant tier. Recognizes a bare surname against a fuller form, and
    /// two full forms whose surnames agree when one given name is an initial
    /// of the other.
    fn variant_match(&self, left: &NormalizedName, right: &NormalizedName) -> Option<MatchResult> {
        if left.is_single_token() != right.is_single_token() {
            let (single, full) = if left.is_single_token() {
                (left, right)
            } else {
                (right, left)
            };
            if Some(single.joined()) == full.surname() {
                return Some(MatchResult::matched(
                    self.config.variant_surname_score,
                    MatchAlgorithm::Variant,
                ));
            }
            return None;
        }
        if left.surname().is_some()
            && left.surname() == right.surname()
            && givens_compatible(left, right)
        {
            return Some(MatchResult::matched(
                self.config.variant_initial_score,
                MatchAlgorithm::Variant,
            ));
        }
        None
    }

    /// Levenshtein tier. Scores the full normalized strings, and when the
    /// given names are compatible also the surname tokens alone, taking the
    /// better ratio. "S. Smithe" recovers "Sarah Smith" this way even though
    /// the full strings diverge.
    fn levenshtein_match(&self, left: &NormalizedName, right: &NormalizedName) -> MatchResult {
        let mut score = strsim::normalized_levenshtein(left.joined(), right.joined());
        if givens_compatible(left, right) {
            if let (Some(ls), Some(rs)) = (left.surname(), right.surname()) {
                score = score.max(strsim::normalized_levenshtein(ls, rs));
            }
        }
        if score >= self.config.levenshtein_ratio {
            MatchResult::matched(score, MatchAlgorithm::Levenshtein)
        } else {
            MatchResult::no_match(score)
        }
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(ResolutionConfig::default())
    }
}

/// Compares two names with the default thresholds.
pub fn fuzzy_match(a: &str, b: &str) -> MatchResult {
    NameMatcher::default().match_names(a, b)
}

/// True when both names carry a given name and the given names could be the
/// same person. Requires matching first letters, and beyond that accepts
/// equality or a single-letter initial on either side. "Sarah" and "Sam"
/// share a letter but are distinct names, so they are not compatible.
fn givens_compatible(left: &NormalizedName, right: &NormalizedName) -> bool {
    match (left.first_given(), right.first_given()) {
        (Some(x), Some(y)) => {
            x.chars().next() == y.chars().next()
                && (x == y || x.chars().count() == 1 || y.chars().count() == 1)
        }
        _ => false,
    }
}
