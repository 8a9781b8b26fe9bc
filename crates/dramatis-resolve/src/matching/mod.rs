//! Name normalization and tiered matching.

mod matcher;
mod normalize;

pub use matcher::{fuzzy_match, BatchMatchResult, BatchSummary, MatchResult, NameMatcher};
pub(crate) use normalize::NormalizedName;
