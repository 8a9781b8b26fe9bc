//! dramatis-resolve - Entity resolution over extracted mentions.
//!
//! This crate clusters the mentions produced by `dramatis-extract` into
//! resolved entities, raises linkage proposals for the ambiguous middle
//! ground, and assembles the entity graph. The matching tiers, resolution
//! arena, and graph builder can be driven individually, or together through
//! [`resolve_documents`].
//!
//! # Example
//!
//! ```ignore
//! use dramatis_core::{DocumentRecord, ResolutionConfig};
//! use dramatis_resolve::resolve_documents;
//!
//! let docs = vec![DocumentRecord::new("doc-1")
//!     .with_text("SW Sarah Thompson filed the report. Thompson returned on Friday.")];
//! let result = resolve_documents(&docs, &ResolutionConfig::default())?;
//!
//! assert_eq!(result.summary.total_entities, 1);
//! assert!(result.entity_by_alias("Thompson").is_some());
//! ```

pub mod graph;
pub mod matching;
pub mod pipeline;
pub mod resolver;

// Re-export commonly used types
pub use graph::{build_graph, build_resolution_graph, snapshot, EntityIdIndex, ResolutionGraph};
pub use matching::{fuzzy_match, BatchMatchResult, BatchSummary, MatchResult, NameMatcher};
pub use pipeline::resolve_documents;
pub use resolver::{EntityResolver, ResolvedSet};
