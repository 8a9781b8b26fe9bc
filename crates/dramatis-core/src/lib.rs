//! dramatis-core - Core library for dramatis.
//!
//! This crate provides the shared types, configuration, and errors for the
//! dramatis entity resolution pipeline: documents in, resolved entities,
//! linkage proposals, and a serializable entity graph out.

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::ResolutionConfig;
pub use error::{DramatisError, DramatisResult};
pub use types::{
    ConfidenceBand, DocumentRecord, EntityGraph, EntityType, GraphEdge, GraphMetadata, GraphNode,
    LinkageDecision, LinkageProposal, LinkageStatus, MatchAlgorithm, MentionPattern, MentionRecord,
    ProfessionalRole, RawMention, ResolutionMetadata, ResolutionResult, ResolutionSummary,
    ResolvedEntity,
};
