//! Entity graph assembly and in-memory operations.

mod builder;
mod ops;

pub use builder::{build_graph, build_resolution_graph};
pub use ops::{snapshot, EntityIdIndex, GraphOps, ResolutionGraph};
