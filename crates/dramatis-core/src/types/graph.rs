//! Serializable entity-graph projection.
//!
//! This is the wire shape handed to visualization and review surfaces: flat
//! node and edge lists plus counts. The in-memory petgraph structure lives in
//! the resolver crate; this projection is what crosses process boundaries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::entity::EntityType;
use super::linkage::{LinkageStatus, MatchAlgorithm};

/// One entity as a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Entity id this node projects.
    pub id: String,
    /// Canonical name, used as the display label.
    pub label: String,
    /// Entity category.
    pub entity_type: EntityType,
    /// How many mentions back this entity.
    pub mention_count: usize,
}

/// One proposed or reviewed linkage as a graph edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Entity id at the edge source.
    pub source_id: String,
    /// Entity id at the edge target.
    pub target_id: String,
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
    /// Algorithm tier behind the linkage.
    pub algorithm: MatchAlgorithm,
    /// Review state of the linkage.
    pub status: LinkageStatus,
}

/// Top-level counts for quick display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Serializable graph of resolved entities and their proposed linkages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: GraphMetadata,
}

impl EntityGraph {
    /// An empty graph with zeroed metadata.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check internal consistency: metadata counts match the lists, node ids
    /// are unique, and every edge endpoint names a present node.
    pub fn is_consistent(&self) -> bool {
        if self.metadata.node_count != self.nodes.len()
            || self.metadata.edge_count != self.edges.len()
        {
            return false;
        }
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return false;
            }
        }
        self.edges
            .iter()
            .all(|e| ids.contains(e.source_id.as_str()) && ids.contains(e.target_id.as_str()))
    }
}
