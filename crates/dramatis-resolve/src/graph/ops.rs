//! In-memory graph operations using petgraph DiGraph.
//!
//! Backs the review tooling with O(1) id lookups and cheap neighbor
//! traversal over the resolved entity graph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use dramatis_core::{EntityGraph, GraphEdge, GraphMetadata, GraphNode};

/// The in-memory graph type using petgraph.
pub type ResolutionGraph = DiGraph<GraphNode, GraphEdge>;

/// Index for O(1) lookups by entity id.
pub type EntityIdIndex = HashMap<String, NodeIndex>;

/// Graph operations over the in-memory graph.
pub struct GraphOps<'a> {
    graph: &'a mut ResolutionGraph,
    id_index: &'a mut EntityIdIndex,
}

impl<'a> GraphOps<'a> {
    /// Create a new GraphOps instance.
    pub fn new(graph: &'a mut ResolutionGraph, id_index: &'a mut EntityIdIndex) -> Self {
        Self { graph, id_index }
    }

    /// Add an entity node to the graph.
    ///
    /// Returns the NodeIndex for the new node.
    pub fn add_entity(&mut self, node: GraphNode) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        idx
    }

    /// Add a linkage edge between two entities.
    ///
    /// Returns true if the edge was added, false if either endpoint is not
    /// in the graph. Parallel edges between the same pair are kept.
    pub fn add_linkage(&mut self, edge: GraphEdge) -> bool {
        let source_idx = match self.id_index.get(&edge.source_id) {
            Some(idx) => *idx,
            None => return false,
        };
        let target_idx = match self.id_index.get(&edge.target_id) {
            Some(idx) => *idx,
            None => return false,
        };

        self.graph.add_edge(source_idx, target_idx, edge);
        true
    }

    /// Find a node by entity id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    /// Get the node at the given index.
    pub fn get_node(&self, node_idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(node_idx)
    }

    /// Get all neighbors regardless of edge direction.
    ///
    /// Linkages are undirected in meaning, so review tooling asks for both
    /// ends at once.
    pub fn neighbors(&self, node_idx: NodeIndex) -> Vec<(NodeIndex, &GraphEdge)> {
        let mut neighbors: Vec<(NodeIndex, &GraphEdge)> = self
            .graph
            .edges(node_idx)
            .map(|e| (e.target(), e.weight()))
            .collect();
        neighbors.extend(
            self.graph
                .edges_directed(node_idx, petgraph::Direction::Incoming)
                .map(|e| (e.source(), e.weight())),
        );
        neighbors
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Flatten the in-memory graph into its serializable form.
///
/// Node and edge order follows petgraph insertion order, so repeated runs
/// over the same input serialize identically.
pub fn snapshot(graph: &ResolutionGraph) -> EntityGraph {
    let nodes: Vec<GraphNode> = graph.node_weights().cloned().collect();
    let edges: Vec<GraphEdge> = graph.edge_weights().cloned().collect();
    let metadata = GraphMetadata {
        node_count: nodes.len(),
        edge_count: edges.len(),
    };
    EntityGraph {
        nodes,
        edges,
        metadata,
    }
}
