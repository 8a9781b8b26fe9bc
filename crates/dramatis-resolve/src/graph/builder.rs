//! Builds the entity graph from a resolved arena.
//!
//! Every entity becomes a node and every linkage proposal becomes an edge,
//! whatever its review status. Rendering decisions about rejected or pending
//! edges belong to consumers, not the builder.

use tracing::warn;

use dramatis_core::{EntityGraph, GraphEdge, GraphNode, LinkageProposal, ResolvedEntity};

use super::ops::{snapshot, EntityIdIndex, GraphOps, ResolutionGraph};

/// Assembles the in-memory graph plus its id index.
///
/// Linkages naming an entity id that is not in `entities` are dropped with a
/// warning rather than poisoning the graph. Parallel edges between the same
/// pair are preserved.
pub fn build_resolution_graph(
    entities: &[ResolvedEntity],
    linkages: &[LinkageProposal],
) -> (ResolutionGraph, EntityIdIndex) {
    let mut graph = ResolutionGraph::with_capacity(entities.len(), linkages.len());
    let mut id_index = EntityIdIndex::with_capacity(entities.len());
    let mut ops = GraphOps::new(&mut graph, &mut id_index);

    for entity in entities {
        ops.add_entity(GraphNode {
            id: entity.id.clone(),
            label: entity.canonical_name.clone(),
            entity_type: entity.entity_type,
            mention_count: entity.mention_count(),
        });
    }
    for linkage in linkages {
        let [source_id, target_id] = linkage.entity_ids.clone();
        let added = ops.add_linkage(GraphEdge {
            source_id,
            target_id,
            confidence: linkage.confidence,
            algorithm: linkage.algorithm,
            status: linkage.status,
        });
        if !added {
            warn!(linkage_id = %linkage.id, "dropping linkage with unknown entity id");
        }
    }

    (graph, id_index)
}

/// Builds the serializable entity graph.
///
/// Node order follows entity order and edge order follows linkage order, so
/// the output is deterministic for a given arena.
pub fn build_graph(entities: &[ResolvedEntity], linkages: &[LinkageProposal]) -> EntityGraph {
    let (graph, _) = build_resolution_graph(entities, linkages);
    snapshot(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dramatis_core::{EntityType, LinkageDecision, LinkageStatus, MatchAlgorithm};

    fn entity(id: &str, name: &str) -> ResolvedEntity {
        ResolvedEntity::new(id, name, EntityType::Person, 0.82)
    }

    fn linkage(id: &str, source: &str, target: &str) -> LinkageProposal {
        LinkageProposal::pending(
            id,
            "a",
            "b",
            [source.to_string(), target.to_string()],
            0.75,
            MatchAlgorithm::Levenshtein,
        )
    }

    #[test]
    fn nodes_and_edges_mirror_the_arena() {
        let entities = vec![
            entity("entity-0", "Sarah Thompson"),
            entity("entity-1", "Sam Thompson"),
        ];
        let linkages = vec![linkage("linkage-0", "entity-0", "entity-1")];

        let graph = build_graph(&entities, &linkages);
        assert!(graph.is_consistent());
        assert_eq!(graph.metadata.node_count, 2);
        assert_eq!(graph.metadata.edge_count, 1);
        assert_eq!(graph.nodes[0].id, "entity-0");
        assert_eq!(graph.nodes[0].label, "Sarah Thompson");
        assert_eq!(graph.edges[0].source_id, "entity-0");
        assert_eq!(graph.edges[0].target_id, "entity-1");
        assert_eq!(graph.edges[0].status, LinkageStatus::Pending);
    }

    #[test]
    fn reviewed_linkages_still_become_edges() {
        let entities = vec![
            entity("entity-0", "Sarah Thompson"),
            entity("entity-1", "Sam Thompson"),
            entity("entity-2", "S. Thompson"),
        ];
        let mut accepted = linkage("linkage-0", "entity-0", "entity-2");
        accepted.review(LinkageDecision::Accept).unwrap();
        let mut rejected = linkage("linkage-1", "entity-0", "entity-1");
        rejected.review(LinkageDecision::Reject).unwrap();

        let graph = build_graph(&entities, &[accepted, rejected]);
        assert_eq!(graph.metadata.edge_count, 2);
        assert_eq!(graph.edges[0].status, LinkageStatus::Accepted);
        assert_eq!(graph.edges[1].status, LinkageStatus::Rejected);
    }

    #[test]
    fn dangling_linkages_are_dropped() {
        let entities = vec![entity("entity-0", "Sarah Thompson")];
        let linkages = vec![linkage("linkage-0", "entity-0", "entity-9")];

        let graph = build_graph(&entities, &linkages);
        assert!(graph.is_consistent());
        assert_eq!(graph.metadata.node_count, 1);
        assert_eq!(graph.metadata.edge_count, 0);
    }

    #[test]
    fn repeated_builds_serialize_identically() {
        let entities = vec![
            entity("entity-0", "Sarah Thompson"),
            entity("entity-1", "Sam Thompson"),
        ];
        let linkages = vec![linkage("linkage-0", "entity-0", "entity-1")];

        let first = serde_json::to_string(&build_graph(&entities, &linkages)).unwrap();
        let second = serde_json::to_string(&build_graph(&entities, &linkages)).unwrap();
        assert_eq!(first, second);
    }
}
