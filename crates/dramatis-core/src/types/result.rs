//! Resolution run output: entities, linkages, graph, and run metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{EntityType, ResolvedEntity};
use super::graph::EntityGraph;
use super::linkage::LinkageProposal;

/// Per-category counts over a finished resolution run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub total_entities: usize,
    pub people_count: usize,
    pub professional_count: usize,
    pub organization_count: usize,
    pub court_count: usize,
    /// Aliases beyond each entity's canonical form.
    pub aliases_resolved: usize,
    /// Proposals still awaiting review.
    pub pending_linkages: usize,
}

impl ResolutionSummary {
    /// Tally a summary from the run's entities and linkage proposals.
    pub fn tally(entities: &[ResolvedEntity], linkages: &[LinkageProposal]) -> Self {
        let mut summary = Self {
            total_entities: entities.len(),
            ..Self::default()
        };
        for entity in entities {
            match entity.entity_type {
                EntityType::Person => summary.people_count += 1,
                EntityType::Professional => summary.professional_count += 1,
                EntityType::Organization => summary.organization_count += 1,
                EntityType::Court => summary.court_count += 1,
            }
            summary.aliases_resolved += entity.aliases.len().saturating_sub(1);
        }
        summary.pending_linkages = linkages.iter().filter(|l| l.is_pending()).count();
        summary
    }
}

/// How and when a resolution run was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetadata {
    /// Extraction method identifier (currently always pattern based).
    pub extraction_method: String,
    /// Wall-clock duration of the run in milliseconds.
    pub processing_time_ms: u64,
    /// Documents fed into the run.
    pub document_count: usize,
    /// Raw mentions the extractor produced.
    pub mention_count: usize,
    /// Completion timestamp.
    pub completed_at: DateTime<Utc>,
}

/// Complete output of one resolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// Resolved entities in creation order.
    pub entities: Vec<ResolvedEntity>,
    /// Linkage proposals in creation order.
    pub linkages: Vec<LinkageProposal>,
    /// Serializable graph projection of entities and linkages.
    pub graph: EntityGraph,
    /// Per-category counts.
    pub summary: ResolutionSummary,
    /// Run provenance.
    pub metadata: ResolutionMetadata,
}

impl ResolutionResult {
    /// Look up an entity by id.
    pub fn entity_by_id(&self, id: &str) -> Option<&ResolvedEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Look up an entity by any of its aliases, case-sensitively.
    pub fn entity_by_alias(&self, alias: &str) -> Option<&ResolvedEntity> {
        self.entities
            .iter()
            .find(|e| e.aliases.iter().any(|a| a == alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::linkage::MatchAlgorithm;

    fn entity(id: &str, name: &str, entity_type: EntityType) -> ResolvedEntity {
        ResolvedEntity::new(id, name, entity_type, 0.8)
    }

    #[test]
    fn test_summary_tally_counts_categories() {
        let mut sarah = entity("entity-0", "Sarah Thompson", EntityType::Professional);
        sarah.add_alias("SW Thompson");
        sarah.add_alias("Thompson");
        let entities = vec![
            sarah,
            entity("entity-1", "Paul Stephen", EntityType::Person),
            entity("entity-2", "Children's Services", EntityType::Organization),
            entity("entity-3", "East London Family Court", EntityType::Court),
        ];
        let linkages = vec![LinkageProposal::pending(
            "linkage-0",
            "Sarah Thompson",
            "Sam Thompson",
            ["entity-0".to_string(), "entity-4".to_string()],
            0.78,
            MatchAlgorithm::Levenshtein,
        )];

        let summary = ResolutionSummary::tally(&entities, &linkages);
        assert_eq!(summary.total_entities, 4);
        assert_eq!(summary.people_count, 1);
        assert_eq!(summary.professional_count, 1);
        assert_eq!(summary.organization_count, 1);
        assert_eq!(summary.court_count, 1);
        assert_eq!(summary.aliases_resolved, 2);
        assert_eq!(summary.pending_linkages, 1);
    }

    #[test]
    fn test_summary_tally_skips_decided_linkages() {
        let mut proposal = LinkageProposal::pending(
            "linkage-0",
            "A",
            "B",
            ["entity-0".to_string(), "entity-1".to_string()],
            0.7,
            MatchAlgorithm::Levenshtein,
        );
        proposal
            .review(crate::types::linkage::LinkageDecision::Reject)
            .unwrap();
        let summary = ResolutionSummary::tally(&[], &[proposal]);
        assert_eq!(summary.pending_linkages, 0);
    }

    #[test]
    fn test_entity_lookup_by_alias() {
        let mut sarah = entity("entity-0", "Sarah Thompson", EntityType::Professional);
        sarah.add_alias("SW Thompson");
        let result = ResolutionResult {
            entities: vec![sarah],
            linkages: Vec::new(),
            graph: EntityGraph::empty(),
            summary: ResolutionSummary::default(),
            metadata: ResolutionMetadata {
                extraction_method: "pattern-nlp".to_string(),
                processing_time_ms: 3,
                document_count: 1,
                mention_count: 2,
                completed_at: Utc::now(),
            },
        };

        assert!(result.entity_by_id("entity-0").is_some());
        assert!(result.entity_by_id("entity-9").is_none());
        assert_eq!(
            result.entity_by_alias("SW Thompson").map(|e| e.id.as_str()),
            Some("entity-0")
        );
        assert!(result.entity_by_alias("sw thompson").is_none());
    }
}
