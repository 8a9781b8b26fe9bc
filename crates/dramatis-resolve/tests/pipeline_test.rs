//! Integration tests for the document resolution pipeline.
//!
//! Drives extraction, resolution, and graph assembly end to end over small
//! case-document batches, then checks scale behavior on a synthetic arena.

use std::time::Instant;

use dramatis_core::{
    DocumentRecord, EntityType, LinkageDecision, LinkageProposal, LinkageStatus, MatchAlgorithm,
    ProfessionalRole, ResolutionConfig, ResolutionResult, ResolvedEntity,
};
use dramatis_resolve::{build_graph, resolve_documents, NameMatcher};

fn case_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new("doc-1").with_text(
            "SW Sarah Thompson completed the initial assessment. \
             Dr. Michael Roberts examined the child at Leeds General Hospital.",
        ),
        DocumentRecord::new("doc-2").with_text(
            "Thompson presented her findings to the Leeds Family Court. \
             Dr. Roberts agreed with the care plan for Paul Stephen.",
        ),
    ]
}

/// Two documents about the same case collapse into one entity per identity,
/// with bare surnames and titled variants folded into their fuller forms.
#[test]
fn test_case_documents_resolve_across_variants() {
    let result = resolve_documents(&case_documents(), &ResolutionConfig::default()).unwrap();

    assert_eq!(result.summary.total_entities, 5);
    assert_eq!(result.summary.professional_count, 2);
    assert_eq!(result.summary.people_count, 1);
    assert_eq!(result.summary.organization_count, 1);
    assert_eq!(result.summary.court_count, 1);
    assert_eq!(result.summary.aliases_resolved, 2);
    assert_eq!(result.summary.pending_linkages, 0);

    // The bare "Thompson" from doc-2 resolved into the social worker.
    let thompson = result.entity_by_alias("Thompson").unwrap();
    assert_eq!(thompson.canonical_name, "SW Sarah Thompson");
    assert_eq!(thompson.entity_type, EntityType::Professional);
    assert_eq!(thompson.role, Some(ProfessionalRole::SocialWorker));
    assert_eq!(thompson.mention_count(), 2);
    // Both source documents are cited.
    assert_eq!(thompson.mentions[0].doc_id, "doc-1");
    assert_eq!(thompson.mentions[1].doc_id, "doc-2");

    let roberts = result.entity_by_alias("Dr. Roberts").unwrap();
    assert_eq!(roberts.canonical_name, "Dr. Michael Roberts");
    assert_eq!(roberts.role, Some(ProfessionalRole::Doctor));

    assert_eq!(result.metadata.document_count, 2);
    assert_eq!(result.metadata.mention_count, 7);
    assert_eq!(result.metadata.extraction_method, "pattern-nlp");

    assert!(result.graph.is_consistent());
    assert_eq!(result.graph.metadata.node_count, 5);
    assert_eq!(result.graph.metadata.edge_count, 0);
}

/// A one-letter spelling difference is below the auto-merge tier, so the
/// default configuration keeps both entities and raises a pending proposal.
#[test]
fn test_spelling_variant_raises_a_proposal() {
    let docs = vec![DocumentRecord::new("doc-1").with_text(
        "Dr. Sarah Johnson examined the child. Dr. Sara Johnson signed the report.",
    )];
    let result = resolve_documents(&docs, &ResolutionConfig::default()).unwrap();

    assert_eq!(result.summary.total_entities, 2);
    assert_eq!(result.summary.pending_linkages, 1);

    let proposal = &result.linkages[0];
    assert_eq!(proposal.id, "linkage-0");
    assert_eq!(proposal.status, LinkageStatus::Pending);
    assert_eq!(proposal.algorithm, MatchAlgorithm::Levenshtein);
    assert!(proposal.confidence > 0.9);
    assert_eq!(
        proposal.entity_ids,
        ["entity-0".to_string(), "entity-1".to_string()]
    );

    // The proposal is mirrored as a graph edge.
    assert_eq!(result.graph.metadata.edge_count, 1);
    assert_eq!(result.graph.edges[0].status, LinkageStatus::Pending);
}

/// A reviewer decision sticks; the proposal cannot be re-reviewed.
#[test]
fn test_proposal_review_is_final() {
    let docs = vec![DocumentRecord::new("doc-1").with_text(
        "Dr. Sarah Johnson examined the child. Dr. Sara Johnson signed the report.",
    )];
    let result = resolve_documents(&docs, &ResolutionConfig::default()).unwrap();

    let mut proposal = result.linkages[0].clone();
    proposal.review(LinkageDecision::Accept).unwrap();
    assert_eq!(proposal.status, LinkageStatus::Accepted);

    let err = proposal.review(LinkageDecision::Reject).unwrap_err();
    assert!(err.to_string().contains("Illegal linkage transition"));
    assert_eq!(proposal.status, LinkageStatus::Accepted);
}

/// The same batch always produces byte-identical entities, linkages, and
/// graph output. Run metadata carries timestamps and is excluded.
#[test]
fn test_repeated_runs_are_deterministic() {
    let docs = case_documents();
    let config = ResolutionConfig::default();

    let first = resolve_documents(&docs, &config).unwrap();
    let second = resolve_documents(&docs, &config).unwrap();

    let entities_a = serde_json::to_string(&first.entities).unwrap();
    let entities_b = serde_json::to_string(&second.entities).unwrap();
    assert_eq!(entities_a, entities_b);

    let linkages_a = serde_json::to_string(&first.linkages).unwrap();
    let linkages_b = serde_json::to_string(&second.linkages).unwrap();
    assert_eq!(linkages_a, linkages_b);

    let graph_a = serde_json::to_string(&first.graph).unwrap();
    let graph_b = serde_json::to_string(&second.graph).unwrap();
    assert_eq!(graph_a, graph_b);
}

/// The result serializes with camelCase keys and survives a round trip.
#[test]
fn test_result_round_trips_through_json() {
    let result = resolve_documents(&case_documents(), &ResolutionConfig::default()).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"canonicalName\""));
    assert!(json.contains("\"entityType\""));
    assert!(json.contains("\"mentionCount\""));
    assert!(json.contains("\"processingTimeMs\""));

    let parsed: ResolutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.entities.len(), result.entities.len());
    assert_eq!(parsed.summary, result.summary);
    assert_eq!(parsed.graph, result.graph);
}

/// Graph assembly stays fast at review scale.
#[test]
fn test_graph_builds_quickly_at_one_thousand_nodes() {
    let entities: Vec<ResolvedEntity> = (0..1000)
        .map(|i| {
            ResolvedEntity::new(
                format!("entity-{i}"),
                format!("Person Number{i}"),
                EntityType::Person,
                0.8,
            )
        })
        .collect();
    // Link every fifth entity to its successor.
    let linkages: Vec<_> = (0..1000)
        .step_by(5)
        .filter(|i| i + 1 < 1000)
        .enumerate()
        .map(|(n, i)| {
            LinkageProposal::pending(
                format!("linkage-{n}"),
                format!("Person Number{i}"),
                format!("Person Number{}", i + 1),
                [format!("entity-{i}"), format!("entity-{}", i + 1)],
                0.75,
                MatchAlgorithm::Levenshtein,
            )
        })
        .collect();

    let start = Instant::now();
    let graph = build_graph(&entities, &linkages);
    let elapsed = start.elapsed();

    assert!(graph.is_consistent());
    assert_eq!(graph.metadata.node_count, 1000);
    assert_eq!(graph.metadata.edge_count, 200);
    assert!(
        elapsed.as_secs_f64() < 2.0,
        "graph assembly took {elapsed:?}"
    );
}

/// Batch comparison of a couple hundred pairs finishes well inside the
/// interactive budget and accounts for every pair.
#[test]
fn test_batch_match_stays_interactive() {
    let firsts = ["Sarah", "Michael", "Helen", "James", "Paul", "Laura"];
    let surnames = ["Thompson", "Roberts", "Mills", "Turner", "Stephen", "Hughes"];
    let pairs: Vec<(String, String)> = (0..200)
        .map(|i| {
            let a = format!("{} {}", firsts[i % 6], surnames[i % 5]);
            // Every fourth pair abbreviates the first name so some pairs match.
            let b = if i % 4 == 0 {
                format!("{}. {}", &firsts[i % 6][..1], surnames[i % 5])
            } else {
                format!("{} {}", firsts[(i + 1) % 6], surnames[i % 5])
            };
            (a, b)
        })
        .collect();

    let matcher = NameMatcher::default();
    let start = Instant::now();
    let batch = matcher.batch_match(&pairs);
    let elapsed = start.elapsed();

    assert_eq!(batch.summary.total_comparisons, 200);
    assert_eq!(batch.results.len(), 200);
    assert_eq!(batch.summary.match_count, 50);
    assert!(elapsed.as_millis() < 100, "batch match took {elapsed:?}");
}
