//! Incremental entity resolution.
//!
//! The resolver consumes mentions one at a time and maintains an arena of
//! resolved entities. Each mention is compared against the canonical name of
//! every type-compatible entity already in the arena. A match at or above the
//! configured auto-merge tier folds the mention into the existing entity.
//! Weaker similarity that still clears the review floor seeds a fresh entity
//! and records a pending linkage proposal for a human reviewer. Anything
//! below the floor seeds a fresh entity with no proposal.
//!
//! Two situations downgrade an otherwise mergeable match to a proposal: the
//! mention and the entity carry conflicting professional roles, or two
//! entities tie for the best match and the mention is ambiguous between
//! them. Processing order is deterministic, so identical input always yields
//! identical entity and linkage identifiers.

use tracing::debug;

use dramatis_core::{
    LinkageProposal, MentionRecord, RawMention, ResolutionConfig, ResolvedEntity,
};

use crate::matching::{MatchResult, NameMatcher, NormalizedName};

/// Final output of a resolution run.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSet {
    pub entities: Vec<ResolvedEntity>,
    pub proposals: Vec<LinkageProposal>,
}

/// Stateful resolver that clusters mentions into entities.
#[derive(Debug)]
pub struct EntityResolver {
    config: ResolutionConfig,
    matcher: NameMatcher,
    entities: Vec<ResolvedEntity>,
    proposals: Vec<LinkageProposal>,
}

impl EntityResolver {
    /// Creates a resolver with an empty arena.
    pub fn new(config: ResolutionConfig) -> Self {
        let matcher = NameMatcher::new(config.clone());
        Self {
            config,
            matcher,
            entities: Vec::new(),
            proposals: Vec::new(),
        }
    }

    /// The configuration this resolver runs under.
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Entities resolved so far, in seeding order.
    pub fn entities(&self) -> &[ResolvedEntity] {
        &self.entities
    }

    /// Linkage proposals raised so far, in creation order.
    pub fn proposals(&self) -> &[LinkageProposal] {
        &self.proposals
    }

    /// Feeds every mention through [`EntityResolver::ingest`] in order.
    pub fn ingest_all(&mut self, mentions: &[RawMention]) {
        for mention in mentions {
            self.ingest(mention);
        }
    }

    /// Routes one mention into the arena.
    ///
    /// Mentions with blank text are dropped. Otherwise the mention either
    /// merges into the best-matching entity or seeds a new one, possibly
    /// with a linkage proposal attached.
    pub fn ingest(&mut self, mention: &RawMention) {
        if mention.text.trim().is_empty() {
            debug!(doc_id = %mention.source_doc_id, "skipping mention with blank text");
            return;
        }

        // Best candidate wins on score, then on tier strength, then on
        // absence of a role conflict. Ties at the best key leave the
        // mention ambiguous.
        let mut best: Option<(usize, MatchResult, bool)> = None;
        let mut best_count = 0usize;
        for (index, entity) in self.entities.iter().enumerate() {
            if !entity.entity_type.is_compatible(mention.candidate_type) {
                continue;
            }
            let result = self.matcher.match_names(&entity.canonical_name, &mention.text);
            if result.score <= 0.0 {
                continue;
            }
            let conflict = self.role_conflict(entity, mention);
            let key = (result.score, result.algorithm, !conflict);
            match &best {
                Some((_, held, held_conflict)) => {
                    let current = (held.score, held.algorithm, !*held_conflict);
                    if key > current {
                        best = Some((index, result, conflict));
                        best_count = 1;
                    } else if key == current {
                        best_count += 1;
                    }
                }
                None => {
                    best = Some((index, result, conflict));
                    best_count = 1;
                }
            }
        }

        match best {
            Some((index, result, conflict))
                if result.is_match && result.algorithm >= self.config.auto_merge_tier =>
            {
                if conflict || best_count > 1 {
                    self.propose_and_seed(index, result, mention);
                } else {
                    self.merge(index, result, mention);
                }
            }
            Some((index, result, _)) if result.score >= self.config.review_band_floor => {
                self.propose_and_seed(index, result, mention);
            }
            _ => {
                self.seed(mention);
            }
        }
    }

    /// Consumes the resolver and returns the accumulated arena.
    pub fn finish(self) -> ResolvedSet {
        ResolvedSet {
            entities: self.entities,
            proposals: self.proposals,
        }
    }

    /// True when the entity and the mention carry different professional
    /// roles and the configuration does not allow merging across them.
    fn role_conflict(&self, entity: &ResolvedEntity, mention: &RawMention) -> bool {
        if self.config.merge_across_roles {
            return false;
        }
        matches!((entity.role, mention.role), (Some(a), Some(b)) if a != b)
    }

    /// Folds a mention into an existing entity.
    fn merge(&mut self, index: usize, result: MatchResult, mention: &RawMention) {
        let weight = self.config.corroboration_weight;
        let entity = &mut self.entities[index];
        entity.record_mention(mention_record(mention));
        entity.add_alias(mention.text.clone());
        if more_complete(&mention.text, &entity.canonical_name) {
            entity.canonical_name = mention.text.clone();
        }
        if entity.role.is_none() {
            entity.role = mention.role;
        }
        if mention.candidate_type.outranks(entity.entity_type) {
            entity.entity_type = mention.candidate_type;
        }
        entity.corroborate(mention.extraction_confidence(), weight);
        debug!(
            entity_id = %entity.id,
            mention = %mention.text,
            algorithm = %result.algorithm.as_str(),
            score = result.score,
            "merged mention into entity"
        );
    }

    /// Seeds a fresh entity for the mention and returns its arena index.
    fn seed(&mut self, mention: &RawMention) -> usize {
        let id = format!("entity-{}", self.entities.len());
        let mut entity = ResolvedEntity::new(
            id,
            mention.text.clone(),
            mention.candidate_type,
            mention.extraction_confidence(),
        );
        if let Some(role) = mention.role {
            entity = entity.with_role(role);
        }
        entity.record_mention(mention_record(mention));
        debug!(entity_id = %entity.id, name = %entity.canonical_name, "seeded new entity");
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Seeds a fresh entity and raises a pending proposal linking it to the
    /// near-miss candidate at `index`.
    fn propose_and_seed(&mut self, index: usize, result: MatchResult, mention: &RawMention) {
        let seeded = self.seed(mention);
        let id = format!("linkage-{}", self.proposals.len());
        let existing = &self.entities[index];
        let fresh = &self.entities[seeded];
        let proposal = LinkageProposal::pending(
            id,
            existing.canonical_name.clone(),
            fresh.canonical_name.clone(),
            [existing.id.clone(), fresh.id.clone()],
            result.score,
            result.algorithm,
        );
        debug!(
            linkage_id = %proposal.id,
            entity1 = %proposal.entity1_name,
            entity2 = %proposal.entity2_name,
            score = result.score,
            "raised linkage proposal"
        );
        self.proposals.push(proposal);
    }
}

fn mention_record(mention: &RawMention) -> MentionRecord {
    MentionRecord {
        doc_id: mention.source_doc_id.clone(),
        text: mention.text.clone(),
        context: mention.context_snippet.clone(),
    }
}

/// True when `candidate` is a fuller surface form than `current`. More
/// normalized tokens win; equal token counts fall back to normalized length.
/// Equal forms keep the incumbent, so the first-seen spelling is canonical.
fn more_complete(candidate: &str, current: &str) -> bool {
    let candidate = NormalizedName::parse(candidate);
    let current = NormalizedName::parse(current);
    match candidate.tokens().len().cmp(&current.tokens().len()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => {
            candidate.joined().chars().count() > current.joined().chars().count()
        }
    }
}
