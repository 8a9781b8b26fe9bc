//! Pattern-based mention extraction.
//!
//! The extractor scans document text with a fixed cascade of patterns, most
//! specific first, and claims each matched span so weaker patterns cannot
//! re-match inside it. A final pass picks up bare surnames, but only for
//! surnames already observed in a fuller form, so ordinary capitalized words
//! never become mentions on their own.
//!
//! Extraction is pure in-memory computation. Empty or missing document text
//! yields an empty mention list, never an error.

use std::collections::HashSet;

use tracing::debug;

use dramatis_core::types::{
    DocumentRecord, EntityType, MentionPattern, ProfessionalRole, RawMention,
};

use crate::patterns::{
    is_social_honorific, role_for_title, ACRONYM_RE, COUNSEL_RE, COURT_RE,
    DOCUMENT_SUFFIX_STOPWORDS, FULL_NAME_RE, INITIAL_SURNAME_RE, LEADING_FUNCTION_WORDS,
    NAME_STOPWORDS, ORGANIZATION_RE, SINGLE_WORD_RE, TITLED_RE,
};

/// Stable tag identifying this extraction strategy in result metadata.
pub const EXTRACTION_METHOD: &str = "pattern-nlp";

/// Scans document text and yields typed [`RawMention`]s.
pub struct MentionExtractor {
    context_window: usize,
}

impl Default for MentionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MentionExtractor {
    /// Create an extractor with the default 60-character context window.
    pub fn new() -> Self {
        Self { context_window: 60 }
    }

    /// Set how many characters of surrounding text each mention captures
    /// on each side.
    pub fn with_context_window(mut self, chars: usize) -> Self {
        self.context_window = chars.max(1);
        self
    }

    /// Extract mentions from a single document.
    ///
    /// The bare-surname pass only sees surnames from this document.
    pub fn extract(&self, doc: &DocumentRecord) -> Vec<RawMention> {
        let mut known = HashSet::new();
        self.extract_with_known(doc, &mut known)
    }

    /// Extract mentions from an ordered document set.
    ///
    /// Surnames accumulate across documents in order, so a bare "Thompson"
    /// in a later document links back to "SW Thompson" from an earlier one.
    /// Mentions come back in document order, then by position.
    pub fn extract_all(&self, docs: &[DocumentRecord]) -> Vec<RawMention> {
        let mut known = HashSet::new();
        let mut mentions = Vec::new();
        for doc in docs {
            mentions.extend(self.extract_with_known(doc, &mut known));
        }
        mentions
    }

    fn extract_with_known(
        &self,
        doc: &DocumentRecord,
        known_surnames: &mut HashSet<String>,
    ) -> Vec<RawMention> {
        if !doc.has_text() {
            return Vec::new();
        }
        let text = doc.extracted_text.as_deref().unwrap_or_default();

        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut mentions: Vec<RawMention> = Vec::new();

        self.scan_counsel(doc, text, &mut claimed, &mut mentions, known_surnames);
        self.scan_titled(doc, text, &mut claimed, &mut mentions, known_surnames);
        self.scan_courts(doc, text, &mut claimed, &mut mentions);
        self.scan_organizations(doc, text, &mut claimed, &mut mentions);
        self.scan_acronyms(doc, text, &mut claimed, &mut mentions);
        self.scan_full_names(doc, text, &mut claimed, &mut mentions, known_surnames);
        self.scan_initial_surnames(doc, text, &mut claimed, &mut mentions, known_surnames);
        self.scan_known_surnames(doc, text, &mut claimed, &mut mentions, known_surnames);

        mentions.sort_by_key(|m| m.position);
        debug!(doc_id = %doc.id, count = mentions.len(), "extracted mentions");
        mentions
    }

    /// "James Turner QC" style counsel references. Runs before the titled
    /// scan so the postnominal is not orphaned by a claimed honorific span.
    fn scan_counsel(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
        known_surnames: &mut HashSet<String>,
    ) {
        for caps in COUNSEL_RE.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if overlaps(claimed, whole.start(), whole.end()) {
                continue;
            }
            // "His Honour Judge Taylor QC" belongs to the titled scan.
            if role_for_title(first_word(name.as_str())).is_some() {
                continue;
            }
            claimed.push((whole.start(), whole.end()));
            record_surname(known_surnames, name.as_str());
            mentions.push(self.mention(
                doc,
                text,
                whole.start(),
                whole.end(),
                MentionPattern::TitledName,
                EntityType::Professional,
                Some(ProfessionalRole::Barrister),
            ));
        }
    }

    /// Title or honorific followed by a name. Professional titles yield a
    /// role; social honorifics yield plain person mentions.
    fn scan_titled(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
        known_surnames: &mut HashSet<String>,
    ) {
        for caps in TITLED_RE.captures_iter(text) {
            let (Some(whole), Some(title), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if overlaps(claimed, whole.start(), whole.end()) {
                continue;
            }
            let name_str = name.as_str();
            let (pattern, candidate_type, role) = if let Some(role) = role_for_title(title.as_str())
            {
                (MentionPattern::TitledName, EntityType::Professional, Some(role))
            } else if name_str.starts_with("Justice ") {
                // "Mr Justice Cobb" style High Court reference.
                (
                    MentionPattern::TitledName,
                    EntityType::Professional,
                    Some(ProfessionalRole::Judge),
                )
            } else if is_social_honorific(title.as_str()) {
                if name_str.split_whitespace().count() >= 2 {
                    (MentionPattern::TitledName, EntityType::Person, None)
                } else {
                    (MentionPattern::HonorificSurname, EntityType::Person, None)
                }
            } else {
                continue;
            };
            claimed.push((whole.start(), whole.end()));
            record_surname(known_surnames, name_str);
            mentions.push(self.mention(
                doc,
                text,
                whole.start(),
                whole.end(),
                pattern,
                candidate_type,
                role,
            ));
        }
    }

    fn scan_courts(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
    ) {
        for caps in COURT_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let start = trim_leading_words(text, m.start(), m.end(), LEADING_FUNCTION_WORDS);
            // A bare "Court" or "Tribunal" is not a court name.
            if !text[start..m.end()].contains(char::is_whitespace) {
                continue;
            }
            if overlaps(claimed, start, m.end()) {
                continue;
            }
            claimed.push((start, m.end()));
            mentions.push(self.mention(
                doc,
                text,
                start,
                m.end(),
                MentionPattern::CourtName,
                EntityType::Court,
                None,
            ));
        }
    }

    fn scan_organizations(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
    ) {
        for caps in ORGANIZATION_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let start = trim_leading_words(text, m.start(), m.end(), LEADING_FUNCTION_WORDS);
            if !text[start..m.end()].contains(char::is_whitespace) {
                continue;
            }
            if overlaps(claimed, start, m.end()) {
                continue;
            }
            claimed.push((start, m.end()));
            mentions.push(self.mention(
                doc,
                text,
                start,
                m.end(),
                MentionPattern::OrganizationName,
                EntityType::Organization,
                None,
            ));
        }
    }

    fn scan_acronyms(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
    ) {
        for caps in ACRONYM_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            if overlaps(claimed, m.start(), m.end()) {
                continue;
            }
            claimed.push((m.start(), m.end()));
            mentions.push(self.mention(
                doc,
                text,
                m.start(),
                m.end(),
                MentionPattern::OrganizationName,
                EntityType::Organization,
                None,
            ));
        }
    }

    fn scan_full_names(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
        known_surnames: &mut HashSet<String>,
    ) {
        for caps in FULL_NAME_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            // Sentence-initial function words capitalize; peel them off so
            // "Following Paul Stephen" still yields "Paul Stephen".
            let start = trim_leading_words(text, m.start(), m.end(), NAME_STOPWORDS);
            let candidate = &text[start..m.end()];
            let words: Vec<&str> = candidate.split_whitespace().collect();
            if words.len() < 2 {
                continue;
            }
            let Some(last) = words.last() else { continue };
            if DOCUMENT_SUFFIX_STOPWORDS.contains(&last.to_lowercase().as_str()) {
                continue;
            }
            if overlaps(claimed, start, m.end()) {
                continue;
            }
            claimed.push((start, m.end()));
            record_surname(known_surnames, candidate);
            mentions.push(self.mention(
                doc,
                text,
                start,
                m.end(),
                MentionPattern::FullName,
                EntityType::Person,
                None,
            ));
        }
    }

    fn scan_initial_surnames(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
        known_surnames: &mut HashSet<String>,
    ) {
        for caps in INITIAL_SURNAME_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            if overlaps(claimed, m.start(), m.end()) {
                continue;
            }
            claimed.push((m.start(), m.end()));
            record_surname(known_surnames, m.as_str());
            mentions.push(self.mention(
                doc,
                text,
                m.start(),
                m.end(),
                MentionPattern::InitialSurname,
                EntityType::Person,
                None,
            ));
        }
    }

    /// Bare capitalized words that match a surname already seen in a fuller
    /// form. The stopword gate keeps common words out even when someone's
    /// surname collides with one.
    fn scan_known_surnames(
        &self,
        doc: &DocumentRecord,
        text: &str,
        claimed: &mut Vec<(usize, usize)>,
        mentions: &mut Vec<RawMention>,
        known_surnames: &HashSet<String>,
    ) {
        for caps in SINGLE_WORD_RE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            if overlaps(claimed, m.start(), m.end()) {
                continue;
            }
            let key = m.as_str().to_lowercase();
            if !known_surnames.contains(&key) || NAME_STOPWORDS.contains(&key.as_str()) {
                continue;
            }
            claimed.push((m.start(), m.end()));
            mentions.push(self.mention(
                doc,
                text,
                m.start(),
                m.end(),
                MentionPattern::SurnameOnly,
                EntityType::Person,
                None,
            ));
        }
    }

    fn mention(
        &self,
        doc: &DocumentRecord,
        text: &str,
        start: usize,
        end: usize,
        pattern: MentionPattern,
        candidate_type: EntityType,
        role: Option<ProfessionalRole>,
    ) -> RawMention {
        RawMention {
            source_doc_id: doc.id.clone(),
            text: collapse_whitespace(&text[start..end]),
            context_snippet: context_snippet(text, start, end, self.context_window),
            position: start,
            pattern,
            candidate_type,
            role,
        }
    }
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Record the last token of a person name as a known surname.
fn record_surname(known: &mut HashSet<String>, name: &str) {
    if let Some(last) = name.split_whitespace().last() {
        let key = last.trim_end_matches(['.', ',']).to_lowercase();
        if key.len() > 1 && !NAME_STOPWORDS.contains(&key.as_str()) {
            known.insert(key);
        }
    }
}

/// Advance `start` past leading words found in `strip`, keeping at least
/// one word of the span.
fn trim_leading_words(text: &str, start: usize, end: usize, strip: &[&str]) -> usize {
    let mut start = start;
    loop {
        let span = &text[start..end];
        let mut words = span.split_whitespace();
        let (Some(first), Some(_)) = (words.next(), words.next()) else {
            break;
        };
        if !strip.contains(&first.to_lowercase().as_str()) {
            break;
        }
        let after_first = &text[start + first.len()..end];
        start += first.len() + (after_first.len() - after_first.trim_start().len());
    }
    start
}

/// A window of `window` characters on each side of the span, collapsed to
/// single spaces, cut on character boundaries.
fn context_snippet(text: &str, start: usize, end: usize, window: usize) -> String {
    let mut begin = start;
    for (taken, (idx, _)) in text[..start].char_indices().rev().enumerate() {
        begin = idx;
        if taken + 1 == window {
            break;
        }
    }
    let mut finish = end;
    for (taken, (idx, ch)) in text[end..].char_indices().enumerate() {
        if taken == window {
            break;
        }
        finish = end + idx + ch.len_utf8();
    }
    collapse_whitespace(&text[begin..finish])
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
