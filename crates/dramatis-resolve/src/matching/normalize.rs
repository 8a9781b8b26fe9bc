//! Name normalization for comparison.
//!
//! Normalization lowercases, tokenizes on whitespace and punctuation, and
//! strips unambiguous honorifics from the front. Two-letter rank
//! abbreviations ("SW", "DC") are only stripped when a given name is also
//! present: "DC Helen Mills" reduces to "helen mills", but "SW Thompson"
//! keeps its "sw" because without a given name the token could just as
//! well be someone's initials.

/// Honorifics never used as a leading name word, stripped while more than
/// one token remains.
const LEADING_HONORIFICS: &[&str] = &[
    "dr",
    "doctor",
    "mr",
    "mrs",
    "ms",
    "miss",
    "mx",
    "master",
    "prof",
    "professor",
    "judge",
    "justice",
    "recorder",
    "hhj",
    "dj",
    "sir",
    "dame",
    "lady",
    "lord",
    "rev",
    "reverend",
    "hon",
    "nurse",
    "sgt",
    "sergeant",
    "insp",
    "inspector",
    "his",
    "her",
    "honour",
    "deputy",
    "district",
    "solicitor",
    "barrister",
    "counsel",
    "guardian",
];

/// Rank abbreviations stripped only while at least a given name and a
/// surname remain after them.
const AMBIGUOUS_RANKS: &[&str] = &["sw", "fsw", "hv", "dc", "ds", "di", "pc"];

/// Postnominals stripped from the tail.
const TRAILING_POSTNOMINALS: &[&str] = &["qc", "kc", "jr", "sr", "jnr", "snr", "obe", "mbe", "cbe"];

/// A name reduced to lowercase comparison tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedName {
    tokens: Vec<String>,
    joined: String,
}

impl NormalizedName {
    /// Normalize a raw surface form.
    pub(crate) fn parse(raw: &str) -> Self {
        let cleaned = raw.replace('’', "'");
        let mut tokens: Vec<String> = cleaned
            .split(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '(' | ')'))
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'')
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
            .collect();

        loop {
            let strip = match tokens.first() {
                Some(first) if tokens.len() > 1 && LEADING_HONORIFICS.contains(&first.as_str()) => {
                    true
                }
                Some(first) if tokens.len() > 2 && AMBIGUOUS_RANKS.contains(&first.as_str()) => {
                    true
                }
                _ => false,
            };
            if !strip {
                break;
            }
            tokens.remove(0);
        }
        while tokens.len() > 1
            && tokens
                .last()
                .is_some_and(|last| TRAILING_POSTNOMINALS.contains(&last.as_str()))
        {
            tokens.pop();
        }

        let joined = tokens.join(" ");
        Self { tokens, joined }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens joined with single spaces.
    pub(crate) fn joined(&self) -> &str {
        &self.joined
    }

    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The final token, treated as the surname.
    pub(crate) fn surname(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// The first given-name token, present only for multi-token names.
    pub(crate) fn first_given(&self) -> Option<&str> {
        if self.tokens.len() >= 2 {
            self.tokens.first().map(String::as_str)
        } else {
            None
        }
    }

    /// Whether the name is just one token (a bare surname).
    pub(crate) fn is_single_token(&self) -> bool {
        self.tokens.len() == 1
    }
}
