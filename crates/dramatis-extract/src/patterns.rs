//! Compiled pattern tables for mention detection.
//!
//! Patterns are tuned for UK family-court case documents: professional
//! titles and rank abbreviations ("SW", "DC", "HHJ"), judicial-body
//! suffixes, and institutional suffixes. All patterns are case-sensitive
//! since capitalization is the main signal separating names from prose.

use once_cell::sync::Lazy;
use regex::Regex;

use dramatis_core::types::ProfessionalRole;

/// One capitalized name word, allowing "O'Brien", "D'Angelo", and
/// hyphenated compounds like "Johnson-Smith".
const NAME_WORD: &str = r"(?:[A-Z]['’])?[A-Z][a-z]+(?:[-'’][A-Z][a-z]+)*";

/// Leading title or honorific followed by optional initials and one to
/// three name words ("Dr. Sarah Johnson", "Dr. S. Thompson", "SW Thompson").
/// Longer titles come first so phrase titles win over their prefixes.
pub(crate) static TITLED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(His Honour Judge|Her Honour Judge|Deputy District Judge|District Judge|Professor|Prof|Doctor|Dr|Recorder|Justice|Judge|HHJ|DJ|Sergeant|Sgt|Inspector|Insp|Nurse|Guardian|Solicitor|Barrister|Counsel|FSW|SW|HV|DC|DS|DI|PC|Mrs|Miss|Master|Mx|Mr|Ms|Sir|Dame|Lady|Lord|Reverend|Rev)\.?\s+((?:[A-Z]\.\s?){{0,3}}{nw}(?:\s+{nw}){{0,2}})",
        nw = NAME_WORD
    ))
    .unwrap()
});

/// Name followed by a counsel postnominal ("James Turner QC").
pub(crate) static COUNSEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b((?:[A-Z]\.\s?){{0,3}}{nw}(?:\s+{nw})?)\s+(QC|KC)\b",
        nw = NAME_WORD
    ))
    .unwrap()
});

/// Capitalized phrase ending in a judicial-body suffix. Callers must
/// reject single-word matches (a bare "Court" is not a court name).
pub(crate) static COURT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:[A-Z][a-z]+['’]?\s+)*(?:Courts?|Tribunal)(?:\s+of\s+[A-Z][a-z]+)*)\b")
        .unwrap()
});

/// Capitalized phrase ending in an institutional suffix. Leading words
/// allow possessives ("Children's") and all-caps tokens ("NHS").
pub(crate) static ORGANIZATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:(?:[A-Z]{2,}|[A-Z][a-z]+(?:['’]s)?(?:-[A-Za-z]+)*)\s+)+(?:Services?|Council|Police|Trust|Agency|Authority|Board|Bureau|Department|Foundation|Association|Society|Centre|Hospital|School|Unit|Team))\b")
        .unwrap()
});

/// Well-known agency acronyms that appear without any suffix word.
pub(crate) static ACRONYM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(NSPCC|CAFCASS|Cafcass|CPS|NHS|HMCTS)\b").unwrap());

/// Two or three bare capitalized name words.
pub(crate) static FULL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({nw}(?:\s+{nw}){{1,2}})\b", nw = NAME_WORD)).unwrap()
});

/// One to three initials followed by a surname ("S. Thompson", "J.K. Rowling").
pub(crate) static INITIAL_SURNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b((?:[A-Z]\.\s?){{1,3}}{nw})\b", nw = NAME_WORD)).unwrap()
});

/// A single capitalized name word, for the known-surname pass.
pub(crate) static SINGLE_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b({nw})\b", nw = NAME_WORD)).unwrap());

/// Professional titles and the role each one implies. Keys are lowercase.
const TITLE_ROLES: &[(&str, ProfessionalRole)] = &[
    ("dr", ProfessionalRole::Doctor),
    ("doctor", ProfessionalRole::Doctor),
    ("prof", ProfessionalRole::Doctor),
    ("professor", ProfessionalRole::Doctor),
    ("nurse", ProfessionalRole::Nurse),
    ("hv", ProfessionalRole::HealthVisitor),
    ("sw", ProfessionalRole::SocialWorker),
    ("fsw", ProfessionalRole::SocialWorker),
    ("guardian", ProfessionalRole::Guardian),
    ("judge", ProfessionalRole::Judge),
    ("justice", ProfessionalRole::Judge),
    ("recorder", ProfessionalRole::Judge),
    ("hhj", ProfessionalRole::Judge),
    ("dj", ProfessionalRole::Judge),
    ("district judge", ProfessionalRole::Judge),
    ("deputy district judge", ProfessionalRole::Judge),
    ("his honour judge", ProfessionalRole::Judge),
    ("her honour judge", ProfessionalRole::Judge),
    ("dc", ProfessionalRole::PoliceOfficer),
    ("ds", ProfessionalRole::PoliceOfficer),
    ("di", ProfessionalRole::PoliceOfficer),
    ("pc", ProfessionalRole::PoliceOfficer),
    ("sgt", ProfessionalRole::PoliceOfficer),
    ("sergeant", ProfessionalRole::PoliceOfficer),
    ("insp", ProfessionalRole::PoliceOfficer),
    ("inspector", ProfessionalRole::PoliceOfficer),
    ("solicitor", ProfessionalRole::Solicitor),
    ("barrister", ProfessionalRole::Barrister),
    ("counsel", ProfessionalRole::Barrister),
];

/// Social honorifics that mark a person without implying a profession.
const SOCIAL_HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "master", "sir", "dame", "lady", "lord", "rev", "reverend",
];

/// Capitalized words that look like name words but almost never are.
/// Checked against the leading words of bare-name candidates and against
/// known-surname hits. Includes function words because sentence-initial
/// capitalization otherwise turns "On Tuesday" into a name.
pub(crate) const NAME_STOPWORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "his", "her", "their", "our", "he", "she",
    "it", "they", "we", "on", "in", "at", "by", "to", "of", "for", "from", "with", "after",
    "before", "during", "when", "while", "since", "until", "between", "against", "about", "under",
    "upon", "following", "however", "although", "therefore", "meanwhile", "north", "south",
    "east", "west", "upper", "lower", "greater", "little", "new", "old", "great", "central",
    "royal", "high", "local", "care", "case", "court", "interim", "final", "emergency",
    "protection", "placement", "supervision", "contact", "residence", "special", "public",
    "private", "family", "county", "crown", "district", "magistrates", "child", "children",
    "young", "youth", "last", "next", "early", "late", "january", "february", "march", "april",
    "may", "june", "july", "august", "september", "october", "november", "december", "monday",
    "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Function words trimmed from the front of court and organization
/// phrases when sentence-initial capitalization pulls them in.
pub(crate) const LEADING_FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "at", "in", "on", "by", "to", "of", "from", "for", "with", "before",
    "after",
];

/// Trailing words that mark a capitalized phrase as a document or process
/// name rather than a person ("Care Order", "Parenting Assessment").
pub(crate) const DOCUMENT_SUFFIX_STOPWORDS: &[&str] = &[
    "order",
    "hearing",
    "report",
    "assessment",
    "plan",
    "proceedings",
    "act",
    "regulations",
    "review",
    "conference",
    "meeting",
    "statement",
    "application",
    "summary",
    "panel",
    "register",
];

/// Look up the professional role a title implies, if any.
pub fn role_for_title(title: &str) -> Option<ProfessionalRole> {
    let key = title.trim_end_matches('.').to_lowercase();
    TITLE_ROLES
        .iter()
        .find(|(t, _)| *t == key)
        .map(|(_, role)| *role)
}

/// Whether a title token is a social honorific rather than a profession.
pub(crate) fn is_social_honorific(title: &str) -> bool {
    let key = title.trim_end_matches('.').to_lowercase();
    SOCIAL_HONORIFICS.contains(&key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        assert_eq!(role_for_title("Dr"), Some(ProfessionalRole::Doctor));
        assert_eq!(role_for_title("Dr."), Some(ProfessionalRole::Doctor));
        assert_eq!(role_for_title("SW"), Some(ProfessionalRole::SocialWorker));
        assert_eq!(role_for_title("DC"), Some(ProfessionalRole::PoliceOfficer));
        assert_eq!(
            role_for_title("His Honour Judge"),
            Some(ProfessionalRole::Judge)
        );
        assert_eq!(role_for_title("Mr"), None);
        assert_eq!(role_for_title("Stephen"), None);
    }

    #[test]
    fn test_social_honorifics() {
        assert!(is_social_honorific("Mr"));
        assert!(is_social_honorific("Mrs."));
        assert!(is_social_honorific("miss"));
        assert!(!is_social_honorific("Dr"));
        assert!(!is_social_honorific("SW"));
    }

    #[test]
    fn test_titled_pattern_matches() {
        let caps = TITLED_RE.captures("seen by Dr. Sarah Johnson today").unwrap();
        assert_eq!(&caps[1], "Dr");
        assert_eq!(&caps[2], "Sarah Johnson");

        let caps = TITLED_RE.captures("SW Thompson conducted").unwrap();
        assert_eq!(&caps[1], "SW");
        assert_eq!(&caps[2], "Thompson");

        let caps = TITLED_RE.captures("before His Honour Judge Taylor QC").unwrap();
        assert_eq!(&caps[1], "His Honour Judge");
        assert_eq!(&caps[2], "Taylor");

        let caps = TITLED_RE.captures("assessed by Dr. S. Thompson on").unwrap();
        assert_eq!(&caps[1], "Dr");
        assert_eq!(&caps[2], "S. Thompson");
    }

    #[test]
    fn test_titled_pattern_needs_capitalized_name() {
        assert!(TITLED_RE.captures("Miss the deadline").is_none());
        assert!(TITLED_RE.captures("Drake Smith arrived").is_none());
    }

    #[test]
    fn test_court_pattern() {
        let caps = COURT_RE
            .captures("heard at East London Family Court on Friday")
            .unwrap();
        assert_eq!(&caps[1], "East London Family Court");

        let caps = COURT_RE.captures("the Royal Courts of Justice").unwrap();
        assert_eq!(&caps[1], "Royal Courts of Justice");
    }

    #[test]
    fn test_organization_pattern() {
        let caps = ORGANIZATION_RE
            .captures("referred to Children's Services by the school")
            .unwrap();
        assert_eq!(&caps[1], "Children's Services");

        let caps = ORGANIZATION_RE
            .captures("contacted Thames Valley Police about")
            .unwrap();
        assert_eq!(&caps[1], "Thames Valley Police");

        let caps = ORGANIZATION_RE.captures("an NHS Foundation Trust").unwrap();
        assert_eq!(&caps[1], "NHS Foundation Trust");
    }

    #[test]
    fn test_full_name_pattern() {
        let caps = FULL_NAME_RE.captures("father Paul Stephen attended").unwrap();
        assert_eq!(&caps[1], "Paul Stephen");

        let caps = FULL_NAME_RE.captures("met Sarah Johnson-Smith there").unwrap();
        assert_eq!(&caps[1], "Sarah Johnson-Smith");

        let caps = FULL_NAME_RE.captures("with Liam O'Brien present").unwrap();
        assert_eq!(&caps[1], "Liam O'Brien");
    }

    #[test]
    fn test_initial_surname_pattern() {
        let caps = INITIAL_SURNAME_RE.captures("signed by S. Thompson").unwrap();
        assert_eq!(&caps[1], "S. Thompson");

        let caps = INITIAL_SURNAME_RE.captures("author J.K. Rowling wrote").unwrap();
        assert_eq!(&caps[1], "J.K. Rowling");
    }
}
