//! dramatis-extract - Pattern-based entity mention extraction.
//!
//! Scans case document text for people, professionals, organizations, and
//! courts using a cascade of compiled regex patterns. Stronger patterns
//! claim their spans first, so a titled name is never re-reported as a bare
//! full name, and surnames already seen in fuller forms can be picked up on
//! their own later in the batch.
//!
//! # Example
//!
//! ```ignore
//! use dramatis_core::DocumentRecord;
//! use dramatis_extract::MentionExtractor;
//!
//! let doc = DocumentRecord::new("doc-1")
//!     .with_text("SW Sarah Thompson visited the family home.");
//! let mentions = MentionExtractor::new().extract(&doc);
//! assert_eq!(mentions[0].text, "SW Sarah Thompson");
//! ```

mod extractor;
mod patterns;

pub use extractor::{MentionExtractor, EXTRACTION_METHOD};
pub use patterns::role_for_title;
