//! Input document records.

use serde::{Deserialize, Serialize};

/// A document as supplied by the document store.
///
/// The resolution core consumes only `id` and `extracted_text`; absent or
/// whitespace-only text is valid input and yields zero mentions for that
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Document identifier, carried through to mention citations.
    pub id: String,
    /// Extracted plain text, if the document has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

impl DocumentRecord {
    /// Create a document record without text.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extracted_text: None,
        }
    }

    /// Set the extracted text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.extracted_text = Some(text.into());
        self
    }

    /// Whether this document carries any non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.extracted_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = DocumentRecord::new("doc-1").with_text("Some report text");
        assert_eq!(doc.id, "doc-1");
        assert!(doc.has_text());
    }

    #[test]
    fn test_has_text_edge_cases() {
        assert!(!DocumentRecord::new("a").has_text());
        assert!(!DocumentRecord::new("b").with_text("").has_text());
        assert!(!DocumentRecord::new("c").with_text("   \n\t ").has_text());
    }
}
