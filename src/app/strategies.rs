use crate::core::RagStrategy;

const NAIVE_DOCUMENTS: [&str; 2] = ["Document 1: Basics of Python.", "Document 2: OOP in Python."];

const ADVANCED_CORPUS: [&str; 3] = [
    "Document 1: Basics of Python.",
    "Document 2: Advanced Python Design Patterns.",
    "Document 3: Strategy Pattern in Depth.",
];

pub const ADVANCED_KEYWORD: &str = "Design Patterns";

/// Returns the same two documents for every query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveRag;

impl RagStrategy for NaiveRag {
    fn name(&self) -> &str {
        "naive"
    }

    fn retrieve(&self, _query: &str) -> Vec<String> {
        NAIVE_DOCUMENTS.iter().map(|doc| doc.to_string()).collect()
    }
}

/// Filters a fixed corpus by [`ADVANCED_KEYWORD`]. The query text is not consulted, so every
/// query gets the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedRag;

impl RagStrategy for AdvancedRag {
    fn name(&self) -> &str {
        "advanced"
    }

    fn retrieve(&self, _query: &str) -> Vec<String> {
        ADVANCED_CORPUS
            .iter()
            .filter(|doc| doc.contains(ADVANCED_KEYWORD))
            .map(|doc| doc.to_string())
            .collect()
    }
}
