//! Wire types for the backend HTTP contract

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index statistics snapshot, fully replaced on each fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total chunks currently indexed
    pub total_chunks: u64,
    /// Chat model the service answers with
    pub model: String,
}

/// Per-document summary as reported by the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Source filename
    pub filename: String,
    /// Number of chunks indexed for this document
    pub chunks: u32,
}

/// One retrieval preview hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source filename
    pub filename: String,
    /// Chunk index within the document
    pub idx: u32,
    /// Distance between the query and chunk embeddings
    pub distance: Distance,
    /// Short excerpt of the chunk text
    pub snippet: String,
}

/// Distance value as reported by the backend.
///
/// Displays with three decimal places when numeric; any non-numeric value
/// passes through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Number(f64),
    Raw(String),
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value:.3}"),
            Self::Raw(value) => f.write_str(value),
        }
    }
}

/// Answer payload for one ask exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer as markdown source
    pub answer: String,
    /// Documents that contributed retrieved context
    #[serde(default)]
    pub sources: Vec<String>,
    /// Leading excerpts of the retrieved chunks; parsed but not rendered
    #[serde(default)]
    pub snippets: Vec<String>,
}

/// Acknowledgment for an upload request.
///
/// The orchestrator only distinguishes "request succeeded" from "request
/// failed"; the per-file outcomes are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub results: Vec<UploadOutcome>,
}

/// Per-file outcome within an upload acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    /// Filename as received by the server
    pub filename: String,
    /// Server-side status string ("success", "empty", "error: ...")
    pub status: String,
    /// Chunks created for this file
    #[serde(default)]
    pub chunks: u32,
}
