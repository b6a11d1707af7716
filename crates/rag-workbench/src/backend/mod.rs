//! Backend seam: the HTTP contract the orchestrator drives

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AskResponse, DocumentSummary, PendingFile, SearchResult, Stats, UploadReceipt};

/// Operations exposed by the RAG service.
///
/// One method per backend capability. Implementations perform network I/O
/// only and never mutate client state; failures surface as
/// [`crate::Error::Transport`] carrying the attempted operation name, and the
/// orchestrator decides recovery.
#[async_trait]
pub trait RagBackend {
    /// `GET /stats`
    async fn fetch_stats(&self) -> Result<Stats>;

    /// `GET /documents`
    async fn fetch_documents(&self) -> Result<Vec<DocumentSummary>>;

    /// `POST /upload` as a multipart form with one repeatable `files` field
    async fn upload(&self, files: &[PendingFile]) -> Result<UploadReceipt>;

    /// `POST /reset`; the acknowledgment body is ignored
    async fn reset_index(&self) -> Result<()>;

    /// `GET /search?q=&k=`; a non-empty `query` is the caller's responsibility
    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>>;

    /// `POST /ask` with a JSON body `{ question, k, temperature }`
    async fn ask(&self, question: &str, k: usize, temperature: f32) -> Result<AskResponse>;
}
