//! Application state owned by the orchestrator

use crate::config::ClientConfig;
use crate::types::{DocumentSummary, PendingFile, RetrievalParams, SearchResult, Stats};

/// In-memory record of pending selections, retrieval parameters, and the
/// latest display snapshots.
///
/// Exclusively owned by the controller; no operation here performs I/O.
/// Every slice other than the pending selection is replaced wholesale on
/// fetch, never merged.
#[derive(Debug, Default)]
pub struct AppState {
    pending: Vec<PendingFile>,
    params: RetrievalParams,
    stats: Option<Stats>,
    documents: Vec<DocumentSummary>,
    results: Vec<SearchResult>,
}

impl AppState {
    /// Create state seeded with the configured retrieval defaults
    pub fn new(config: &ClientConfig) -> Self {
        let mut state = Self::default();
        state.set_top_k(config.retrieval.top_k);
        state.set_temperature(config.retrieval.temperature);
        state
    }

    /// Replace the pending selection wholesale (last write wins)
    pub fn set_pending_selection(&mut self, files: Vec<PendingFile>) {
        self.pending = files;
    }

    /// Drop the pending selection
    pub fn clear_pending_selection(&mut self) {
        self.pending.clear();
    }

    /// Files chosen locally but not yet uploaded
    pub fn pending_selection(&self) -> &[PendingFile] {
        &self.pending
    }

    /// Set the retrieval count, clamped to at least 1
    pub fn set_top_k(&mut self, k: usize) {
        self.params.top_k = k.max(1);
    }

    /// Set the sampling temperature, clamped to [0, 1]
    pub fn set_temperature(&mut self, value: f32) {
        self.params.temperature = value.clamp(0.0, 1.0);
    }

    /// Current retrieval parameters
    pub fn params(&self) -> RetrievalParams {
        self.params
    }

    /// Replace the document list snapshot
    pub fn replace_documents(&mut self, documents: Vec<DocumentSummary>) {
        self.documents = documents;
    }

    /// Latest document list snapshot
    pub fn documents(&self) -> &[DocumentSummary] {
        &self.documents
    }

    /// Replace the stats snapshot
    pub fn replace_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
    }

    /// Latest stats snapshot, if one has been fetched
    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    /// Replace the search result snapshot
    pub fn replace_search_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
    }

    /// Latest search result snapshot
    pub fn search_results(&self) -> &[SearchResult] {
        &self.results
    }
}
