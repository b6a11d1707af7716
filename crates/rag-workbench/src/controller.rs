//! Event-driven orchestration of user actions against the backend contract

use crate::backend::RagBackend;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::state::AppState;
use crate::types::{ChatMessage, PendingFile, Role, SelectionSource, ToastLevel};
use crate::view;

/// Display region the renderer projects into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Stats,
    Documents,
    Results,
}

/// Effects the orchestrator needs from the hosting page.
///
/// The host owns layout and input widgets; the controller owns everything
/// else. All methods are synchronous: the runtime model is a single logical
/// thread of control, so no handler ever runs concurrently with another.
pub trait UiSurface {
    /// Destructive-action guard; returns whether the user confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Replace a region's markup wholesale.
    fn set_region(&mut self, region: Region, markup: String);

    /// Append one rendered transcript entry.
    fn append_transcript(&mut self, markup: String);

    /// Show a non-blocking notification.
    fn toast(&mut self, level: ToastLevel, markup: String);

    /// Clear the question input after an optimistic transcript append.
    fn clear_question_input(&mut self);
}

/// A named user action, dispatched by [`Controller::handle`]
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the pending selection with freshly chosen files
    SelectFiles {
        files: Vec<PendingFile>,
        source: SelectionSource,
    },
    /// Upload the pending selection
    Upload,
    /// Clear the entire index (guarded by a confirmation)
    ResetIndex,
    /// Preview raw retrieval for a query
    Search { query: String },
    /// Ask a question and append the exchange to the transcript
    Ask { question: String },
    /// Update the retrieval count
    SetTopK { k: usize },
    /// Update the sampling temperature
    SetTemperature { value: f32 },
    /// Re-fetch stats and documents, the backend being the sole source of truth
    RefreshOverview,
}

/// Binds user actions to backend calls, state updates, and re-renders.
///
/// Each action runs to completion or failure; there is no cancellation and no
/// debouncing, so rapid double-submission of the same action issues duplicate
/// in-flight requests. Failures never escape [`Controller::handle`]: every
/// error path ends in a toast or transcript entry and an interactive state.
pub struct Controller<B, U> {
    backend: B,
    surface: U,
    state: AppState,
    transcript: Vec<ChatMessage>,
}

impl<B: RagBackend, U: UiSurface> Controller<B, U> {
    /// Create a controller with state seeded from configuration
    pub fn new(config: &ClientConfig, backend: B, surface: U) -> Self {
        Self {
            backend,
            surface,
            state: AppState::new(config),
            transcript: Vec::new(),
        }
    }

    /// Dispatch one user action
    pub async fn handle(&mut self, action: Action) {
        match action {
            Action::SelectFiles { files, source } => self.select_files(files, source),
            Action::Upload => self.upload().await,
            Action::ResetIndex => self.reset_index().await,
            Action::Search { query } => self.search(&query).await,
            Action::Ask { question } => self.ask(&question).await,
            Action::SetTopK { k } => self.state.set_top_k(k),
            Action::SetTemperature { value } => self.state.set_temperature(value),
            Action::RefreshOverview => self.refresh_overview().await,
        }
    }

    /// Current application state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Append-only transcript of the conversation so far
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    fn select_files(&mut self, files: Vec<PendingFile>, source: SelectionSource) {
        let count = files.len();
        self.state.set_pending_selection(files);
        let wording = match source {
            SelectionSource::Picker => "selected",
            SelectionSource::DragDrop => "ready to upload",
        };
        self.toast(ToastLevel::Info, &format!("{count} file(s) {wording}"));
    }

    async fn upload(&mut self) {
        if self.state.pending_selection().is_empty() {
            self.report_failure(Error::validation("Please select files first"));
            return;
        }

        match self.backend.upload(self.state.pending_selection()).await {
            Ok(receipt) => {
                for outcome in &receipt.results {
                    tracing::debug!(
                        filename = %outcome.filename,
                        status = %outcome.status,
                        chunks = outcome.chunks,
                        "upload outcome"
                    );
                }
                self.state.clear_pending_selection();
                self.toast(ToastLevel::Info, "Documents uploaded successfully");
                self.refresh_stats().await;
                self.refresh_documents().await;
            }
            // Selection stays intact so the user can retry.
            Err(err) => self.report_failure(err),
        }
    }

    async fn reset_index(&mut self) {
        if !self
            .surface
            .confirm("Are you sure you want to clear the entire index?")
        {
            tracing::debug!("index reset declined");
            return;
        }

        match self.backend.reset_index().await {
            Ok(()) => {
                self.state.replace_search_results(Vec::new());
                self.surface.set_region(
                    Region::Results,
                    view::render_results(self.state.search_results()),
                );
                self.toast(ToastLevel::Info, "Index cleared");
                self.refresh_stats().await;
                self.refresh_documents().await;
            }
            Err(err) => self.report_failure(err),
        }
    }

    async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("ignoring empty search query");
            return;
        }

        match self.backend.search(query, self.state.params().top_k).await {
            Ok(results) => {
                self.state.replace_search_results(results);
                self.surface.set_region(
                    Region::Results,
                    view::render_results(self.state.search_results()),
                );
            }
            Err(err) => self.report_failure(err),
        }
    }

    async fn ask(&mut self, question: &str) {
        let question = question.trim();
        if question.is_empty() {
            self.report_failure(Error::validation("Please enter a question first"));
            return;
        }

        // Optimistic append: the transcript shows the question while the
        // request is in flight, and never retracts it.
        self.push_message(Role::User, view::escape(question));
        self.surface.clear_question_input();

        let params = self.state.params();
        match self
            .backend
            .ask(question, params.top_k, params.temperature)
            .await
        {
            Ok(response) => {
                let answer_html = view::markdown::markdown_to_html(&response.answer);
                self.push_message(
                    Role::Assistant,
                    view::assistant_answer(&answer_html, &response.sources),
                );
            }
            Err(err) => {
                tracing::warn!("{err}");
                self.push_message(
                    Role::Assistant,
                    view::toast_markup(ToastLevel::Warning, &err.to_string()),
                );
            }
        }
    }

    async fn refresh_overview(&mut self) {
        self.refresh_stats().await;
        self.refresh_documents().await;
    }

    async fn refresh_stats(&mut self) {
        match self.backend.fetch_stats().await {
            Ok(stats) => {
                let markup = view::render_stats(&stats);
                self.state.replace_stats(stats);
                self.surface.set_region(Region::Stats, markup);
            }
            Err(err) => self.report_failure(err),
        }
    }

    async fn refresh_documents(&mut self) {
        match self.backend.fetch_documents().await {
            Ok(documents) => {
                self.state.replace_documents(documents);
                self.surface.set_region(
                    Region::Documents,
                    view::render_documents(self.state.documents()),
                );
            }
            Err(err) => self.report_failure(err),
        }
    }

    fn push_message(&mut self, role: Role, html: String) {
        let message = ChatMessage { role, html };
        self.surface
            .append_transcript(view::render_transcript_entry(&message));
        self.transcript.push(message);
    }

    fn toast(&mut self, level: ToastLevel, text: &str) {
        self.surface.toast(level, view::toast_markup(level, text));
    }

    /// Convert a failure into a user-visible warning; nothing here is fatal.
    fn report_failure(&mut self, err: Error) {
        tracing::warn!("{err}");
        self.surface.toast(
            ToastLevel::Warning,
            view::toast_markup(ToastLevel::Warning, &err.to_string()),
        );
    }
}
