//! Data model for the workbench client

pub mod response;

pub use response::{
    AskResponse, Distance, DocumentSummary, SearchResult, Stats, UploadOutcome, UploadReceipt,
};

/// A locally selected file that has not been uploaded yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Filename reported by the picker or drop event
    pub filename: String,
    /// MIME type, when the hosting surface knows it
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl PendingFile {
    /// Create a pending file without a declared MIME type
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes,
        }
    }

    /// Attach a MIME type for the multipart part
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Current retrieval parameters, read by every search and ask call.
///
/// Invariants (`top_k >= 1`, `temperature` in `[0, 1]`) are enforced by the
/// [`crate::state::AppState`] mutation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievalParams {
    pub top_k: usize,
    pub temperature: f32,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            top_k: 4,
            temperature: 0.1,
        }
    }
}

/// Origin of a file-selection event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// File picker dialog
    Picker,
    /// Drag-and-drop onto the page
    DragDrop,
}

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS class fragment used by the transcript wrapper
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One transcript entry; the body is already-rendered markup.
///
/// The transcript is append-only: entries are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub html: String,
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}
