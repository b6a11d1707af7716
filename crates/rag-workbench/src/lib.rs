//! rag-workbench: client orchestration for a RAG question-answering service
//!
//! This crate is the client-side half of a retrieval-augmented QA application.
//! It tracks pending file selections, issues the right sequence of HTTP calls
//! against the service contract (upload, reset, stats, documents, search, ask),
//! reconciles the responses into in-memory application state, and projects that
//! state into safely escaped markup for the hosting page. Retrieval, indexing,
//! and answer generation all live on the server and are reached only through
//! the [`backend::RagBackend`] seam.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod types;
pub mod view;

pub use backend::{HttpBackend, RagBackend};
pub use config::ClientConfig;
pub use controller::{Action, Controller, Region, UiSurface};
pub use error::{Error, Result};
pub use state::AppState;
pub use types::{ChatMessage, PendingFile, RetrievalParams, Role, SelectionSource, ToastLevel};
