//! reqwest-backed implementation of the backend contract

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{AskResponse, DocumentSummary, PendingFile, SearchResult, Stats, UploadReceipt};

use super::RagBackend;

/// HTTP client for the RAG service
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    k: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct DocumentsEnvelope {
    #[serde(default)]
    documents: Vec<DocumentSummary>,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<SearchResult>,
}

impl HttpBackend {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RagBackend for HttpBackend {
    async fn fetch_stats(&self) -> Result<Stats> {
        let response = self
            .client
            .get(self.url("/stats"))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::transport("stats", e))?;
        response.json().await.map_err(|e| Error::transport("stats", e))
    }

    async fn fetch_documents(&self) -> Result<Vec<DocumentSummary>> {
        let response = self
            .client
            .get(self.url("/documents"))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::transport("documents", e))?;
        let envelope: DocumentsEnvelope = response
            .json()
            .await
            .map_err(|e| Error::transport("documents", e))?;
        Ok(envelope.documents)
    }

    async fn upload(&self, files: &[PendingFile]) -> Result<UploadReceipt> {
        let mut form = Form::new();
        for file in files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
            if let Some(content_type) = &file.content_type {
                part = part
                    .mime_str(content_type)
                    .map_err(|e| Error::transport("upload", e))?;
            }
            form = form.part("files", part);
        }

        tracing::info!("Uploading {} file(s)", files.len());
        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::transport("upload", e))?;
        response.json().await.map_err(|e| Error::transport("upload", e))
    }

    async fn reset_index(&self) -> Result<()> {
        self.client
            .post(self.url("/reset"))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map(|_| ())
            .map_err(|e| Error::transport("reset", e))
    }

    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        tracing::info!("Search: \"{query}\" (k={k})");
        let k = k.to_string();
        let response = self
            .client
            .get(self.url("/search"))
            .query(&[("q", query), ("k", k.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::transport("search", e))?;
        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| Error::transport("search", e))?;
        Ok(envelope.results)
    }

    async fn ask(&self, question: &str, k: usize, temperature: f32) -> Result<AskResponse> {
        tracing::info!("Ask: \"{question}\" (k={k}, temperature={temperature})");
        let response = self
            .client
            .post(self.url("/ask"))
            .json(&AskRequest {
                question,
                k,
                temperature,
            })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::transport("ask", e))?;
        response.json().await.map_err(|e| Error::transport("ask", e))
    }
}
