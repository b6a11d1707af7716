//! Markup projections for each display region
//!
//! Pure functions from state slices to markup strings. Every raw text field
//! goes through [`escape`] before it is embedded; the only exception is the
//! output of [`markdown::markdown_to_html`], which is already safe markup and
//! must not be escaped a second time.

pub mod markdown;

use crate::types::{ChatMessage, DocumentSummary, SearchResult, Stats, ToastLevel};

/// Escape text for safe embedding into markup.
///
/// Replaces the five markup-significant characters (`& < > " '`) with their
/// entity equivalents; every other code point passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Stats line: chunk count and active model
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "{} chunks indexed • Model: {}",
        stats.total_chunks,
        escape(&stats.model)
    )
}

/// Document list region.
///
/// An empty list renders a designated placeholder, never an empty container.
pub fn render_documents(documents: &[DocumentSummary]) -> String {
    if documents.is_empty() {
        return r#"<div class="empty-state">No documents uploaded yet</div>"#.to_string();
    }
    documents
        .iter()
        .map(|doc| {
            format!(
                concat!(
                    r#"<div class="doc-item">"#,
                    r#"<div class="doc-icon">📄</div>"#,
                    r#"<div class="doc-info">"#,
                    r#"<div class="doc-name">{}</div>"#,
                    r#"<div class="doc-meta">{} chunks</div>"#,
                    "</div>",
                    "</div>"
                ),
                escape(&doc.filename),
                doc.chunks
            )
        })
        .collect()
}

/// Retrieval preview region.
///
/// An empty result set renders a placeholder, never an empty container.
pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return r#"<div class="empty-state">No results found</div>"#.to_string();
    }
    results
        .iter()
        .map(|hit| {
            format!(
                concat!(
                    r#"<div class="chunk">"#,
                    r#"<div class="chunk-meta">📄 {} • Chunk {} • Distance: {}</div>"#,
                    r#"<div class="chunk-content">{}</div>"#,
                    "</div>"
                ),
                escape(&hit.filename),
                hit.idx,
                escape(&hit.distance.to_string()),
                escape(&hit.snippet)
            )
        })
        .collect()
}

/// Assistant bubble: rendered markdown answer plus one chip per source
pub fn assistant_answer(answer_html: &str, sources: &[String]) -> String {
    let mut out = format!(r#"<div class="message-bubble">{answer_html}</div>"#);
    if !sources.is_empty() {
        out.push_str(r#"<div class="sources">"#);
        for source in sources {
            out.push_str(&format!(
                r#"<span class="source-chip">{}</span>"#,
                escape(source)
            ));
        }
        out.push_str("</div>");
    }
    out
}

/// Toast bubble with a severity glyph
pub fn toast_markup(level: ToastLevel, text: &str) -> String {
    let icon = match level {
        ToastLevel::Info => "✓",
        ToastLevel::Warning => "⚠️",
    };
    format!(r#"<div class="message-bubble">{icon} {}</div>"#, escape(text))
}

/// Full transcript entry with its role wrapper
pub fn render_transcript_entry(message: &ChatMessage) -> String {
    format!(
        r#"<div class="message {}">{}</div>"#,
        message.role.as_str(),
        message.html
    )
}
