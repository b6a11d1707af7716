//! Markdown-to-HTML conversion for assistant answers

use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown source to HTML.
///
/// Raw HTML embedded in the source is demoted to text so it reaches the
/// output escaped; the structural markup produced here is trusted by the
/// views and must not be escaped again.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_markdown_renders_strong_tags() {
        let html = markdown_to_html("**bold**");
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn structure_survives_headings_and_lists() {
        let html = markdown_to_html("# Summary\n\n- first\n- second");
        assert!(html.contains("<h1>Summary</h1>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn raw_html_in_the_source_is_neutralized() {
        let html = markdown_to_html("before <script>alert(1)</script> after");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn plain_text_is_escaped_by_the_renderer() {
        let html = markdown_to_html("a < b & c");
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
    }
}
