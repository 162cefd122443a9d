//! Static page copy. Authored as Markdown and rendered to HTML once at mount.

use pulldown_cmark::{html, Options, Parser};

const ABOUT_MD: &str = include_str!("../content/about.md");

/// Renders Markdown into HTML for display inside the page.
///
/// Raw HTML in the source is escaped rather than passed through; the copy is
/// plain prose and headings.
pub fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(md, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// The "About" section shown under the card grid on the main view.
pub fn about_html() -> String {
    render_markdown(ABOUT_MD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_copy_renders_headings_and_lists() {
        let html = about_html();
        assert!(html.contains("<h2>"));
        assert!(html.contains("About Spot the Difference Games"));
        assert!(html.contains("<li>✨ Improves visual perception and attention to detail</li>"));
        assert!(html.contains("<strong>Popular Keywords:</strong>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
