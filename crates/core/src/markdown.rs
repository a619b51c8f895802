//! Markdown rendering for post and page bodies.

use pulldown_cmark::{html, Options, Parser};

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options
}

/// Render a markdown string to an HTML fragment.
///
/// Used for `content_html` in public detail responses and for the editor's
/// preview toggle. The output is a fragment, not a full document.
pub fn render_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}
