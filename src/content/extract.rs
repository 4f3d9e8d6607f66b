//! HTML to visible text

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// Elements whose content is never rendered as text
const HIDDEN_TAGS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Elements that separate words when rendered
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Extract the visible text of an HTML document.
///
/// Text nodes are concatenated in document order, skipping anything inside
/// `head`, `script`, `style`, `noscript` and `template`. Block elements
/// act as word separators and all whitespace runs collapse to one space.
/// Parsing is best effort and never fails; a document without visible text
/// yields an empty string.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::with_capacity(html.len() / 2);
    collect_text(&document, &mut raw);
    normalise_whitespace(&raw)
}

/// Walk the tree without recursion; nesting depth is unbounded in the wild
fn collect_text(document: &Html, out: &mut String) {
    let mut hidden_depth = 0usize;

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => {
                    let name = element.name();
                    if HIDDEN_TAGS.contains(&name) {
                        hidden_depth += 1;
                    } else if hidden_depth == 0 && BLOCK_TAGS.contains(&name) {
                        out.push(' ');
                    }
                }
                Node::Text(text) if hidden_depth == 0 => out.push_str(text),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    let name = element.name();
                    if HIDDEN_TAGS.contains(&name) {
                        hidden_depth = hidden_depth.saturating_sub(1);
                    } else if hidden_depth == 0 && BLOCK_TAGS.contains(&name) {
                        out.push(' ');
                    }
                }
            }
        }
    }
}

fn normalise_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let html = "<html><body><p>Test Content</p></body></html>";
        assert_eq!(extract_text(html), "Test Content");
    }

    #[test]
    fn test_script_and_style_excluded() {
        let html = r#"
            <html>
              <head><title>Page title</title><style>p { color: red; }</style></head>
              <body>
                <script>var hidden = "do not show";</script>
                <p>Visible</p>
                <noscript>Enable JS</noscript>
              </body>
            </html>
        "#;
        let text = extract_text(html);
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_blocks_separate_words_inline_does_not() {
        let html = "<div>one</div><div>two</div><p>th<b>re</b>e<br>four</p>";
        assert_eq!(extract_text(html), "one two three four");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<p>  lots \n\n of\t\tspace  </p>";
        assert_eq!(extract_text(html), "lots of space");
    }

    #[test]
    fn test_malformed_html_is_best_effort() {
        let html = "<p>unclosed <b>bold <i>italic</p></div>&amp; more";
        assert_eq!(extract_text(html), "unclosed bold italic & more");
    }

    #[test]
    fn test_empty_and_textless_input() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("<script>only()</script>"), "");
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 100_000;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        assert_eq!(extract_text(&html), "x");
    }
}
