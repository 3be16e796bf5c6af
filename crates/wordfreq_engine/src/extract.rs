use ego_tree::iter::Edge;
use scraper::node::Node;
use scraper::Html;

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "iframe", "svg"];

/// Elements rendered inline; their boundaries do not separate words.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark", "q",
    "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> String;
}

/// Collects the text a browser would show, whitespace collapsed to single
/// spaces. Block-level element boundaries count as whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibleTextExtractor;

impl Extractor for VisibleTextExtractor {
    fn extract(&self, html: &str) -> String {
        let doc = Html::parse_document(html);
        let mut raw = String::with_capacity(html.len() / 2);
        let mut hidden_depth = 0usize;

        for edge in doc.tree.root().traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(element) => {
                        let name = element.name();
                        if hidden_depth > 0 || HIDDEN_ELEMENTS.contains(&name) {
                            hidden_depth += 1;
                        } else if !INLINE_ELEMENTS.contains(&name) {
                            raw.push(' ');
                        }
                    }
                    Node::Text(text) if hidden_depth == 0 => raw.push_str(text),
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(element) = node.value() {
                        if hidden_depth > 0 {
                            hidden_depth -= 1;
                        } else if !INLINE_ELEMENTS.contains(&element.name()) {
                            raw.push(' ');
                        }
                    }
                }
            }
        }

        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
