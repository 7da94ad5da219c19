//! Text extraction from description trees.
//!
//! Doxygen wraps descriptive prose in arbitrarily nested markup (`para`,
//! emphasis, references). The functions here flatten a subtree back into a
//! single line of text, in document order, independent of nesting depth.

use roxmltree::Node;

/// Formatting switches for text extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Also collapse whitespace runs inside each text fragment. Used for
    /// brief text, where fragment-carried spacing reads ragged inline.
    pub collapse_whitespace: bool,
}

impl TextOptions {
    pub fn collapsed() -> Self {
        TextOptions {
            collapse_whitespace: true,
        }
    }
}

/// All text beneath `node` in document order, each leaf trimmed, leaves
/// joined with single spaces, the whole trimmed. Absent input yields `""`.
pub fn node_text(node: Option<Node>, opts: TextOptions) -> String {
    node_text_excluding(node, &[], opts)
}

/// Like [`node_text`], but subtrees whose element tag is listed in
/// `excluded` contribute nothing. Text following an excluded element is
/// still kept.
pub fn node_text_excluding(node: Option<Node>, excluded: &[&str], opts: TextOptions) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let mut parts = Vec::new();
    collect_leaves(node, excluded, &mut parts);
    let joined = parts.join(" ");
    if opts.collapse_whitespace {
        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        joined.trim().to_string()
    }
}

fn collect_leaves<'a, 'i>(node: Node<'a, 'i>, excluded: &[&str], parts: &mut Vec<&'a str>) {
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                parts.push(t.trim());
            }
        } else if child.is_element() && !excluded.contains(&child.tag_name().name()) {
            collect_leaves(child, excluded, parts);
        }
    }
}
