//! Subtree text normalization.

use roxmltree::Node;

/// The concatenated text of a node's entire subtree, in document order,
/// with whitespace runs collapsed to single spaces and the ends trimmed.
///
/// Text that follows a child element but precedes the next sibling is part
/// of the parent's subtree in the tree model, so nested markup (italics
/// inside a title, for instance) contributes its text in reading order.
/// A node with no text at all yields the empty string.
pub fn normalized_text(node: Node) -> String {
    let mut raw = String::new();
    for descendant in node.descendants() {
        if !descendant.is_text() {
            continue;
        }
        if let Some(text) = descendant.text() {
            raw.push_str(text);
        }
    }
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
