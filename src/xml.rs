//! Helpers over the parsed node tree.
//!
//! The tree itself comes from roxmltree; this module only encodes the two
//! matching rules the selectors share: tag comparison is against the local
//! name (no namespace awareness), and matching never descends past direct
//! children.

use roxmltree::Node;

/// The first direct element child whose local tag name matches.
pub(crate) fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Every direct element child whose local tag name matches, in document order.
pub(crate) fn matching_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// The node's inner markup, verbatim from the document text.
///
/// Nested markup inside the node is preserved as a string rather than being
/// flattened to bare text, so `<text>a<b>c</b>d</text>` yields `a<b>c</b>d`.
pub(crate) fn inner_markup<'input>(node: Node<'_, 'input>) -> &'input str {
    let (Some(first), Some(last)) = (node.first_child(), node.last_child()) else {
        return "";
    };
    &node.document().input_text()[first.range().start..last.range().end]
}
