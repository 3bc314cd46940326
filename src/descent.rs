use crate::dom::{NodeId, NodeKind, NodeTree};
use crate::errors::Result;

/// Walk down single-child `div`/`span` chains from `root` to the element that
/// actually holds the text. Stops at a leaf, at a node with several children,
/// at a non-wrapper child, or after `max_depth` steps.
pub fn resolve_text_container<T: NodeTree + ?Sized>(
    tree: &T,
    root: NodeId,
    max_depth: usize,
) -> NodeId {
    let mut current = root;
    for _ in 0..max_depth {
        match tree.children(current).as_slice() {
            [only] if tree.node_kind(*only) == NodeKind::Wrapper => current = *only,
            _ => break,
        }
    }
    current
}

/// Some editors seed an empty field with a lone `<br>`. Swap it for an empty
/// text-bearing wrapper so the corrected text has somewhere to go, and return
/// the node that now holds the text.
pub fn replace_line_break_placeholder<T: NodeTree + ?Sized>(
    tree: &mut T,
    container: NodeId,
) -> Result<NodeId> {
    let first = match tree.children(container).first() {
        Some(first) if tree.node_kind(*first) == NodeKind::LineBreak => *first,
        _ => return Ok(container),
    };
    let wrapper = tree.create_text_wrapper();
    tree.replace_child(container, first, wrapper)?;
    Ok(wrapper)
}
