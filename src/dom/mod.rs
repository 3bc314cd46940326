use crate::errors::Result;

pub mod memory;

pub use memory::MemoryDom;

/// Handle to a node owned by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Coarse node classification used while looking for the text container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `div` or `span`
    Wrapper,
    /// `br`
    LineBreak,
    Text,
    Other,
}

impl NodeKind {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "div" | "span" => NodeKind::Wrapper,
            "br" => NodeKind::LineBreak,
            "#text" => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }
}

/// Document selection range. Offsets are relative to `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub node: NodeId,
    pub start: usize,
    pub end: usize,
}

/// Minimal tree interface needed to find and prepare a text container.
pub trait NodeTree {
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Lowercase node name (`div`, `#text`, ...), `None` for unknown ids.
    fn node_name(&self, node: NodeId) -> Option<String>;

    fn node_kind(&self, node: NodeId) -> NodeKind {
        self.node_name(node)
            .map(|n| NodeKind::from_name(&n))
            .unwrap_or(NodeKind::Other)
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> Result<()>;

    /// A detached `span[data-text=true]` holding one empty text node.
    fn create_text_wrapper(&mut self) -> NodeId;
}

/// Host page surface contract consumed by the corrector.
pub trait Dom: NodeTree {
    /// `<input type=text>` or `<textarea>`.
    fn is_text_control(&self, node: NodeId) -> bool;

    fn is_content_editable(&self, node: NodeId) -> bool;

    fn text_content(&self, node: NodeId) -> String;

    /// Replace all children of `node` with a single text node.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn value(&self, node: NodeId) -> Result<String>;

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()>;

    fn selection_start(&self, node: NodeId) -> Result<usize>;

    fn set_selection_range(&mut self, node: NodeId, start: usize, end: usize) -> Result<()>;

    /// First range of the document selection.
    fn selection(&self) -> Option<SelectionRange>;

    /// Replace the document selection with a caret at `offset` inside `node`.
    fn collapse_selection(&mut self, node: NodeId, offset: usize) -> Result<()>;

    fn focus(&mut self, node: NodeId);
}
