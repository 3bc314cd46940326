use std::collections::BTreeMap;

use itertools::Itertools;

use super::{Dom, NodeId, NodeTree, SelectionRange};
use crate::errors::{CorrectorError, Result};

#[derive(Debug, Clone)]
struct InputState {
    value: String,
    selection: (usize, usize),
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        attrs: BTreeMap<String, String>,
        content_editable: bool,
        input: Option<InputState>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// Arena-backed document. Node ids are never reused; detached nodes stay in
/// the arena without a parent.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    selection: Option<SelectionRange>,
    focused: Option<NodeId>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// A document holding only a `body` element.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            selection: None,
            focused: None,
        };
        dom.alloc("body", None, Self::element_data());
        dom
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn element_data() -> NodeData {
        NodeData::Element {
            attrs: BTreeMap::new(),
            content_editable: false,
            input: None,
        }
    }

    fn alloc(&mut self, name: &str, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            data,
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(CorrectorError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(CorrectorError::UnknownNode(id))
    }

    fn input_state(&self, id: NodeId) -> Result<&InputState> {
        match &self.node(id)?.data {
            NodeData::Element { input: Some(state), .. } => Ok(state),
            _ => Err(CorrectorError::UnknownNode(id)),
        }
    }

    fn input_state_mut(&mut self, id: NodeId) -> Result<&mut InputState> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element { input: Some(state), .. } => Ok(state),
            _ => Err(CorrectorError::UnknownNode(id)),
        }
    }

    pub fn append_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.alloc(name, Some(parent), Self::element_data())
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.alloc("#text", Some(parent), NodeData::Text(text.to_string()))
    }

    /// `<input type=...>` with an empty value.
    pub fn append_input(&mut self, parent: NodeId, input_type: &str) -> NodeId {
        let id = self.append_element(parent, "input");
        if let NodeData::Element { attrs, input, .. } = &mut self.nodes[id.0].data {
            attrs.insert("type".into(), input_type.to_ascii_lowercase());
            *input = Some(InputState {
                value: String::new(),
                selection: (0, 0),
            });
        }
        id
    }

    pub fn append_textarea(&mut self, parent: NodeId) -> NodeId {
        let id = self.append_element(parent, "textarea");
        if let NodeData::Element { attrs, input, .. } = &mut self.nodes[id.0].data {
            attrs.insert("type".into(), "textarea".into());
            *input = Some(InputState {
                value: String::new(),
                selection: (0, 0),
            });
        }
        id
    }

    pub fn set_content_editable(&mut self, node: NodeId, editable: bool) -> Result<()> {
        match &mut self.node_mut(node)?.data {
            NodeData::Element { content_editable, .. } => {
                *content_editable = editable;
                Ok(())
            }
            NodeData::Text(_) => Err(CorrectorError::UnknownNode(node)),
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node).ok()?.data {
            NodeData::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Replace the document selection wholesale.
    pub fn select(&mut self, range: Option<SelectionRange>) {
        self.selection = range;
    }

    /// What the browser does natively for a text control: the selection is
    /// overwritten with `text` and the caret lands after it.
    pub fn insert_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        let state = self.input_state_mut(node)?;
        let len = state.value.chars().count();
        let start = state.selection.0.min(len);
        let end = state.selection.1.clamp(start, len);
        let head: String = state.value.chars().take(start).collect();
        let tail: String = state.value.chars().skip(end).collect();
        state.value = format!("{head}{text}{tail}");
        let caret = start + text.chars().count();
        state.selection = (caret, caret);
        Ok(())
    }

    fn is_attached_to(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    fn char_len(&self, node: NodeId) -> Result<usize> {
        Ok(match &self.node(node)?.data {
            NodeData::Text(t) => t.chars().count(),
            NodeData::Element { .. } => self.node(node)?.children.len(),
        })
    }
}

impl NodeTree for MemoryDom {
    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn node_name(&self, node: NodeId) -> Option<String> {
        self.node(node).ok().map(|n| n.name.clone())
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> Result<()> {
        self.node(new)?;
        let idx = self
            .node(parent)?
            .children
            .iter()
            .position(|c| *c == old)
            .ok_or(CorrectorError::UnknownNode(old))?;
        if let Some(prev) = self.node(new)?.parent {
            self.node_mut(prev)?.children.retain(|c| *c != new);
        }
        self.node_mut(parent)?.children[idx] = new;
        self.node_mut(new)?.parent = Some(parent);
        self.node_mut(old)?.parent = None;
        if self.selection.is_some_and(|r| self.is_attached_to(r.node, old)) {
            self.selection = None;
        }
        Ok(())
    }

    fn create_text_wrapper(&mut self) -> NodeId {
        let mut attrs = BTreeMap::new();
        attrs.insert("data-text".to_string(), "true".to_string());
        let span = self.alloc(
            "span",
            None,
            NodeData::Element {
                attrs,
                content_editable: false,
                input: None,
            },
        );
        self.append_text(span, "");
        span
    }
}

impl Dom for MemoryDom {
    fn is_text_control(&self, node: NodeId) -> bool {
        matches!(self.attribute(node, "type"), Some("text") | Some("textarea"))
    }

    fn is_content_editable(&self, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if let Ok(Node {
                data: NodeData::Element { content_editable: true, .. },
                ..
            }) = self.node(id)
            {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    fn text_content(&self, node: NodeId) -> String {
        match self.node(node) {
            Ok(Node { data: NodeData::Text(t), .. }) => t.clone(),
            Ok(n) => n.children.iter().map(|c| self.text_content(*c)).join(""),
            Err(_) => String::new(),
        }
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        let old = std::mem::take(&mut self.node_mut(node)?.children);
        for child in &old {
            self.node_mut(*child)?.parent = None;
        }
        if self
            .selection
            .is_some_and(|r| old.iter().any(|c| self.is_attached_to(r.node, *c)))
        {
            self.selection = None;
        }
        self.append_text(node, text);
        Ok(())
    }

    fn value(&self, node: NodeId) -> Result<String> {
        Ok(self.input_state(node)?.value.clone())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        let state = self.input_state_mut(node)?;
        state.value = value.to_string();
        // Setting the value programmatically moves the caret to the end.
        let end = state.value.chars().count();
        state.selection = (end, end);
        Ok(())
    }

    fn selection_start(&self, node: NodeId) -> Result<usize> {
        Ok(self.input_state(node)?.selection.0)
    }

    fn set_selection_range(&mut self, node: NodeId, start: usize, end: usize) -> Result<()> {
        let state = self.input_state_mut(node)?;
        let len = state.value.chars().count();
        let start = start.min(len);
        state.selection = (start, end.clamp(start, len));
        Ok(())
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    fn collapse_selection(&mut self, node: NodeId, offset: usize) -> Result<()> {
        let len = self.char_len(node)?;
        if offset > len {
            return Err(CorrectorError::OffsetOutOfRange { offset, len });
        }
        self.selection = Some(SelectionRange {
            node,
            start: offset,
            end: offset,
        });
        Ok(())
    }

    fn focus(&mut self, node: NodeId) {
        if self.node(node).is_ok() {
            self.focused = Some(node);
        }
    }
}
