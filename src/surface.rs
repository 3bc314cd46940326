use crate::dom::{Dom, NodeId};
use crate::errors::{CorrectorError, Result};

/// Editable surface variant of an event target, resolved once per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    PlainText,
    ContentEditable,
    Unsupported,
}

impl SurfaceKind {
    pub fn of<D: Dom + ?Sized>(dom: &D, node: NodeId) -> Self {
        if dom.is_text_control(node) {
            SurfaceKind::PlainText
        } else if dom.is_content_editable(node) {
            SurfaceKind::ContentEditable
        } else {
            SurfaceKind::Unsupported
        }
    }
}

/// Read/write access to the text of one editable surface.
pub trait TextSurface {
    fn read_text(&self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
    /// `(start, end)` of the current selection, in chars.
    fn selection(&self) -> Result<(usize, usize)>;
    /// Focus the surface and put a collapsed caret at `pos`.
    fn set_cursor(&mut self, pos: usize) -> Result<()>;
}

/// `<input type=text>` / `<textarea>`: a flat value with a numeric selection.
pub struct PlainTextSurface<'a, D: Dom + ?Sized> {
    dom: &'a mut D,
    node: NodeId,
}

impl<'a, D: Dom + ?Sized> PlainTextSurface<'a, D> {
    pub fn new(dom: &'a mut D, node: NodeId) -> Self {
        Self { dom, node }
    }
}

impl<D: Dom + ?Sized> TextSurface for PlainTextSurface<'_, D> {
    fn read_text(&self) -> Result<String> {
        self.dom.value(self.node)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.dom.set_value(self.node, text)
    }

    fn selection(&self) -> Result<(usize, usize)> {
        let start = self.dom.selection_start(self.node)?;
        Ok((start, start))
    }

    fn set_cursor(&mut self, pos: usize) -> Result<()> {
        self.dom.focus(self.node);
        self.dom.set_selection_range(self.node, pos, pos)
    }
}

/// Text container inside a content-editable region. The caret lives in the
/// container's first child once text has been written.
pub struct ContentEditableSurface<'a, D: Dom + ?Sized> {
    dom: &'a mut D,
    container: NodeId,
}

impl<'a, D: Dom + ?Sized> ContentEditableSurface<'a, D> {
    pub fn new(dom: &'a mut D, container: NodeId) -> Self {
        Self { dom, container }
    }
}

impl<D: Dom + ?Sized> TextSurface for ContentEditableSurface<'_, D> {
    fn read_text(&self) -> Result<String> {
        Ok(self.dom.text_content(self.container))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.dom.set_text_content(self.container, text)
    }

    fn selection(&self) -> Result<(usize, usize)> {
        let range = self.dom.selection().ok_or(CorrectorError::MissingSelection)?;
        Ok((range.start, range.end))
    }

    fn set_cursor(&mut self, pos: usize) -> Result<()> {
        self.dom.focus(self.container);
        let caret_node = self
            .dom
            .children(self.container)
            .first()
            .copied()
            .unwrap_or(self.container);
        self.dom.collapse_selection(caret_node, pos)
    }
}

/// Caret offset of whichever surface `node` is, for observation only.
pub fn cursor_position<D: Dom + ?Sized>(dom: &D, node: NodeId) -> Result<usize> {
    match SurfaceKind::of(dom, node) {
        SurfaceKind::PlainText => dom.selection_start(node),
        _ => dom
            .selection()
            .map(|r| r.start)
            .ok_or(CorrectorError::MissingSelection),
    }
}
