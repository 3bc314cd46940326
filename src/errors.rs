use thiserror::Error;

use crate::dom::NodeId;

// Failures inside a single correction. None of these reach the user; the
// corrector logs them and leaves the typed character as the browser produced it.
#[derive(Debug, Error)]
pub enum CorrectorError {
    // No selection range on the document while editing a content-editable surface
    #[error("no selection range available")]
    MissingSelection,

    // Caret placement past the end of the text it points into
    #[error("offset {offset} is out of range for text of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),

    // Toggle message that is not valid JSON for `{action: ...}`
    #[error("malformed toggle message: {0}")]
    Message(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CorrectorError>;
