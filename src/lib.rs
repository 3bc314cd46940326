pub mod errors;
pub mod context;
pub mod dom;
pub mod events;
pub mod keys;
pub mod splice;
pub mod descent;
pub mod surface;
pub mod message;
pub mod corrector;
pub mod toggle;
pub mod transport;
pub mod page;
pub mod logging;

pub use context::{CorrectorOptions, PageContext, Platform};
pub use corrector::{CaseCorrector, CorrectionState, Outcome, PendingCorrection};
pub use dom::{Dom, MemoryDom, NodeId, NodeTree, SelectionRange};
pub use errors::{CorrectorError, Result};
pub use events::{InputEvent, KeyEvent, PageEvent};
pub use message::{Action, ToggleMessage};
pub use page::Page;
pub use splice::splice_corrected_char;
pub use toggle::{Icon, TabApi, TabId, ToggleController};
pub use transport::{TabInbox, TabRouter};

/// Convenience: a corrector with default options for the given navigator platform.
pub fn corrector_for_platform(platform: &str) -> CaseCorrector {
    CaseCorrector::new(PageContext::new(CorrectorOptions {
        platform: platform.to_string(),
        ..CorrectorOptions::default()
    }))
}
