//! Typed page events fed to the corrector, one at a time, on the page's
//! single event-dispatch thread.

use crate::dom::NodeId;

/// `keypress` / `keydown` as delivered by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub target: NodeId,
    pub char_code: u32,
    pub key_code: u32,
    pub shift_key: bool,
}

impl KeyEvent {
    /// A `keypress` carrying a character code.
    pub fn press(target: NodeId, char_code: u32, shift_key: bool) -> Self {
        Self {
            target,
            char_code,
            key_code: 0,
            shift_key,
        }
    }

    /// A `keydown` carrying only a key code.
    pub fn down(target: NodeId, key_code: u32) -> Self {
        Self {
            target,
            char_code: 0,
            key_code,
            shift_key: false,
        }
    }

    /// `char_code` if set, else `key_code`.
    pub fn code(&self) -> u32 {
        if self.char_code != 0 {
            self.char_code
        } else {
            self.key_code
        }
    }
}

/// `input`: fired after the surface's content changed, natively or by page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub target: NodeId,
}

impl InputEvent {
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    KeyPress(KeyEvent),
    KeyDown(KeyEvent),
    Input(InputEvent),
    /// Raw toggle notification from the extension background.
    Message(String),
}

impl PageEvent {
    pub fn description(&self) -> &'static str {
        match self {
            PageEvent::KeyPress(_) => "keypress",
            PageEvent::KeyDown(_) => "keydown",
            PageEvent::Input(_) => "input",
            PageEvent::Message(_) => "message",
        }
    }
}
