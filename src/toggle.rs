use tracing::debug;

use crate::message::{Action, ToggleMessage};

pub type TabId = u32;

/// Two-state toolbar icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Enabled,
    Disabled,
}

impl Icon {
    pub fn for_state(enabled: bool) -> Self {
        if enabled {
            Icon::Enabled
        } else {
            Icon::Disabled
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Icon::Enabled => "images/icon_enable19.png",
            Icon::Disabled => "images/icon_disable19.png",
        }
    }
}

/// Browser tab operations the toggle controller relies on.
pub trait TabApi {
    /// Active tab of the current window, if any.
    fn active_tab(&self) -> Option<TabId>;

    /// Fire-and-forget delivery; no acknowledgement is expected.
    fn send_message(&mut self, tab: TabId, msg: &ToggleMessage);

    fn set_icon(&mut self, tab: TabId, icon: Icon);
}

/// Extension-wide on/off switch driven by the toolbar button.
#[derive(Debug, Clone)]
pub struct ToggleController {
    enabled: bool,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ToggleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the flag, tell the active tab and update its icon. Returns the tab
    /// that was notified; with no active tab nothing is sent.
    pub fn on_activation_gesture<T: TabApi + ?Sized>(&mut self, tabs: &mut T) -> Option<TabId> {
        self.enabled = !self.enabled;
        debug!(enabled = self.enabled, "toggled");

        let Some(tab) = tabs.active_tab() else {
            debug!("no active tab, skipping notification");
            return None;
        };
        tabs.send_message(tab, &ToggleMessage::new(Action::for_state(self.enabled)));
        tabs.set_icon(tab, Icon::for_state(self.enabled));
        Some(tab)
    }
}
