//! In-memory tab messaging.
//!
//! Each open tab gets an mpsc inbox. The router holds the senders, tracks
//! which tab is active and remembers the icon set for each tab. Messages
//! travel as JSON strings, the same shape the browser would deliver.

use std::collections::{BTreeMap, HashMap};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, warn};

use crate::message::ToggleMessage;
use crate::toggle::{Icon, TabApi, TabId};

/// Receiving end of one tab's messages.
pub struct TabInbox {
    receiver: Receiver<String>,
}

impl TabInbox {
    /// Next raw message without blocking.
    pub fn try_recv(&self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn drain(&self) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(msg) = self.try_recv() {
            out.push(msg);
        }
        out
    }
}

#[derive(Default)]
pub struct TabRouter {
    tabs: BTreeMap<TabId, Sender<String>>,
    active: Option<TabId>,
    icons: HashMap<TabId, Icon>,
}

impl TabRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tab and hand back its inbox. The first tab opened becomes active.
    pub fn open_tab(&mut self, tab: TabId) -> TabInbox {
        let (sender, receiver) = mpsc::channel();
        self.tabs.insert(tab, sender);
        if self.active.is_none() {
            self.active = Some(tab);
        }
        TabInbox { receiver }
    }

    pub fn activate(&mut self, tab: TabId) -> bool {
        if self.tabs.contains_key(&tab) {
            self.active = Some(tab);
            true
        } else {
            false
        }
    }

    pub fn close_tab(&mut self, tab: TabId) {
        self.tabs.remove(&tab);
        self.icons.remove(&tab);
        if self.active == Some(tab) {
            self.active = None;
        }
    }

    pub fn icon(&self, tab: TabId) -> Option<Icon> {
        self.icons.get(&tab).copied()
    }
}

impl TabApi for TabRouter {
    fn active_tab(&self) -> Option<TabId> {
        self.active
    }

    fn send_message(&mut self, tab: TabId, msg: &ToggleMessage) {
        let Some(sender) = self.tabs.get(&tab) else {
            debug!(tab, "message for unknown tab dropped");
            return;
        };
        match msg.to_json() {
            // A closed inbox means the page is gone.
            Ok(json) => {
                let _ = sender.send(json);
            }
            Err(e) => warn!(error = %e, "could not encode toggle message"),
        }
    }

    fn set_icon(&mut self, tab: TabId, icon: Icon) {
        self.icons.insert(tab, icon);
    }
}
