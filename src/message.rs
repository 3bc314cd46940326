use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Enable,
    Disable,
}

impl Action {
    pub fn for_state(enabled: bool) -> Self {
        if enabled {
            Action::Enable
        } else {
            Action::Disable
        }
    }
}

/// One-shot notification from the toggle controller to a tab:
/// `{"action": "enable"}` or `{"action": "disable"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleMessage {
    pub action: Action,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    action: Option<String>,
}

impl ToggleMessage {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a raw message. `Ok(None)` for well-formed messages whose action
    /// is missing or not recognized.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        Ok(match envelope.action.as_deref() {
            Some("enable") => Some(Self::new(Action::Enable)),
            Some("disable") => Some(Self::new(Action::Disable)),
            _ => None,
        })
    }
}
