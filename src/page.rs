use tracing::debug;

use crate::context::{CorrectorOptions, PageContext};
use crate::corrector::{CaseCorrector, Outcome};
use crate::dom::{Dom, MemoryDom, NodeId};
use crate::events::{InputEvent, KeyEvent, PageEvent};
use crate::transport::TabInbox;

/// A page with the content script attached: the document, the corrector
/// listening on keypress/keydown/input, and the tab's message inbox.
pub struct Page<D: Dom = MemoryDom> {
    dom: D,
    corrector: CaseCorrector,
    inbox: Option<TabInbox>,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D, options: CorrectorOptions) -> Self {
        crate::logging::init(options.debug);
        Self {
            dom,
            corrector: CaseCorrector::new(PageContext::new(options)),
            inbox: None,
        }
    }

    pub fn with_inbox(mut self, inbox: TabInbox) -> Self {
        self.inbox = Some(inbox);
        self
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn corrector(&self) -> &CaseCorrector {
        &self.corrector
    }

    /// Run one event to completion.
    pub fn dispatch(&mut self, event: PageEvent) -> Outcome {
        debug!(event = event.description(), "dispatch");
        match event {
            PageEvent::KeyPress(ev) => self.corrector.handle_key_press(&mut self.dom, &ev),
            PageEvent::KeyDown(ev) => {
                self.corrector.handle_key_down(&self.dom, &ev);
                Outcome::Idle
            }
            PageEvent::Input(ev) => self.corrector.handle_input(&mut self.dom, &ev),
            PageEvent::Message(raw) => {
                self.corrector.handle_raw_message(&raw);
                Outcome::Idle
            }
        }
    }

    /// Deliver every queued toggle message. Returns how many were handled.
    pub fn pump_messages(&mut self) -> usize {
        let messages = match &self.inbox {
            Some(inbox) => inbox.drain(),
            None => return 0,
        };
        let count = messages.len();
        for raw in messages {
            self.dispatch(PageEvent::Message(raw));
        }
        count
    }
}

impl Page<MemoryDom> {
    /// Browser sequence for a keystroke in a text control: keypress, native
    /// insertion of the typed character, then input. Returns the keypress outcome.
    pub fn type_into_control(&mut self, target: NodeId, char_code: u32, shift: bool) -> Outcome {
        let outcome = self.dispatch(PageEvent::KeyPress(KeyEvent::press(target, char_code, shift)));
        if let Some(c) = char::from_u32(char_code) {
            if self.dom.insert_text(target, &c.to_string()).is_ok() {
                self.dispatch(PageEvent::Input(InputEvent::new(target)));
            }
        }
        outcome
    }
}
