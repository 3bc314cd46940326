use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::context::PageContext;
use crate::descent;
use crate::dom::{Dom, NodeId};
use crate::errors::Result;
use crate::events::{InputEvent, KeyEvent};
use crate::keys::{self, Qualified, BACKSPACE};
use crate::message::{Action, ToggleMessage};
use crate::splice::{insert_over_selection, splice_corrected_char};
use crate::surface::{
    cursor_position, ContentEditableSurface, PlainTextSurface, SurfaceKind, TextSurface,
};

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Disabled,
    UnsupportedSurface,
    NotAlphabetic,
    /// Alphabetic, but the browser's casing is already right.
    NoCorrection,
    /// Plain surface: correction registered for the next input event.
    Deferred,
    /// Content-editable surface: correction written at key-press time.
    Applied,
    /// Input event: a deferred or pending correction was written.
    Reapplied,
    /// Input event with nothing to do.
    Idle,
    /// The host refused an operation; the text keeps its browser casing.
    Failed,
}

/// Correction written into a content-editable container at key-press time,
/// kept so it can be written again if page script rewrites the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCorrection {
    /// Element the key event was dispatched to.
    pub surface: NodeId,
    /// Resolved text container inside it.
    pub container: NodeId,
    pub cursor_position: usize,
    pub modified_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorrectionState {
    #[default]
    Idle,
    AwaitingFollowup(PendingCorrection),
}

/// One-time correction for a text control, run on its next input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredPlainCorrection {
    pub target: NodeId,
    pub corrected: char,
}

/// Observes Backspace on keydown. Nothing acts on it yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackspaceTracker {
    backspace: bool,
    prior_backspace: bool,
    last_cursor: Option<usize>,
}

impl BackspaceTracker {
    pub fn is_backspace(&self) -> bool {
        self.backspace
    }

    pub fn prior_backspace(&self) -> bool {
        self.prior_backspace
    }

    pub fn last_cursor(&self) -> Option<usize> {
        self.last_cursor
    }
}

/// Per-page case corrector.
pub struct CaseCorrector {
    ctx: PageContext,
    enabled: bool,
    state: CorrectionState,
    deferred: HashMap<NodeId, DeferredPlainCorrection>,
    backspace: BackspaceTracker,
}

impl CaseCorrector {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            enabled: ctx.options.enabled_on_load,
            ctx,
            state: CorrectionState::Idle,
            deferred: HashMap::new(),
            backspace: BackspaceTracker::default(),
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> &CorrectionState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingCorrection> {
        match &self.state {
            CorrectionState::AwaitingFollowup(p) => Some(p),
            CorrectionState::Idle => None,
        }
    }

    pub fn deferred_for(&self, node: NodeId) -> Option<&DeferredPlainCorrection> {
        self.deferred.get(&node)
    }

    pub fn backspace(&self) -> &BackspaceTracker {
        &self.backspace
    }

    pub fn handle_message(&mut self, msg: &ToggleMessage) {
        debug!(action = ?msg.action, "toggle message");
        self.enabled = msg.action == Action::Enable;
    }

    /// Decode and apply a raw JSON toggle message. Anything unrecognized is dropped.
    pub fn handle_raw_message(&mut self, raw: &str) {
        match ToggleMessage::parse(raw) {
            Ok(Some(msg)) => self.handle_message(&msg),
            Ok(None) => debug!(raw, "ignoring message with unknown action"),
            Err(e) => debug!(error = %e, "ignoring malformed message"),
        }
    }

    pub fn handle_key_press<D: Dom + ?Sized>(&mut self, dom: &mut D, ev: &KeyEvent) -> Outcome {
        if !self.enabled {
            return Outcome::Disabled;
        }

        let kind = SurfaceKind::of(&*dom, ev.target);
        if kind == SurfaceKind::Unsupported {
            debug!(node = ?ev.target, "unsupported element type");
            return Outcome::UnsupportedSurface;
        }

        let code = ev.code();
        if keys::caps_lock_active(code, ev.shift_key, self.ctx.platform).is_none() {
            debug!(code, "not an alphabet character");
            return Outcome::NotAlphabetic;
        }
        let Some(q) = keys::qualify(code, ev.shift_key, self.ctx.platform) else {
            return Outcome::NoCorrection;
        };
        debug!(typed = %q.typed, corrected = %q.corrected, ?kind, "caps lock detected");

        match kind {
            SurfaceKind::PlainText => {
                self.defer_plain(ev.target, q);
                Outcome::Deferred
            }
            SurfaceKind::ContentEditable => match self.correct_content_editable(dom, ev.target, q) {
                Ok(()) => Outcome::Applied,
                Err(e) => {
                    warn!(error = %e, "content-editable correction failed");
                    Outcome::Failed
                }
            },
            SurfaceKind::Unsupported => Outcome::UnsupportedSurface,
        }
    }

    pub fn handle_key_down<D: Dom + ?Sized>(&mut self, dom: &D, ev: &KeyEvent) {
        if !self.enabled {
            return;
        }
        self.backspace.prior_backspace = self.backspace.backspace;
        self.backspace.backspace = ev.key_code == BACKSPACE;
        if !self.backspace.backspace {
            return;
        }
        let cursor = cursor_position(dom, ev.target).ok();
        self.backspace.last_cursor = cursor;
        trace!(
            ?cursor,
            prior = self.backspace.prior_backspace,
            "backspace key"
        );
    }

    pub fn handle_input<D: Dom + ?Sized>(&mut self, dom: &mut D, ev: &InputEvent) -> Outcome {
        if let Some(deferred) = self.deferred.remove(&ev.target) {
            return match Self::apply_plain(dom, &deferred) {
                Ok(()) => Outcome::Reapplied,
                Err(e) => {
                    warn!(error = %e, "plain text correction failed");
                    Outcome::Failed
                }
            };
        }

        let pending = match &self.state {
            CorrectionState::AwaitingFollowup(p)
                if p.surface == ev.target || p.container == ev.target =>
            {
                p.clone()
            }
            _ => return Outcome::Idle,
        };
        self.state = CorrectionState::Idle;
        match Self::write_content_editable(dom, &pending) {
            Ok(()) => {
                debug!(container = ?pending.container, "re-applied pending correction");
                Outcome::Reapplied
            }
            Err(e) => {
                warn!(error = %e, "re-applying pending correction failed");
                Outcome::Failed
            }
        }
    }

    // A newer registration for the same element replaces the old one.
    fn defer_plain(&mut self, target: NodeId, q: Qualified) {
        self.deferred.insert(
            target,
            DeferredPlainCorrection {
                target,
                corrected: q.corrected,
            },
        );
    }

    fn apply_plain<D: Dom + ?Sized>(dom: &mut D, deferred: &DeferredPlainCorrection) -> Result<()> {
        let mut surface = PlainTextSurface::new(dom, deferred.target);
        let text = surface.read_text()?;
        let (cursor, _) = surface.selection()?;
        let modified = splice_corrected_char(&text, cursor, deferred.corrected);
        surface.write_text(&modified)?;
        surface.set_cursor(cursor)
    }

    fn correct_content_editable<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        target: NodeId,
        q: Qualified,
    ) -> Result<()> {
        let container =
            descent::resolve_text_container(&*dom, target, self.ctx.options.max_descent_depth);
        let container = descent::replace_line_break_placeholder(dom, container)?;

        // The browser has not inserted the character yet, so put it in by hand.
        let (text, (start, end)) = {
            let surface = ContentEditableSurface::new(dom, container);
            (surface.read_text()?, surface.selection()?)
        };
        // The range may point into another node; keep the caret inside this text.
        let len = text.chars().count();
        let start = start.min(len);
        let end = end.clamp(start, len);
        let text = insert_over_selection(&text, start, end, q.typed);
        let cursor_position = start + 1;

        let pending = PendingCorrection {
            surface: target,
            container,
            cursor_position,
            modified_text: splice_corrected_char(&text, cursor_position, q.corrected),
        };
        Self::write_content_editable(dom, &pending)?;
        // Last keystroke wins; an older follow-up is dropped.
        self.state = CorrectionState::AwaitingFollowup(pending);
        Ok(())
    }

    fn write_content_editable<D: Dom + ?Sized>(dom: &mut D, p: &PendingCorrection) -> Result<()> {
        let mut surface = ContentEditableSurface::new(dom, p.container);
        surface.write_text(&p.modified_text)?;
        surface.set_cursor(p.cursor_position)
    }
}
