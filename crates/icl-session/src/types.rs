use serde::Serialize;

use icl_core::validation::ParserMessage;

/// Discrete key events the session understands. Ordinary typing arrives
/// as whole-text edits, not as key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Tab,
    Enter,
    ArrowUp,
    ArrowDown,
}

/// An outgoing validation request. The sequence number is the causality
/// token: replies must be applied in increasing `seq` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub seq: u64,
    pub text: String,
}

/// Outcome of an edit or key event.
pub struct EditResponse {
    /// Whether the session acted on the event. An unconsumed commit key
    /// means the suggestion list was empty; the host may treat it as
    /// ordinary form submission.
    pub consumed: bool,
    /// Validation request to ship, when the draft changed.
    pub request: Option<ValidationRequest>,
}

impl EditResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            request: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            request: None,
        }
    }
}

/// Read-only snapshot of the session for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView<'a> {
    pub draft: &'a str,
    pub suggestions: &'a [String],
    pub active: usize,
    pub is_valid: bool,
    pub message: ParserMessage,
    pub reason: &'a str,
}

/// Move `current` by `delta` within `[0, count-1]`, clamping at both
/// ends. No wraparound; an empty list pins the index to 0.
pub(crate) fn clamped_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let moved = current as i64 + delta as i64;
    moved.clamp(0, count as i64 - 1) as usize
}
