//! Stateful editing session for one draft Intent.
//!
//! `EditSession` owns the draft text and everything derived from it —
//! the latest parser verdict, the mistake flag, the suggestion list and
//! its active index — and processes edits, key events and validation
//! replies, returning responses that tell the host what to send over
//! the wire. It performs no I/O itself and none of its operations fail:
//! every call leaves the session with a well-defined verdict and a
//! (possibly empty) suggestion list.

mod edit;
mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use icl_core::validation::{ParserMessage, ValidationResult};
use icl_core::words;

pub use types::{EditResponse, KeyEvent, SessionView, ValidationRequest};

/// Editing session for a single draft Intent. One instance per form;
/// independent sessions share nothing.
pub struct EditSession {
    draft: String,
    validation: ValidationResult,
    has_mistake: bool,
    suggestions: Vec<String>,
    active: usize,

    /// Sequence number handed to the next outgoing validation request.
    next_seq: u64,
    /// Highest sequence number whose reply has been applied. Replies at
    /// or below this are stale and dropped.
    applied_seq: u64,
}

impl EditSession {
    /// Start a session over `initial` (empty for a fresh Intent, the
    /// stored string when editing an existing one). The caller should
    /// follow up with [`EditSession::revalidate`] to obtain the first
    /// validation request.
    pub fn new(initial: &str) -> Self {
        Self {
            draft: initial.to_string(),
            validation: ValidationResult::default(),
            has_mistake: false,
            suggestions: Vec::new(),
            active: 0,
            next_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the last applied verdict accepted the draft as a
    /// complete Intent.
    pub fn is_valid(&self) -> bool {
        self.validation.is_complete
    }

    pub fn parser_message(&self) -> ParserMessage {
        self.validation.message
    }

    /// Whether the current span is known broken. While set, the
    /// suggestion list stays empty no matter what the user types.
    pub fn has_mistake(&self) -> bool {
        self.has_mistake
    }

    /// Read-only snapshot for the presentation layer.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            draft: &self.draft,
            suggestions: &self.suggestions,
            active: self.active,
            is_valid: self.validation.is_complete,
            message: self.validation.message,
            reason: &self.validation.reason,
        }
    }

    /// The draft to hand to the persistence layer, or `None` while the
    /// last verdict says the Intent is not a complete sentence. A verdict
    /// only counts once the reply to the newest request has been applied,
    /// so an edited draft can never ride on its predecessor's validity.
    /// The host should disable its submit affordance whenever this is
    /// `None`.
    pub fn submit(&self) -> Option<&str> {
        if self.validation.is_complete && self.applied_seq == self.next_seq {
            Some(&self.draft)
        } else {
            None
        }
    }

    fn last_word(&self) -> &str {
        words::last_word(&self.draft)
    }
}
