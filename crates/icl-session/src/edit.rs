use tracing::debug;

use icl_core::suggest::compute_suggestions;
use icl_core::validation::ValidationResult;
use icl_core::words;

use super::types::{EditResponse, ValidationRequest};
use super::EditSession;

impl EditSession {
    /// Replace the draft with `new_text`, as typed by the user. Resets
    /// the active index, recomputes suggestions against the most recent
    /// verdict, and returns a validation request for the new draft.
    /// Commits go through the same path: selecting a suggestion is
    /// textually indistinguishable from typing it.
    pub fn on_text_edit(&mut self, new_text: &str) -> EditResponse {
        self.draft = new_text.to_string();
        self.active = 0;
        self.recompute_suggestions();

        let mut resp = EditResponse::consumed();
        resp.request = Some(self.next_request());
        resp
    }

    /// Commit `candidate` in place of the word being typed, then behave
    /// exactly like an edit of the resulting text. Restoring input focus
    /// afterwards is the host's concern.
    pub fn commit_suggestion(&mut self, candidate: &str) -> EditResponse {
        let committed = words::replace_last_word(&self.draft, candidate);
        self.on_text_edit(&committed)
    }

    /// Apply a validation reply. Returns `false` (and changes nothing)
    /// when a newer reply has already been applied; requests are never
    /// cancelled, so out-of-order arrival is expected.
    pub fn on_validation_reply(&mut self, seq: u64, result: ValidationResult) -> bool {
        if seq <= self.applied_seq {
            debug!(seq, applied = self.applied_seq, "stale validation reply dropped");
            return false;
        }
        self.applied_seq = seq;
        self.validation = result;
        // Against the draft as it is now, not as it was at request time.
        self.recompute_suggestions();
        true
    }

    /// Request validation of the current draft without editing it, for
    /// a stored Intent loaded into the session before any keystroke.
    pub fn revalidate(&mut self) -> ValidationRequest {
        self.next_request()
    }

    fn next_request(&mut self) -> ValidationRequest {
        self.next_seq += 1;
        ValidationRequest {
            seq: self.next_seq,
            text: self.draft.clone(),
        }
    }

    fn recompute_suggestions(&mut self) {
        let result = compute_suggestions(self.last_word(), &self.validation, self.has_mistake);
        self.suggestions = result.words;
        self.has_mistake = result.has_mistake;
        if self.active >= self.suggestions.len() {
            self.active = 0;
        }
    }
}
