use tracing::debug_span;

use super::types::{clamped_index, EditResponse, KeyEvent};
use super::EditSession;

impl EditSession {
    /// Process a key event. Tab and Enter accept the active suggestion;
    /// the arrows move the selection without wrapping. A commit key with
    /// an empty list is not consumed so the host can treat Enter as form
    /// submission.
    pub fn handle_key(&mut self, event: KeyEvent) -> EditResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Tab | KeyEvent::Enter => self.commit_at(self.active),

            KeyEvent::ArrowDown => {
                self.active = clamped_index(self.active, 1, self.suggestions.len());
                EditResponse::consumed()
            }

            KeyEvent::ArrowUp => {
                self.active = clamped_index(self.active, -1, self.suggestions.len());
                EditResponse::consumed()
            }
        }
    }

    /// Commit the suggestion at `index`, as a pointer click on a listed
    /// candidate. Equivalent to a commit key with that candidate
    /// pre-selected; out-of-range indices are ignored.
    pub fn commit_at(&mut self, index: usize) -> EditResponse {
        let Some(candidate) = self.suggestions.get(index) else {
            return EditResponse::not_consumed();
        };
        let candidate = candidate.clone();
        self.commit_suggestion(&candidate)
    }
}
