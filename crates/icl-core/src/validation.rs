use serde::{Deserialize, Serialize};

/// Reason string the parser sends for a string that is a legal prefix of
/// an Intent but not yet a complete one. Compared exactly, once, at the
/// service boundary; everything above it works on [`ParserMessage`].
pub const INCOMPLETE_REASON: &str = "Intent is incomplete";

/// Shown in place of a server reason when the round-trip itself failed.
pub const SERVER_ERROR_REASON: &str = "Something went wrong";

/// Normalized parser verdict for a draft Intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParserMessage {
    /// Legal prefix, more words required. Suggestions are offered.
    Incomplete,
    /// Dead end as typed; the user has to backtrack.
    Invalid,
    /// A complete, grammatical Intent. Submission is enabled.
    ValidTerminal,
    /// The validation round-trip failed (network, bad body, bad status).
    ServerError,
}

impl ParserMessage {
    /// Classify the reason string of a non-terminal parser reply.
    pub fn from_reason(reason: &str) -> Self {
        if reason == INCOMPLETE_REASON {
            Self::Incomplete
        } else {
            Self::Invalid
        }
    }
}

/// One full validation round-trip, normalized. Replaced wholesale on every
/// reply; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Tokens that would legally extend the draft, in server order.
    pub expected_tokens: Vec<String>,
    pub message: ParserMessage,
    /// Human-readable reason for display.
    pub reason: String,
    /// True only for a complete, grammatical Intent.
    pub is_complete: bool,
}

impl ValidationResult {
    /// Result for a draft the parser accepted as a complete Intent.
    pub fn valid_terminal() -> Self {
        Self {
            expected_tokens: Vec::new(),
            message: ParserMessage::ValidTerminal,
            reason: String::new(),
            is_complete: true,
        }
    }

    /// Result for an extendable or broken prefix, carrying whatever
    /// continuation tokens the server returned (possibly none).
    pub fn extendable(expected_tokens: Vec<String>, reason: String) -> Self {
        Self {
            message: ParserMessage::from_reason(&reason),
            expected_tokens,
            reason,
            is_complete: false,
        }
    }

    /// Result standing in for a failed round-trip. The caller is never
    /// left without a result.
    pub fn server_error() -> Self {
        Self {
            expected_tokens: Vec::new(),
            message: ParserMessage::ServerError,
            reason: SERVER_ERROR_REASON.to_string(),
            is_complete: false,
        }
    }
}

/// State before any reply has arrived: nothing is known, nothing is valid.
impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            expected_tokens: Vec::new(),
            message: ParserMessage::Invalid,
            reason: String::new(),
            is_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_reason_maps_to_incomplete() {
        assert_eq!(
            ParserMessage::from_reason("Intent is incomplete"),
            ParserMessage::Incomplete
        );
    }

    #[test]
    fn other_reasons_map_to_invalid() {
        assert_eq!(
            ParserMessage::from_reason("Illegal transition from SELECT"),
            ParserMessage::Invalid
        );
        // Close but not exact must not match the sentinel.
        assert_eq!(
            ParserMessage::from_reason("intent is incomplete"),
            ParserMessage::Invalid
        );
    }

    #[test]
    fn constructors_set_completeness() {
        assert!(ValidationResult::valid_terminal().is_complete);
        assert!(!ValidationResult::server_error().is_complete);
        let r = ValidationResult::extendable(vec!["for".into()], INCOMPLETE_REASON.into());
        assert!(!r.is_complete);
        assert_eq!(r.message, ParserMessage::Incomplete);
        assert_eq!(r.expected_tokens, vec!["for".to_string()]);
    }
}
