//! The suggestion engine: a pure function from the word in progress and the
//! latest parser verdict to the completion list shown to the user.
//!
//! Suggestions are only guaranteed correct immediately after a
//! space-terminated word; mid-word they are the previous space-triggered
//! reply's tokens narrowed by a local prefix filter. Once the prefix itself
//! is broken the mistake flag suppresses everything until a later
//! space-terminated evaluation comes back `Incomplete` again.

use crate::validation::{ParserMessage, ValidationResult};

/// Output of one engine evaluation: the completion list plus the
/// recomputed mistake flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub words: Vec<String>,
    pub has_mistake: bool,
}

impl Suggestions {
    fn none(has_mistake: bool) -> Self {
        Self {
            words: Vec::new(),
            has_mistake,
        }
    }
}

/// Evaluate the decision table. Rules are tried in order, first match wins:
///
/// 1. empty word, `Incomplete`  → all expected tokens, flag cleared
/// 2. empty word, anything else → nothing, flag set (the prefix is broken)
/// 3. flag carried in           → nothing, flag stays set
/// 4. partial word, not `Incomplete` → prefix-filtered tokens, flag unchanged
/// 5. partial word, `Incomplete`     → nothing, flag unchanged
pub fn compute_suggestions(
    last_word: &str,
    validation: &ValidationResult,
    had_mistake: bool,
) -> Suggestions {
    let incomplete = validation.message == ParserMessage::Incomplete;

    if last_word.is_empty() {
        if incomplete {
            return Suggestions {
                words: validation.expected_tokens.clone(),
                has_mistake: false,
            };
        }
        return Suggestions::none(true);
    }

    if had_mistake {
        return Suggestions::none(true);
    }

    if !incomplete {
        let needle = last_word.to_lowercase();
        let words = validation
            .expected_tokens
            .iter()
            .filter(|token| {
                token
                    .get(..last_word.len())
                    .is_some_and(|head| head.to_lowercase() == needle)
            })
            .cloned()
            .collect();
        return Suggestions {
            words,
            has_mistake: had_mistake,
        };
    }

    Suggestions::none(had_mistake)
}
