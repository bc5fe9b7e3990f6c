//! Word-boundary helpers over the draft text.
//!
//! The draft splits at its final space into a space-terminated prefix the
//! parser has already seen and the word currently being typed.

/// The word currently being typed: everything after the final space.
/// Empty when the draft is empty or ends in a space.
pub fn last_word(draft: &str) -> &str {
    match draft.rfind(' ') {
        Some(idx) => &draft[idx + 1..],
        None => draft,
    }
}

/// Everything before the final space; empty when the draft has no space.
pub fn valid_prefix(draft: &str) -> &str {
    match draft.rfind(' ') {
        Some(idx) => &draft[..idx],
        None => "",
    }
}

/// Rebuild the draft with `candidate` in place of the word being typed.
pub fn replace_last_word(draft: &str, candidate: &str) -> String {
    let prefix = valid_prefix(draft);
    if prefix.is_empty() {
        candidate.to_string()
    } else {
        format!("{prefix} {candidate}")
    }
}
