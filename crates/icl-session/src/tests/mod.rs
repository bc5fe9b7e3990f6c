mod basic;

use icl_core::validation::{ValidationResult, INCOMPLETE_REASON};

use super::EditSession;

pub(super) fn incomplete(tokens: &[&str]) -> ValidationResult {
    ValidationResult::extendable(
        tokens.iter().map(|t| t.to_string()).collect(),
        INCOMPLETE_REASON.to_string(),
    )
}

pub(super) fn invalid(tokens: &[&str]) -> ValidationResult {
    ValidationResult::extendable(
        tokens.iter().map(|t| t.to_string()).collect(),
        "Illegal transition".to_string(),
    )
}

/// Edit the draft and immediately answer the resulting request with
/// `result`, as a well-behaved server would.
pub(super) fn edit_and_reply(
    session: &mut EditSession,
    text: &str,
    result: ValidationResult,
) {
    let resp = session.on_text_edit(text);
    let req = resp.request.expect("edit must request validation");
    assert_eq!(req.text, text);
    assert!(session.on_validation_reply(req.seq, result));
}
