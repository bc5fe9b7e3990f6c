use icl_core::validation::{ParserMessage, ValidationResult};

use super::{edit_and_reply, incomplete, invalid, EditSession};
use crate::KeyEvent;

// --- Editing ---

#[test]
fn fresh_session_has_empty_state() {
    let session = EditSession::new("");
    assert_eq!(session.draft(), "");
    assert!(session.suggestions().is_empty());
    assert_eq!(session.active_index(), 0);
    assert!(!session.is_valid());
    assert!(session.submit().is_none());
}

#[test]
fn every_edit_requests_validation_with_increasing_seq() {
    let mut session = EditSession::new("");
    let first = session.on_text_edit("F").request.unwrap();
    let second = session.on_text_edit("Fo").request.unwrap();
    let third = session.on_text_edit("For").request.unwrap();
    assert!(first.seq < second.seq);
    assert!(second.seq < third.seq);
    assert_eq!(third.text, "For");
}

#[test]
fn revalidate_requests_without_changing_the_draft() {
    let mut session = EditSession::new("For client1 select the fastest blockchain as default");
    let req = session.revalidate();
    assert_eq!(req.text, session.draft());
    assert!(session.on_validation_reply(req.seq, ValidationResult::valid_terminal()));
    assert!(session.is_valid());
}

#[test]
fn mid_word_filtering_waits_for_the_partial_draft_reply() {
    let mut session = EditSession::new("For ");
    edit_and_reply(&mut session, "For client1 ", incomplete(&["select", "in"]));
    assert_eq!(session.suggestions(), ["select", "in"]);

    // Mid-word with the previous Incomplete verdict still applied:
    // nothing is offered yet.
    let resp = session.on_text_edit("For client1 se");
    assert!(resp.consumed);
    assert!(session.suggestions().is_empty());

    // The partial draft's own reply is non-Incomplete and carries the
    // position's tokens; now the local prefix filter applies.
    let req = resp.request.unwrap();
    session.on_validation_reply(req.seq, invalid(&["select", "in", "prefer"]));
    assert_eq!(session.suggestions(), ["select"]);
}

// --- Key navigation ---

#[test]
fn arrows_clamp_without_wraparound() {
    let mut session = EditSession::new("For ");
    edit_and_reply(
        &mut session,
        "For client1 ",
        incomplete(&["select", "in", "prefer"]),
    );

    session.handle_key(KeyEvent::ArrowUp);
    assert_eq!(session.active_index(), 0);

    session.handle_key(KeyEvent::ArrowDown);
    session.handle_key(KeyEvent::ArrowDown);
    assert_eq!(session.active_index(), 2);
    session.handle_key(KeyEvent::ArrowDown);
    assert_eq!(session.active_index(), 2);

    session.handle_key(KeyEvent::ArrowUp);
    assert_eq!(session.active_index(), 1);
}

#[test]
fn arrows_are_inert_on_an_empty_list() {
    let mut session = EditSession::new("");
    let resp = session.handle_key(KeyEvent::ArrowDown);
    assert!(resp.consumed);
    assert_eq!(session.active_index(), 0);
}

// --- Committing ---

#[test]
fn commit_key_replaces_the_word_in_progress() {
    let mut session = EditSession::new("For client1 ");
    edit_and_reply(&mut session, "For client1 se", invalid(&["select", "Stellar"]));
    assert_eq!(session.suggestions(), ["select"]);

    let resp = session.handle_key(KeyEvent::Tab);
    assert!(resp.consumed);
    assert_eq!(session.draft(), "For client1 select");
    assert_eq!(session.active_index(), 0);
    // The commit is an edit: it must re-request validation.
    assert_eq!(resp.request.unwrap().text, "For client1 select");
}

#[test]
fn commit_key_with_empty_list_is_not_consumed() {
    let mut session = EditSession::new("For client1 select");
    let resp = session.handle_key(KeyEvent::Enter);
    assert!(!resp.consumed);
    assert!(resp.request.is_none());
    assert_eq!(session.draft(), "For client1 select");
}

#[test]
fn pointer_commit_uses_the_clicked_candidate() {
    let mut session = EditSession::new("For ");
    edit_and_reply(
        &mut session,
        "For client1 ",
        incomplete(&["select", "in", "prefer"]),
    );

    let resp = session.commit_at(2);
    assert!(resp.consumed);
    assert_eq!(session.draft(), "For client1 prefer");

    // Out of range: ignored.
    let resp = session.commit_at(17);
    assert!(!resp.consumed);
}

#[test]
fn enter_commits_the_arrowed_selection() {
    let mut session = EditSession::new("For ");
    edit_and_reply(&mut session, "For client1 ", incomplete(&["select", "in"]));

    session.handle_key(KeyEvent::ArrowDown);
    let resp = session.handle_key(KeyEvent::Enter);
    assert!(resp.consumed);
    assert_eq!(session.draft(), "For client1 in");
}

// --- Submission gating ---

#[test]
fn submit_is_gated_on_a_terminal_verdict() {
    let mut session = EditSession::new("For ");
    edit_and_reply(&mut session, "For client1 ", incomplete(&["select"]));
    assert!(session.submit().is_none());

    let full = "For client1 select the fastest blockchain as default";
    edit_and_reply(&mut session, full, ValidationResult::valid_terminal());
    assert_eq!(session.submit(), Some(full));
    assert_eq!(session.parser_message(), ParserMessage::ValidTerminal);

    // Any further edit leaves the session unsubmittable until the new
    // draft's own reply arrives.
    session.on_text_edit(&format!("{full} x"));
    assert!(session.submit().is_none());
}

#[test]
fn view_exposes_the_presentation_fields() {
    let mut session = EditSession::new("For ");
    edit_and_reply(&mut session, "For client1 ", incomplete(&["select", "in"]));

    let view = session.view();
    assert_eq!(view.draft, "For client1 ");
    assert_eq!(view.suggestions, ["select", "in"]);
    assert_eq!(view.active, 0);
    assert!(!view.is_valid);
    assert_eq!(view.message, ParserMessage::Incomplete);
}

#[test]
fn server_error_reply_leaves_a_usable_session() {
    let mut session = EditSession::new("For ");
    edit_and_reply(&mut session, "For client1 ", ValidationResult::server_error());
    assert!(session.suggestions().is_empty());
    assert_eq!(session.parser_message(), ParserMessage::ServerError);

    // Recoverable by further typing, which issues a new request.
    let resp = session.on_text_edit("For client1 s");
    assert!(resp.request.is_some());
}
