//! Interactive composer loop.
//!
//! Each plain input line becomes the new draft text (an edit); lines
//! starting with `:` are commands that drive selection, commit and
//! submission. Validation happens on a worker thread; replies are
//! applied between prompts with the session's staleness check deciding
//! what sticks.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use icl_client::{IntentStore, ParserClient, ValidationWorker};
use icl_session::{EditSession, KeyEvent, ValidationRequest};

const REPLY_WAIT: Duration = Duration::from_millis(300);

pub fn run_compose(
    base_url: &str,
    token: Option<String>,
    initial: &str,
    update_id: Option<u64>,
) -> io::Result<()> {
    let store = IntentStore::new(base_url, token.clone());
    let worker = ValidationWorker::new(ParserClient::new(base_url, token));

    let mut session = EditSession::new(initial);
    ship(&worker, session.revalidate());
    drain_replies(&worker, &mut session);

    let stdin = io::stdin();
    let mut out = io::stdout();

    println!("Compose an Intent. Type text to replace the draft; commands:");
    println!("  :up :down      move the selection");
    println!("  :tab :enter    accept the selected suggestion");
    println!("  :submit        save the Intent (when valid)");
    println!("  :quit          leave without saving");

    loop {
        render(&session, &mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        // Strip the newline only; trailing spaces are meaningful edits.
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }

        match line.as_str() {
            ":quit" => break,
            ":up" => {
                session.handle_key(KeyEvent::ArrowUp);
            }
            ":down" => {
                session.handle_key(KeyEvent::ArrowDown);
            }
            ":tab" | ":enter" => {
                let key = if line == ":tab" {
                    KeyEvent::Tab
                } else {
                    KeyEvent::Enter
                };
                let resp = session.handle_key(key);
                if let Some(req) = resp.request {
                    ship(&worker, req);
                } else if !resp.consumed
                    && key == KeyEvent::Enter
                    && try_submit(&session, &store, update_id)
                {
                    // Enter with no suggestions falls through to submission.
                    break;
                }
            }
            ":submit" => {
                if try_submit(&session, &store, update_id) {
                    break;
                }
            }
            text => {
                let resp = session.on_text_edit(text);
                if let Some(req) = resp.request {
                    ship(&worker, req);
                }
            }
        }

        drain_replies(&worker, &mut session);
    }

    Ok(())
}

fn ship(worker: &ValidationWorker, req: ValidationRequest) {
    worker.submit(req.seq, req.text);
}

/// Wait briefly for the in-flight reply, then apply everything queued.
fn drain_replies(worker: &ValidationWorker, session: &mut EditSession) {
    if let Some(reply) = worker.recv_timeout(REPLY_WAIT) {
        session.on_validation_reply(reply.seq, reply.result);
    }
    while let Some(reply) = worker.try_recv() {
        session.on_validation_reply(reply.seq, reply.result);
    }
}

fn render(session: &EditSession, out: &mut impl Write) -> io::Result<()> {
    let view = session.view();
    writeln!(out)?;
    writeln!(out, "draft: {:?}", view.draft)?;
    if view.is_valid {
        writeln!(out, "state: valid Intent")?;
    } else if view.suggestions.is_empty() {
        writeln!(out, "state: {}", view.reason)?;
    }
    for (i, word) in view.suggestions.iter().enumerate() {
        let marker = if i == view.active { ">" } else { " " };
        writeln!(out, "  {marker} {word}")?;
    }
    Ok(())
}

/// Persist the draft if the session allows it. Store failures are
/// reported and leave the composer running; they never touch the
/// session's state.
fn try_submit(session: &EditSession, store: &IntentStore, update_id: Option<u64>) -> bool {
    let Some(text) = session.submit() else {
        println!("Intent is not valid yet; nothing submitted.");
        return false;
    };
    let saved = match update_id {
        Some(id) => store.update(id, text),
        None => store.create(text),
    };
    match saved {
        Ok(record) => {
            println!("Saved Intent #{}: {}", record.id, record.intent_string);
            true
        }
        Err(err) => {
            eprintln!("could not save Intent: {err}");
            false
        }
    }
}
