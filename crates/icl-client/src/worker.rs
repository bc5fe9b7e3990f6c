//! Background validation worker.
//!
//! One named thread owns the parser client and serves one editing
//! session. Requests arrive tagged with the session's sequence number;
//! the thread drains its queue to the newest pending request before
//! touching the network, since an older draft's verdict is useless the
//! moment a newer request exists. Replies keep their tag, so the
//! session's own staleness check stays authoritative.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use icl_core::validation::ValidationResult;

use crate::parser::CheckIntent;

struct ValidationWork {
    seq: u64,
    text: String,
}

/// A graded draft, tagged with the sequence number of its request.
pub struct ValidationReply {
    pub seq: u64,
    pub result: ValidationResult,
}

pub struct ValidationWorker {
    work_tx: mpsc::Sender<ValidationWork>,
    reply_rx: Mutex<mpsc::Receiver<ValidationReply>>,
}

impl ValidationWorker {
    /// Spawn the worker thread. The thread exits when this handle is
    /// dropped and its channel disconnects; in-flight replies for a
    /// dropped session are never delivered anywhere.
    pub fn new(checker: impl CheckIntent + 'static) -> Self {
        let (work_tx, work_rx) = mpsc::channel::<ValidationWork>();
        let (reply_tx, reply_rx) = mpsc::channel::<ValidationReply>();

        thread::Builder::new()
            .name("icl-validation".into())
            .spawn(move || validation_loop(work_rx, reply_tx, checker))
            .expect("failed to spawn validation worker");

        Self {
            work_tx,
            reply_rx: Mutex::new(reply_rx),
        }
    }

    /// Queue the draft `text` for validation under `seq`.
    pub fn submit(&self, seq: u64, text: String) {
        let _ = self.work_tx.send(ValidationWork { seq, text });
    }

    /// Non-blocking poll for the next reply.
    pub fn try_recv(&self) -> Option<ValidationReply> {
        let rx = self.reply_rx.lock().ok()?;
        rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next reply.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ValidationReply> {
        let rx = self.reply_rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

fn validation_loop(
    rx: mpsc::Receiver<ValidationWork>,
    tx: mpsc::Sender<ValidationReply>,
    checker: impl CheckIntent,
) {
    while let Ok(work) = rx.recv() {
        // Skip to the newest queued request; superseded drafts are not
        // worth a round-trip.
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        let result = checker.check(&latest.text);
        if tx
            .send(ValidationReply {
                seq: latest.seq,
                result,
            })
            .is_err()
        {
            break;
        }
    }
}
