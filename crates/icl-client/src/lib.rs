//! HTTP collaborators of the editing session: the parser service that
//! grades a draft Intent, the persistence service that stores finished
//! Intents, and a worker thread that keeps validation off the caller's
//! thread.

pub mod parser;
pub mod store;
pub mod worker;

pub use parser::{CheckIntent, ParserClient};
pub use store::{IntentRecord, IntentStore, StoreError};
pub use worker::{ValidationReply, ValidationWorker};

use thiserror::Error;

/// Failure of a single parser round-trip. Internal to this crate's
/// public surface: [`ParserClient::check`] maps every variant to a
/// `ServerError` verdict instead of propagating it.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed reply: {0}")]
    Parse(String),
}
