//! Client for the remote Intent parser.
//!
//! The wire contract: POST the draft as `{"intent_string": ...}` to
//! `/api/parser`. `204 No Content` means the draft is a complete,
//! grammatical Intent; `200 OK` carries `{"expected": [...],
//! "message": "..."}` for an extendable or broken prefix. Anything
//! else, including transport failures, degrades to a `ServerError`
//! verdict so the session is never left without a result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use icl_core::validation::ValidationResult;

use crate::ClientError;

#[derive(Serialize)]
struct IntentBody<'a> {
    intent_string: &'a str,
}

#[derive(Deserialize)]
struct ParseReply {
    expected: Vec<String>,
    message: String,
}

/// Grades a draft Intent. Implemented by [`ParserClient`]; test hosts
/// substitute a canned checker.
pub trait CheckIntent: Send {
    fn check(&self, intent: &str) -> ValidationResult;
}

/// Blocking client for the parser service.
pub struct ParserClient {
    base_url: String,
    token: Option<String>,
}

impl ParserClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    fn request(&self, intent: &str) -> Result<ValidationResult, ClientError> {
        let body = serde_json::to_string(&IntentBody {
            intent_string: intent,
        })
        .map_err(|e| ClientError::Parse(e.to_string()))?;

        let mut request = ureq::post(format!("{}/api/parser", self.base_url))
            .header("Content-Type", "application/json");
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Token {token}"));
        }

        let response = request
            .send(body.as_bytes())
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 204 {
            return Ok(ValidationResult::valid_terminal());
        }
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        normalize_reply(status, &text)
    }
}

impl CheckIntent for ParserClient {
    /// Grade `intent`, mapping any failure to a `ServerError` verdict.
    fn check(&self, intent: &str) -> ValidationResult {
        match self.request(intent) {
            Ok(result) => result,
            Err(err) => {
                debug!(%err, "parser request failed");
                ValidationResult::server_error()
            }
        }
    }
}

/// Normalize a non-terminal parser reply body.
fn normalize_reply(status: u16, body: &str) -> Result<ValidationResult, ClientError> {
    if status != 200 {
        return Err(ClientError::Status(status));
    }
    let reply: ParseReply =
        serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;
    Ok(ValidationResult::extendable(reply.expected, reply.message))
}
