//! Core types and pure logic for composing Intents in the controlled language.
//!
//! No I/O lives here: the parser-reply model, word-boundary helpers, and the
//! suggestion engine are all plain functions over plain data so they can be
//! exercised from tests without a server or a UI.

pub mod suggest;
pub mod validation;
pub mod words;
