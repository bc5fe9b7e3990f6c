//! Terminal host for the Intent composer: wires the editing session to
//! the parser worker and the persistence store.

pub mod commands;
pub mod trace_init;
