//! Deterministic, pure logic of the selection engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod action;
pub mod invariants;
pub mod query;
pub mod reduce;
pub mod state;
