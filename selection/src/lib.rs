//! Selection state engine for a cadastral plot browsing tool.
//!
//! Users search for land parcels ("plots"), collect results into named
//! selection tabs, toggle plot selection on and off, and configure the map
//! styles used for selected vs. unselected plots. The architecture enforces
//! a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (the reducer, invariants,
//!   queries, action decoding). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (snapshot files, action logs).
//!   Isolated to enable mocking in tests.
//!
//! The [`store`] module holds the one state value and applies the reducer
//! serially; the binary coordinates core logic with I/O to implement CLI
//! commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
