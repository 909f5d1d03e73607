//! Stable exit codes for selection CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid layout, snapshot, action log, or other error.
pub const INVALID: i32 = 1;
