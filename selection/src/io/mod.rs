//! I/O helpers for selection CLI commands.

pub mod action_log;
pub mod init;
pub mod state_file;
