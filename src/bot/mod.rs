// src/bot/mod.rs

//! The `bot` module is the contact-book engine behind program _abot_.
//!
//! [`commands`] holds the contact store, the command parser, and the
//! per-command handlers. The interactive loop itself lives in the binary;
//! the handlers here are plain functions returning [`Result`] so they are
//! testable without a terminal.
//!
//! [`commands`]: crate::bot::commands
//! [`Result`]: std::result::Result

pub mod commands;
