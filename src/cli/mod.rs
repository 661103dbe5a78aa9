//! CLI command handlers
//!
//! This module bridges clap argument parsing with the command layer, for
//! both one-shot invocations and the interactive shell.

pub mod book;
pub mod export;
pub mod history;
pub mod session;
pub mod shell;

pub use book::{parse_index, BookCommands, Request};
pub use export::{handle_export_command, ExportCommands};
pub use history::handle_history_command;
pub use session::Session;
pub use shell::{run_shell, LoopControl};
