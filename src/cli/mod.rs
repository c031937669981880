//! CLI command handlers
//!
//! This module contains the interactive menu and the handlers for the
//! non-interactive subcommands, bridging clap argument parsing with the
//! service layer.

pub mod audit;
pub mod export;
pub mod menu;
pub mod prompt;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportFormat};
pub use menu::{Menu, MenuChoice};
pub use prompt::Console;
