//! Subcommand handlers. One module per `Commands` variant.

pub mod completions;
pub mod config;
pub mod init;
pub mod record;
pub mod render;
