//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No rendering logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dsresume_core::domain::{DocumentFormat, Media};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dsresume",
    bin_name = "dsresume",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ae} Handheld-console themed résumé",
    long_about = "dsresume renders the built-in résumé as a two-screen \
                  handheld-console page, as standalone HTML, plain text, or JSON.",
    after_help = "EXAMPLES:\n\
        \x20 dsresume render > resume.html\n\
        \x20 dsresume render --media print -o out/resume.html\n\
        \x20 dsresume render --format text\n\
        \x20 dsresume completions bash > /usr/share/bash-completion/completions/dsresume",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the résumé page.
    #[command(
        visible_alias = "r",
        about = "Render the résumé",
        after_help = "EXAMPLES:\n\
            \x20 dsresume render                          # HTML to stdout\n\
            \x20 dsresume render --format text --media print\n\
            \x20 dsresume render -o resume.html --force"
    )]
    Render(RenderArgs),

    /// Print the built-in record as JSON.
    #[command(about = "Show the built-in record")]
    Record,

    /// Initialise a dsresume configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dsresume init\n\
            \x20 dsresume init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dsresume completions bash > ~/.local/share/bash-completion/completions/dsresume\n\
            \x20 dsresume completions zsh  > ~/.zfunc/_dsresume\n\
            \x20 dsresume completions fish > ~/.config/fish/completions/dsresume.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the dsresume configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dsresume config get render.format\n\
            \x20 dsresume config list\n\
            \x20 dsresume config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `dsresume render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output format. Falls back to `render.format` from config.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_parser = DocumentFormat::from_str,
        help = "Output format: html, text, json"
    )]
    pub format: Option<DocumentFormat>,

    /// Target media. Falls back to `render.media` from config.
    #[arg(
        short = 'm',
        long = "media",
        value_name = "MEDIA",
        value_parser = Media::from_str,
        help = "Target media: screen, print"
    )]
    pub media: Option<Media>,

    /// Write to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite FILE if it exists.
    #[arg(long = "force", requires = "output", help = "Overwrite an existing output file")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dsresume init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dsresume completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dsresume config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
