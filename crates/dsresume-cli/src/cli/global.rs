//! Flags shared by every `dsresume` subcommand.
//!
//! `dsresume` writes two kinds of output: the rendered page (or record dump)
//! and status lines such as "Wrote resume.html". The flags here shape the
//! status lines and logging only. The page itself is always written in full.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more on stderr (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Raise the stderr log level. RUST_LOG overrides this.
    (none)  - warnings only
    -v      - info (written files)
    -vv     - debug (section counts, config sources)
    -vvv    - trace (every file system call)"
    )]
    pub verbose: u8,

    /// Hide status lines and lower logging to errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide status lines (page still written)",
        long_help = "Hide status lines such as 'Wrote resume.html' and log errors only. \
The rendered page or record dump on stdout is never suppressed, and \
overwrite prompts are skipped."
    )]
    pub quiet: bool,

    /// Strip ANSI colour from status lines and logs. Honours `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored status lines and logs"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Settings file (TOML)",
        long_help = "Settings file (TOML) to use instead of the per-user default. \
It must exist, except for 'dsresume init', which creates it."
    )]
    pub config: Option<PathBuf>,

    /// Style of status lines. Independent of `render --format`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Status line style (not the page)",
        long_help = "Style of status lines. The rendered page is controlled by \
'render --format' and is never affected. 'auto' picks human on a terminal \
and plain otherwise; 'json' prints one {\"level\", \"message\"} object per line."
    )]
    pub output_format: OutputFormat,
}

/// Status line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured icons.
    Human,
    Plain,
    /// One JSON object per status line.
    Json,
}
