/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// Sort key that switches to one table per column.
pub const ALL_KEYWORD: &str = "all";

/// acctclass — render the account classification reference table.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "acctclass",
    about = "Render the account classification reference table as sortable markdown",
    version
)]
pub struct Cli {
    /// Columns to sort by, matched by case-insensitive prefix
    /// (e.g. "stat" for Statement). Unknown keys are ignored.
    /// A single "all" prints one table per column.
    #[arg(value_name = "SORT_KEY")]
    pub sort_keys: Vec<String>,

    /// Print one table per column (same as the single key "all").
    #[arg(long, conflicts_with = "sort_keys")]
    pub all: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "markdown")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit the "generated at" footer (for reproducible output).
    #[arg(long)]
    pub no_footer: bool,

    /// Link target for the footer.
    #[arg(
        long,
        value_name = "PATH",
        env = "ACCTCLASS_SOURCE",
        default_value = "../src/main.rs"
    )]
    pub source: String,

    /// Print resolution details and timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Whether the arguments select one table per column.
    #[must_use]
    pub fn all_mode(&self) -> bool {
        self.all || matches!(self.sort_keys.as_slice(), [key] if key == ALL_KEYWORD)
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Markdown headers, table and footer.
    #[default]
    Markdown,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

impl OutputFormat {
    /// Whether this is one of the JSON formats.
    #[must_use]
    pub fn is_json(self) -> bool {
        !matches!(self, Self::Markdown)
    }
}
