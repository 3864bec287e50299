/// Output formatting: markdown sections, JSON modes, error envelopes, debug timing.
use std::io::Write;

use serde::Serialize;

use super::args::OutputFormat;
use crate::ledger::ReportError;
use crate::types::ErrorOutput;

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all report writers.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// Link target printed in the markdown footer; `None` omits the footer.
    pub footer_source: Option<String>,
    /// When true, report phase timings through `tracing`.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        no_footer: bool,
        source: &str,
        debug: bool,
    ) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            footer_source: (!no_footer).then(|| source.to_owned()),
            debug,
        }
    }

    /// Start a named timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Markdown ---

/// Write a markdown heading of the given level followed by a blank line.
///
/// # Errors
///
/// Returns `ReportError::Io` if the writer fails.
pub fn write_heading(out: &mut impl Write, level: usize, text: &str) -> Result<(), ReportError> {
    writeln!(out, "{} {text}", "#".repeat(level))?;
    writeln!(out)?;
    Ok(())
}

/// Write a rendered table followed by a newline.
///
/// # Errors
///
/// Returns `ReportError::Io` if the writer fails.
pub fn write_table(out: &mut impl Write, table: &str) -> Result<(), ReportError> {
    writeln!(out, "{table}")?;
    Ok(())
}

/// Write the "generated by … at …" blockquote, preceded by a blank line.
///
/// The link label is the file name of `source`.
///
/// # Errors
///
/// Returns `ReportError::Io` if the writer fails.
pub fn write_footer(
    out: &mut impl Write,
    source: &str,
    generated_at: chrono::DateTime<chrono::Utc>,
) -> Result<(), ReportError> {
    let label = source.rsplit(['/', '\\']).next().unwrap_or(source);
    writeln!(out)?;
    writeln!(
        out,
        "> generated by [{label}]({source}) at {} UTC",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    Ok(())
}

// --- JSON ---

/// Write `values` in the given JSON format.
///
/// `Markdown` is not a JSON format and falls back to pretty JSON.
///
/// # Errors
///
/// Returns `ReportError` on encoding or write failure.
pub fn write_json<T: Serialize>(
    out: &mut impl Write,
    values: &[T],
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Compact => {
            serde_json::to_writer(&mut *out, values)?;
            writeln!(out)?;
        }
        OutputFormat::Ndjson => {
            for v in values {
                serde_json::to_writer(&mut *out, v)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json | OutputFormat::Markdown => {
            serde_json::to_writer_pretty(&mut *out, values)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if format.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(phase = self.label, "{ms:.2}ms");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::AccountOutput;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Markdown, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Ndjson, false), OutputFormat::Ndjson);
    }

    #[test]
    fn test_no_footer() {
        let ctx = OutputCtx::new(OutputFormat::Markdown, false, true, "../src/main.rs", false);
        assert!(ctx.footer_source.is_none());
        let ctx = OutputCtx::new(OutputFormat::Markdown, false, false, "x.rs", false);
        assert_eq!(ctx.footer_source.as_deref(), Some("x.rs"));
    }

    #[test]
    fn test_footer_format() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        let mut buf = Vec::new();
        write_footer(&mut buf, "../src/main.rs", at).unwrap();
        assert_eq!(
            text(buf),
            "\n> generated by [main.rs](../src/main.rs) at 2024-03-05 07:08:09 UTC\n"
        );
    }

    #[test]
    fn test_heading_levels() {
        let mut buf = Vec::new();
        write_heading(&mut buf, 1, "Account Classifications").unwrap();
        write_heading(&mut buf, 2, "Sorted by Title").unwrap();
        assert_eq!(text(buf), "# Account Classifications\n\n## Sorted by Title\n\n");
    }

    #[test]
    fn test_ndjson_one_object_per_line() {
        let rows = vec![
            AccountOutput {
                title: "Cash".to_owned(),
                classification: "Current Asset".to_owned(),
                statement: "Balance Sheet".to_owned(),
                normal_balance: "Debit".to_owned(),
            };
            2
        ];
        let mut buf = Vec::new();
        write_json(&mut buf, &rows, OutputFormat::Ndjson).unwrap();
        let out = text(buf);
        assert_eq!(out.lines().count(), 2);
        let first: AccountOutput = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first, rows[0]);
    }

    #[test]
    fn test_compact_is_single_line() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[1, 2, 3], OutputFormat::Compact).unwrap();
        assert_eq!(text(buf), "[1,2,3]\n");
    }
}
