/// Report dispatch: routes parsed arguments to single-table or all-columns mode.
pub mod all;
pub mod single;

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::cli::output::write_footer;
use crate::cli::{Cli, OutputCtx};
use crate::ledger::ReportError;

/// Dispatch parsed arguments to the matching report and write it to stdout.
///
/// # Errors
///
/// Returns `ReportError` if stdout cannot be written.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(cli, ctx, &mut out, Utc::now())?;
    out.flush()?;
    Ok(())
}

/// Write the report selected by `cli` into `out`.
///
/// # Errors
///
/// Returns `ReportError` on write or encoding failure.
pub fn report(
    cli: &Cli,
    ctx: &OutputCtx,
    out: &mut impl Write,
    now: DateTime<Utc>,
) -> Result<(), ReportError> {
    if cli.all_mode() {
        all::run(out, ctx, now)
    } else {
        single::run(&cli.sort_keys, out, ctx, now)
    }
}

/// Write the footer when the context asks for one.
fn finish(out: &mut impl Write, ctx: &OutputCtx, now: DateTime<Utc>) -> Result<(), ReportError> {
    if let Some(source) = &ctx.footer_source {
        write_footer(out, source, now)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use clap::Parser;

    use super::*;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("acctclass").chain(args.iter().copied()))
            .unwrap();
        let ctx = OutputCtx::new(cli.output, cli.json, cli.no_footer, &cli.source, false);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut buf = Vec::new();
        report(&cli, &ctx, &mut buf, now).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sole_all_selects_all_columns() {
        let out = run_args(&["all", "--no-footer"]);
        assert!(out.starts_with("# Account Classifications\n\n## Sorted by Title\n\n"));
        assert_eq!(out.lines().filter(|l| l.starts_with("## ")).count(), 4);
    }

    #[test]
    fn test_all_among_other_keys_is_single_table() {
        let out = run_args(&["all", "title", "--no-footer"]);
        assert!(out.starts_with("# Account Classification (sorted by Title)\n\n"));
        assert!(!out.contains("## "));
    }

    #[test]
    fn test_footer_written_once() {
        let out = run_args(&["--all"]);
        assert_eq!(out.matches("> generated by").count(), 1);
    }
}
