/// All-columns report: one table per canonical column, each sorted by that column alone.
use std::io::Write;

use chrono::{DateTime, Utc};

use super::finish;
use crate::cli::OutputCtx;
use crate::cli::output::{write_heading, write_json, write_table};
use crate::ledger::{ACCOUNTS, COLUMN_NAMES, ReportError, render_table, sorted_accounts};
use crate::types::{AccountOutput, SortedTableOutput};

/// Report title in all-columns mode.
pub const TITLE: &str = "Account Classifications";

/// Run the all-columns report.
///
/// # Errors
///
/// Returns `ReportError` on write or encoding failure.
pub fn run(out: &mut impl Write, ctx: &OutputCtx, now: DateTime<Utc>) -> Result<(), ReportError> {
    if ctx.format.is_json() {
        let tables: Vec<SortedTableOutput> = COLUMN_NAMES
            .iter()
            .enumerate()
            .map(|(i, column)| SortedTableOutput {
                sorted_by: vec![(*column).to_owned()],
                accounts: sorted_accounts(ACCOUNTS, &[i])
                    .iter()
                    .map(AccountOutput::from)
                    .collect(),
            })
            .collect();
        return write_json(out, &tables, ctx.format);
    }

    write_heading(out, 1, TITLE)?;
    for (i, column) in COLUMN_NAMES.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let _t_render = ctx.timer("render_table");
        let table = render_table(ACCOUNTS, &[i]);
        drop(_t_render);

        write_heading(out, 2, &format!("Sorted by {column}"))?;
        write_table(out, &table)?;
    }
    finish(out, ctx, now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::cli::args::OutputFormat;

    fn report(format: OutputFormat) -> String {
        let ctx = OutputCtx::new(format, false, false, "../src/main.rs", false);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut buf = Vec::new();
        run(&mut buf, &ctx, now).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_one_section_per_column_in_order() {
        let out = report(OutputFormat::Markdown);
        assert!(out.starts_with("# Account Classifications\n\n## Sorted by Title\n\n| Title"));
        let headings: Vec<&str> = out.lines().filter(|l| l.starts_with("## ")).collect();
        assert_eq!(
            headings,
            vec![
                "## Sorted by Title",
                "## Sorted by Classification",
                "## Sorted by Statement",
                "## Sorted by Normal Balance",
            ]
        );
        assert_eq!(out.lines().filter(|l| l.starts_with("# ")).count(), 1);
    }

    #[test]
    fn test_each_section_sorted_by_its_column() {
        let out = report(OutputFormat::Markdown);
        for (i, column) in COLUMN_NAMES.iter().enumerate() {
            let expected = render_table(ACCOUNTS, &[i]);
            assert!(
                out.contains(&format!("## Sorted by {column}\n\n{expected}\n")),
                "section {column}"
            );
        }
    }

    #[test]
    fn test_single_footer_at_end() {
        let out = report(OutputFormat::Markdown);
        assert_eq!(out.matches("> generated by").count(), 1);
        assert!(out.ends_with("at 2024-01-02 03:04:05 UTC\n"));
    }

    #[test]
    fn test_json_tables() {
        let out = report(OutputFormat::Json);
        let tables: Vec<SortedTableOutput> = serde_json::from_str(&out).unwrap();
        assert_eq!(tables.len(), COLUMN_NAMES.len());
        assert_eq!(tables[2].sorted_by, vec!["Statement"]);
        assert_eq!(tables[0].accounts[0].title, "Accounts Payable");
    }
}
