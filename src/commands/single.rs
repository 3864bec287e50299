/// Single-table report: one table, optionally sorted by user-supplied keys.
use std::io::Write;

use chrono::{DateTime, Utc};

use super::finish;
use crate::cli::OutputCtx;
use crate::cli::output::{write_heading, write_json, write_table};
use crate::ledger::{
    ACCOUNTS, ReportError, index_names, render_table, sorted_accounts, sortby_to_index,
};
use crate::types::AccountOutput;

/// Report title without a sort annotation.
pub const TITLE: &str = "Account Classification";

/// Markdown title, annotated with the resolved column names whenever sort
/// keys were given, even if none of them resolved.
#[must_use]
pub fn title(keys_given: bool, sort_indices: &[usize]) -> String {
    if !keys_given {
        TITLE.to_owned()
    } else {
        format!("{TITLE} (sorted by {})", index_names(sort_indices).join(", "))
    }
}

/// Run the single-table report.
///
/// # Errors
///
/// Returns `ReportError` on write or encoding failure.
pub fn run<S: AsRef<str>>(
    sort_keys: &[S],
    out: &mut impl Write,
    ctx: &OutputCtx,
    now: DateTime<Utc>,
) -> Result<(), ReportError> {
    let _t_resolve = ctx.timer("resolve_sort_keys");
    let indices = sortby_to_index(sort_keys);
    drop(_t_resolve);

    if ctx.format.is_json() {
        let rows: Vec<AccountOutput> = sorted_accounts(ACCOUNTS, &indices)
            .iter()
            .map(AccountOutput::from)
            .collect();
        return write_json(out, &rows, ctx.format);
    }

    let _t_render = ctx.timer("render_table");
    let table = render_table(ACCOUNTS, &indices);
    drop(_t_render);

    write_heading(out, 1, &title(!sort_keys.is_empty(), &indices))?;
    write_table(out, &table)?;
    finish(out, ctx, now)
}
