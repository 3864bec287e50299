/// Markdown table rendering for the account list.
use std::cmp::Ordering;

use comfy_table::{CellAlignment, Table, TableComponent, presets::ASCII_FULL_CONDENSED};

use super::accounts::{Account, COLUMN_NAMES};

/// Copy `accounts`, stable-sorted by the columns in `sort_indices`.
///
/// Rows compare column by column in the order given by `sort_indices`; an
/// empty list keeps the source order. The input slice is never reordered.
#[must_use]
pub fn sorted_accounts(accounts: &[Account], sort_indices: &[usize]) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    if !sort_indices.is_empty() {
        sorted.sort_by(|a, b| {
            let (a, b) = (a.column_values(), b.column_values());
            sort_indices
                .iter()
                .map(|&i| a[i].cmp(b[i]))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });
    }
    sorted
}

/// Display rows in the order produced by [`sorted_accounts`].
#[must_use]
pub fn sorted_rows(accounts: &[Account], sort_indices: &[usize]) -> Vec<[&'static str; 4]> {
    sorted_accounts(accounts, sort_indices)
        .iter()
        .map(Account::column_values)
        .collect()
}

/// Render `accounts` as a markdown table sorted by `sort_indices`.
///
/// The last column is right-aligned, both in the padded cell text and via a
/// `-:|` marker in the separator row.
#[must_use]
pub fn render_table(accounts: &[Account], sort_indices: &[usize]) -> String {
    let rows = sorted_rows(accounts, sort_indices);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::MiddleHeaderIntersections, '+');
    table.set_header(COLUMN_NAMES);
    for row in rows {
        table.add_row(row);
    }
    if let Some(last) = table.column_mut(COLUMN_NAMES.len() - 1) {
        last.set_cell_alignment(CellAlignment::Right);
    }

    to_markdown(&table.to_string())
}

/// Convert a bordered ASCII table into markdown table syntax.
///
/// Drops the top and bottom border, turns every `+` junction into `|`, and
/// marks the last separator cell as right-aligned.
fn to_markdown(ascii: &str) -> String {
    let lines: Vec<&str> = ascii.lines().collect();
    let inner = match lines.len() {
        0..=2 => &[][..],
        n => &lines[1..n - 1],
    };

    inner
        .iter()
        .map(|line| {
            let line = line.trim_end().replace('+', "|");
            if is_separator(&line) {
                right_align_last_cell(&line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A separator row is made only of `|` and `-` and contains at least one `-`.
fn is_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| c == '|' || c == '-')
}

fn right_align_last_cell(line: &str) -> String {
    line.strip_suffix("--|")
        .map_or_else(|| line.to_owned(), |head| format!("{head}-:|"))
}
