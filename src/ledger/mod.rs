/// Ledger domain layer: the chart of accounts, sort-key resolution, table rendering.
pub mod accounts;
pub mod columns;
pub mod errors;
pub mod table;

pub use accounts::{ACCOUNTS, Account, COLUMN_NAMES};
pub use columns::{index_names, sortby_to_index};
pub use errors::ReportError;
pub use table::{render_table, sorted_accounts};
