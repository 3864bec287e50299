/// Shared serializable output types.
///
/// These are what gets written to stdout in the JSON formats. They are
/// decoupled from the internal `Account` type so the wire shape can use
/// owned strings and stable field names.
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, ReportError};

/// One account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOutput {
    /// Account name (e.g., "Accounts Payable").
    pub title: String,
    /// Free-text sub-category.
    pub classification: String,
    /// Financial statement label (e.g., "Balance Sheet").
    pub statement: String,
    /// Normal balance label: "Debit", "Credit" or "Special".
    pub normal_balance: String,
}

impl From<&Account> for AccountOutput {
    fn from(account: &Account) -> Self {
        Self {
            title: account.title.to_owned(),
            classification: account.classification.to_owned(),
            statement: account.statement.label().to_owned(),
            normal_balance: account.normal_balance.label().to_owned(),
        }
    }
}

/// One sorted table, as emitted per column in `all` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortedTableOutput {
    /// Canonical names of the columns the rows are sorted by.
    pub sorted_by: Vec<String>,
    pub accounts: Vec<AccountOutput>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ReportError`.
    #[must_use]
    pub fn from_report_error(err: &ReportError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
