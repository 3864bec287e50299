/// The built-in chart of accounts and its closed classification tags.
use std::fmt;

/// The financial statement an account's balance ultimately flows into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialStatement {
    BalanceSheet,
    IncomeStatement,
    RetainedEarnings,
    NotApplicable,
}

impl FinancialStatement {
    /// Human-readable label used in rendered tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            Self::RetainedEarnings => "Retained Earnings",
            Self::NotApplicable => "Not Applicable",
        }
    }
}

impl fmt::Display for FinancialStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The side on which an account's balance ordinarily increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalBalance {
    Debit,
    Credit,
    Special,
}

impl NormalBalance {
    /// Human-readable label used in rendered tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
            Self::Special => "Special",
        }
    }
}

impl fmt::Display for NormalBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Account name, unique within [`ACCOUNTS`].
    pub title: &'static str,
    /// Free-text sub-category (e.g. "Current Asset - Contra").
    pub classification: &'static str,
    pub statement: FinancialStatement,
    pub normal_balance: NormalBalance,
}

/// Canonical column names, in display order. Also the sort-key vocabulary.
pub const COLUMN_NAMES: [&str; 4] = ["Title", "Classification", "Statement", "Normal Balance"];

impl Account {
    const fn new(
        title: &'static str,
        classification: &'static str,
        statement: FinancialStatement,
        normal_balance: NormalBalance,
    ) -> Self {
        Self {
            title,
            classification,
            statement,
            normal_balance,
        }
    }

    /// Project into display strings, one per entry of [`COLUMN_NAMES`].
    #[must_use]
    pub const fn column_values(&self) -> [&'static str; 4] {
        [
            self.title,
            self.classification,
            self.statement.label(),
            self.normal_balance.label(),
        ]
    }
}

use FinancialStatement::{BalanceSheet, IncomeStatement, NotApplicable, RetainedEarnings};
use NormalBalance::{Credit, Debit, Special};

/// The full record set, in source order.
#[rustfmt::skip]
pub static ACCOUNTS: &[Account] = &[
    Account::new("Accounts Payable",                     "Current Liability",            BalanceSheet,     Credit),
    Account::new("Accounts Receivable",                  "Current Asset",                BalanceSheet,     Debit),
    Account::new("Accumulated Depreciation - Buildings", "Plant Asset - Contra",         BalanceSheet,     Credit),
    Account::new("Accumulated Depreciation - Equipment", "Plant Asset - Contra",         BalanceSheet,     Credit),
    Account::new("Administrative Expenses",              "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Allowance for Doubtful Accounts",      "Current Asset - Contra",       BalanceSheet,     Credit),
    Account::new("Amortization Expense",                 "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Bad Debt Expense",                     "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Bonds Payable",                        "Long Term Liability",          BalanceSheet,     Credit),
    Account::new("Buildings",                            "Plant Asset",                  BalanceSheet,     Debit),
    Account::new("Cash",                                 "Current Asset",                BalanceSheet,     Debit),
    Account::new("Common Stock",                         "Stockholders' Equity",         BalanceSheet,     Credit),
    Account::new("Cost of Goods Sold",                   "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Debt Investments",                     "Current Asset",                BalanceSheet,     Debit),
    Account::new("Depreciation Expense - Buildings",     "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Discount on Bonds Payable",            "Long Term Liability - Contra", BalanceSheet,     Debit),
    Account::new("Dividends Revenue",                    "OtherIncome",                  IncomeStatement,  Credit),
    Account::new("Dividends",                            "Temporary Account",            RetainedEarnings, Debit),
    Account::new("Dividends Payable",                    "Current Liability",            BalanceSheet,     Credit),
    Account::new("Equipment",                            "Plant Asset",                  BalanceSheet,     Debit),
    Account::new("Freight Out",                          "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Gain on Sale of Equipment",            "Other Income",                 IncomeStatement,  Credit),
    Account::new("Goodwill",                             "Intangible Asset",             BalanceSheet,     Debit),
    Account::new("Income Summary",                       "Temporary Account",            NotApplicable,    Special),
    Account::new("Income Tax Expense",                   "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Income Tax Payable",                   "Current Liability",            BalanceSheet,     Credit),
    Account::new("Insurance Expense",                    "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Interest Expense",                     "Operating Expense",            IncomeStatement,  Debit),
    Account::new("Interest Payable",                     "Current Liability",            BalanceSheet,     Credit),
    Account::new("Interest Receivable",                  "Current Asset",                BalanceSheet,     Debit),
    Account::new("Interest Revenue",                     "Other Income",                 IncomeStatement,  Credit),
    Account::new("Inventory",                            "Current Asset",                BalanceSheet,     Debit),
];
