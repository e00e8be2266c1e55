use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder used when a caller supplies no description for an
/// operation.
pub const DEFAULT_DESCRIPTION: &str = "(no description)";

/// Transport-side operation kind, mirroring the stored enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Deposit,
    Withdraw,
    FutureDeposit,
    FutureWithdraw,
}

/// Transport-side operation status, mirroring the stored enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    Executed,
    Scheduled,
}

/// An account as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub balance: Decimal,
}

/// A ledger operation as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: i32,
    pub account_id: i32,
    pub amount: Decimal,
    pub description: String,
    pub kind: OperationKind,
    pub status: OperationStatus,
    pub scheduled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// An account balance answer, optionally tagged with the instant it was
/// projected against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub account_id: i32,
    pub balance: Decimal,
    /// `None` for a plain stored-balance read; `Some` when the balance
    /// was projected (and reconciled) against a target instant.
    pub as_of: Option<NaiveDateTime>,
}

/// Caller input for a deposit, immediate or scheduled.
///
/// A missing amount is treated exactly like a non-positive one by the
/// engine; a missing description falls back to [`DEFAULT_DESCRIPTION`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositInput {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

impl DepositInput {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            description: None,
        }
    }

    pub fn with_description(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            description: Some(description.into()),
        }
    }
}

/// Caller input for a withdrawal, immediate or scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithdrawInput {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

impl WithdrawInput {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            description: None,
        }
    }

    pub fn with_description(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            description: Some(description.into()),
        }
    }
}
