use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the ledger engine.
///
/// Every kind is terminal for the current call: validation failures abort
/// before any mutation, and a failed commit leaves no partial state. The
/// engine never retries.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Referenced account id does not resolve
    #[error("Account {0} not found")]
    AccountNotFound(i32),

    /// Referenced operation id does not resolve
    #[error("Operation {0} not found")]
    OperationNotFound(i32),

    /// Operation exists but is not of the category the caller asked for
    #[error("Operation {id} is not a {expected}")]
    WrongOperationKind { id: i32, expected: &'static str },

    /// Amount is zero, negative, or absent
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Scheduled instant is not strictly in the future
    #[error("Invalid date: {0} is not in the future")]
    InvalidDate(NaiveDateTime),

    /// Withdrawal amount exceeds the balance at validation time
    #[error("Insufficient funds: balance {balance} is less than {requested}")]
    InsufficientFunds {
        balance: Decimal,
        requested: Decimal,
    },
}

/// Type alias for Result with LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;
