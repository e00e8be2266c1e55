//! Input validation shared by the mutating engine calls.
//!
//! Check ordering is fixed by the engine contract: account existence is
//! resolved before any of these run, amount validity before date
//! validity, and funds sufficiency last.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};

/// Resolves an optional caller amount to a strictly positive magnitude.
///
/// An absent amount is treated identically to a non-positive one.
pub(crate) fn require_positive_amount(amount: Option<Decimal>) -> Result<Decimal> {
    let amount = amount.unwrap_or(Decimal::ZERO);
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(amount)
}

/// Requires the scheduled instant to be strictly after `now`.
pub(crate) fn require_future_instant(at: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
    if at <= now {
        return Err(LedgerError::InvalidDate(at));
    }
    Ok(())
}

/// Requires the balance to cover the requested withdrawal amount.
pub(crate) fn require_sufficient_funds(balance: Decimal, requested: Decimal) -> Result<()> {
    if balance < requested {
        return Err(LedgerError::InsufficientFunds { balance, requested });
    }
    Ok(())
}
