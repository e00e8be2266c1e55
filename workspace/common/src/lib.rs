//! Transport-friendly data records for the ledger.
//!
//! These are the plain records exposed to callers of the ledger engine
//! (and produced by it), kept free of any persistence types. The
//! [`converters`] module holds the pure entity-to-record conversion
//! functions, one per entity pair, so the mapping rules stay visible and
//! independently testable.

pub mod converters;
pub mod records;

pub use records::{
    AccountRecord, BalanceRecord, DepositInput, OperationKind, OperationRecord, OperationStatus,
    WithdrawInput, DEFAULT_DESCRIPTION,
};
