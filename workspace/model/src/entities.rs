//! This file serves as the root for all SeaORM entity modules.
//! The data models mirror the bank-account ledger: accounts hold a
//! running balance, operations record the deposits and withdrawals
//! (immediate or scheduled) that produced it.

pub mod account;
pub mod operation;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::operation::Entity as Operation;
}
