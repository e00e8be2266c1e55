//! The ledger engine: validates and applies deposits and withdrawals,
//! schedules future operations, and reconciles scheduled operations
//! against a target instant to project an account balance.
//!
//! All mutating calls run inside a single database transaction so that
//! the balance update and the operation record commit (or roll back) as
//! one unit. Concurrency between calls on the same account is fenced at
//! that persistence boundary; the engine itself holds no locks.

pub mod account;
pub mod deposit;
pub mod error;
pub mod projection;
pub mod statement;
pub mod store;
pub mod validate;
pub mod withdraw;

#[cfg(test)]
pub(crate) mod testing;

use sea_orm::DatabaseConnection;

pub use error::{LedgerError, Result};
pub use projection::BalanceProjection;

/// The ledger engine, constructed over an explicit store handle.
///
/// Each call obtains its own scoped transaction for mutations; there is
/// no shared global session.
#[derive(Clone, Debug)]
pub struct Ledger {
    db: DatabaseConnection,
}

impl Ledger {
    /// Creates a ledger engine over the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{days_from_now, new_account, setup_db};
    use common::{DepositInput, WithdrawInput};
    use model::entities::operation::OperationStatus;
    use rust_decimal::Decimal;

    /// Replays the operation history and checks the balance invariant:
    /// the stored balance equals the signed sum of all executed
    /// operation amounts.
    async fn assert_balance_invariant(ledger: &Ledger, account_id: i32) {
        let account = ledger.get_account(account_id).await.unwrap();
        let operations = ledger.operations_for_account(account_id).await.unwrap();

        let replayed: Decimal = operations
            .iter()
            .filter(|op| op.status == OperationStatus::Executed)
            .map(|op| {
                if op.kind.is_deposit() {
                    op.amount
                } else {
                    -op.amount
                }
            })
            .sum();

        assert_eq!(account.balance, replayed);
    }

    #[tokio::test]
    async fn test_balance_equals_replayed_operation_history() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 0).await.unwrap();

        ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(10000, 2)))
            .await
            .unwrap();
        ledger
            .execute_withdraw(account.id, WithdrawInput::new(Decimal::new(2500, 2)))
            .await
            .unwrap();
        ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(1, 2)))
            .await
            .unwrap();
        assert_balance_invariant(&ledger, account.id).await;

        // Scheduling alone must not disturb the invariant ...
        ledger
            .schedule_deposit(
                account.id,
                DepositInput::new(Decimal::new(5000, 2)),
                days_from_now(1),
            )
            .await
            .unwrap();
        ledger
            .schedule_withdraw(
                account.id,
                WithdrawInput::new(Decimal::new(1000, 2)),
                days_from_now(2),
            )
            .await
            .unwrap();
        assert_balance_invariant(&ledger, account.id).await;

        // ... and neither must reconciling the due part of the schedule.
        ledger
            .project_balance(account.id, days_from_now(1))
            .await
            .unwrap();
        assert_balance_invariant(&ledger, account.id).await;

        ledger
            .project_balance(account.id, days_from_now(2))
            .await
            .unwrap();
        assert_balance_invariant(&ledger, account.id).await;
    }
}
