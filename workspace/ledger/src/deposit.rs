//! Deposit operations: immediate execution, future scheduling, and
//! deposit-family lookup.

use chrono::{NaiveDateTime, Utc};
use common::DepositInput;
use model::entities::{account, operation};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::{info, instrument};

use crate::error::{LedgerError, Result};
use crate::{store, validate, Ledger};

impl Ledger {
    /// Executes an immediate deposit: increments the balance and records
    /// an `Executed` `Deposit` operation, atomically.
    #[instrument(skip(self, deposit), fields(account_id = account_id))]
    pub async fn execute_deposit(
        &self,
        account_id: i32,
        deposit: DepositInput,
    ) -> Result<operation::Model> {
        let txn = self.db.begin().await?;

        let account = store::find_account(&txn, account_id).await?;
        let amount = validate::require_positive_amount(deposit.amount)?;

        let balance = account.balance + amount;
        let mut active: account::ActiveModel = account.into();
        active.balance = Set(balance);
        active.update(&txn).await?;

        let operation = store::insert_operation(
            &txn,
            account_id,
            amount,
            deposit.description,
            operation::OperationKind::Deposit,
            operation::OperationStatus::Executed,
            None,
        )
        .await?;

        txn.commit().await?;

        info!(
            "Deposited {} into account_id={}, new balance {}",
            amount, account_id, balance
        );
        Ok(operation)
    }

    /// Schedules a deposit for a future instant.
    ///
    /// The balance is not touched here; the amount is folded in when a
    /// balance projection first crosses `at`.
    #[instrument(skip(self, deposit), fields(account_id = account_id, at = %at))]
    pub async fn schedule_deposit(
        &self,
        account_id: i32,
        deposit: DepositInput,
        at: NaiveDateTime,
    ) -> Result<operation::Model> {
        let txn = self.db.begin().await?;

        store::find_account(&txn, account_id).await?;
        let amount = validate::require_positive_amount(deposit.amount)?;
        validate::require_future_instant(at, Utc::now().naive_utc())?;

        let operation = store::insert_operation(
            &txn,
            account_id,
            amount,
            deposit.description,
            operation::OperationKind::FutureDeposit,
            operation::OperationStatus::Scheduled,
            Some(at),
        )
        .await?;

        txn.commit().await?;

        info!(
            "Scheduled deposit of {} for account_id={} at {}",
            amount, account_id, at
        );
        Ok(operation)
    }

    /// Loads a deposit-family operation (`Deposit` or `FutureDeposit`)
    /// by id.
    pub async fn get_deposit(&self, operation_id: i32) -> Result<operation::Model> {
        let operation = store::find_operation(&self.db, operation_id).await?;
        if !operation.kind.is_deposit() {
            return Err(LedgerError::WrongOperationKind {
                id: operation_id,
                expected: "deposit",
            });
        }
        Ok(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{days_from_now, new_account, setup_db};
    use common::WithdrawInput;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_deposit_increments_balance_and_records_operation() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 0).await.unwrap();

        let operation = ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(10000, 2)))
            .await
            .unwrap();

        assert_eq!(operation.account_id, account.id);
        assert_eq!(operation.amount, Decimal::new(10000, 2));
        assert_eq!(operation.kind, operation::OperationKind::Deposit);
        assert_eq!(operation.status, operation::OperationStatus::Executed);
        assert!(operation.scheduled_at.is_none());

        let account = ledger.get_account(account.id).await.unwrap();
        assert_eq!(account.balance, Decimal::new(10000, 2)); // 100.00
    }

    #[tokio::test]
    async fn test_minimal_positive_deposit() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 10000).await.unwrap();

        ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(1, 2)))
            .await
            .unwrap();

        let account = ledger.get_account(account.id).await.unwrap();
        assert_eq!(account.balance, Decimal::new(10001, 2)); // 100.01
    }

    #[tokio::test]
    async fn test_invalid_amounts_rejected_without_mutation() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 10000).await.unwrap();

        for deposit in [
            DepositInput::new(Decimal::ZERO),
            DepositInput::new(Decimal::new(-500, 2)),
            DepositInput::default(), // absent amount
        ] {
            let err = ledger
                .execute_deposit(account.id, deposit)
                .await
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)));
        }

        let account = ledger.get_account(account.id).await.unwrap();
        assert_eq!(account.balance, Decimal::new(10000, 2));
        assert!(ledger
            .operations_for_account(account.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_deposit_into_missing_account_fails() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db);

        let err = ledger
            .execute_deposit(42, DepositInput::new(Decimal::new(100, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(42)));
    }

    #[tokio::test]
    async fn test_schedule_deposit_leaves_balance_untouched() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 10000).await.unwrap();

        let operation = ledger
            .schedule_deposit(
                account.id,
                DepositInput::new(Decimal::new(5000, 2)),
                days_from_now(1),
            )
            .await
            .unwrap();

        assert_eq!(operation.kind, operation::OperationKind::FutureDeposit);
        assert_eq!(operation.status, operation::OperationStatus::Scheduled);
        assert!(operation.scheduled_at.is_some());

        let account = ledger.get_account(account.id).await.unwrap();
        assert_eq!(account.balance, Decimal::new(10000, 2));
    }

    #[tokio::test]
    async fn test_schedule_deposit_rejects_past_and_present_instants() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 0).await.unwrap();

        for at in [days_from_now(-1), Utc::now().naive_utc()] {
            let err = ledger
                .schedule_deposit(account.id, DepositInput::new(Decimal::new(100, 2)), at)
                .await
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidDate(_)));
        }
    }

    #[tokio::test]
    async fn test_absent_description_gets_placeholder() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 0).await.unwrap();

        let operation = ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(100, 2)))
            .await
            .unwrap();
        assert_eq!(operation.description, common::DEFAULT_DESCRIPTION);

        let operation = ledger
            .execute_deposit(
                account.id,
                DepositInput::with_description(Decimal::new(100, 2), "Paycheck"),
            )
            .await
            .unwrap();
        assert_eq!(operation.description, "Paycheck");
    }

    #[tokio::test]
    async fn test_get_deposit_rejects_withdraw_family() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 10000).await.unwrap();

        let deposit = ledger
            .execute_deposit(account.id, DepositInput::new(Decimal::new(100, 2)))
            .await
            .unwrap();
        let withdraw = ledger
            .execute_withdraw(account.id, WithdrawInput::new(Decimal::new(100, 2)))
            .await
            .unwrap();

        let loaded = ledger.get_deposit(deposit.id).await.unwrap();
        assert_eq!(loaded.id, deposit.id);

        let err = ledger.get_deposit(withdraw.id).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::WrongOperationKind {
                expected: "deposit",
                ..
            }
        ));

        let err = ledger.get_deposit(999).await.unwrap_err();
        assert!(matches!(err, LedgerError::OperationNotFound(999)));
    }

    #[tokio::test]
    async fn test_scheduled_deposit_counts_as_deposit_family() {
        let db = setup_db().await.unwrap();
        let ledger = Ledger::new(db.clone());
        let account = new_account(&db, 0).await.unwrap();

        let scheduled = ledger
            .schedule_deposit(
                account.id,
                DepositInput::new(Decimal::new(100, 2)),
                days_from_now(2),
            )
            .await
            .unwrap();

        let loaded = ledger.get_deposit(scheduled.id).await.unwrap();
        assert_eq!(loaded.kind, operation::OperationKind::FutureDeposit);
    }
}
