//! Withdraw operations: immediate execution, future scheduling, and
//! withdraw-family lookup.
//!
//! Sufficiency for a *scheduled* withdraw is checked against the current
//! balance at schedule time, never against the balance projected for the
//! scheduled instant. Projection does not re-validate. This mirrors the
//! documented system behavior; see the tests at the bottom.

use chrono::{NaiveDateTime, Utc};
use common::WithdrawInput;
use model::entities::{account, operation};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::{info, instrument};

use crate::error::{LedgerError, Result};
use crate::{store, validate, Ledger};

impl Ledger {
    /// Executes an immediate withdrawal: decrements the balance and
    /// records an `Executed` `Withdraw` operation, atomically.
    ///
    /// Check order: account existence, amount validity, funds
    /// sufficiency.
    #[instrument(skip(self, withdraw), fields(account_id = account_id))]
    pub async fn execute_withdraw(
        &self,
        account_id: i32,
        withdraw: WithdrawInput,
    ) -> Result<operation::Model> {
        let txn = self.db.begin().await?;

        let account = store::find_account(&txn, account_id).await?;
        let amount = validate::require_positive_amount(withdraw.amount)?;
        validate::require_sufficient_funds(account.balance, amount)?;

        let balance = account.balance - amount;
        let mut active: account::ActiveModel = account.into();
        active.balance = Set(balance);
        active.update(&txn).await?;

        let operation = store::insert_operation(
            &txn,
            account_id,
            amount,
            withdraw.description,
            operation::OperationKind::Withdraw,
            operation::OperationStatus::Executed,
            None,
        )
        .await?;

        txn.commit().await?;

        info!(
            "Withdrew {} from account_id={}, new balance {}",
            amount, account_id, balance
        );
        Ok(operation)
    }

    /// Schedules a withdrawal for a future instant.
    ///
    /// The balance is not touched here. Sufficiency is validated against
    /// the balance as it stands now.
    #[instrument(skip(self, withdraw), fields(account_id = account_id, at = %at))]
    pub async fn schedule_withdraw(
        &self,
        account_id: i32,
        withdraw: WithdrawInput,
        at: NaiveDateTime,
    ) -> Result<operation::Model> {
        let txn = self.db.begin().await?;

        let account = store::find_account(&txn, account_id).await?;
        let amount = validate::require_positive_amount(withdraw.amount)?;
        validate::require_future_instant(at, Utc::now().naive_utc())?;
        validate::require_sufficient_funds(account.balance, amount)?;

        let operation = store::insert_operation(
            &txn,
            account_id,
            amount,
            withdraw.description,
            operation::OperationKind::FutureWithdraw,
            operation::OperationStatus::Scheduled,
            Some(at),
        )
        .await?;

        txn.commit().await?;

        info!(
            "Scheduled withdrawal of {} for account_id={} at {}",
            amount, account_id, at
        );
        Ok(operation)
    }

    /// Loads a withdraw-family operation (`Withdraw` or
    /// `FutureWithdraw`) by id.
    pub async fn get_withdraw(&self, operation_id: i32) -> Result<operation::Model> {
        let operation = store::find_operation(&self.db, operation_id).await?;
        if !operation.kind.is_withdraw() {
            return Err(LedgerError::WrongOperationKind {
                id: operation_id,
                expected: "withdraw",
            });
        }
        Ok(operation)
    }
}
