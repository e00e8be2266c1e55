//! Balance projection and scheduled-operation reconciliation.
//!
//! Projecting a balance against a target instant is the system's only
//! reconciliation trigger: there is no background scheduler. A dated
//! balance read folds every due scheduled operation into the balance,
//! flips it to `Executed`, and commits both in one transaction. The read
//! therefore has a permanent side effect; callers that want a pure read
//! use [`Ledger::current_balance`] or the statement queries instead.

use chrono::NaiveDateTime;
use model::entities::{account, operation};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::{store, Ledger};

/// The outcome of a balance projection.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceProjection {
    /// The account with its post-reconciliation balance.
    pub account: account::Model,
    /// The operations flipped to `Executed` by this projection.
    pub reconciled: Vec<operation::Model>,
}

impl BalanceProjection {
    pub fn balance(&self) -> Decimal {
        self.account.balance
    }
}

impl Ledger {
    /// Returns the stored balance without reconciling anything.
    pub async fn current_balance(&self, account_id: i32) -> Result<Decimal> {
        Ok(store::find_account(&self.db, account_id).await?.balance)
    }

    /// Projects the account balance as of `as_of`, executing every due
    /// scheduled operation along the way.
    ///
    /// An operation is due when it is still `Scheduled` and its
    /// `scheduled_at` is at or before `as_of`. Due `FutureDeposit`s add
    /// their amount, due `FutureWithdraw`s subtract theirs; both flip to
    /// `Executed`. Executed operations and operations scheduled after
    /// `as_of` are left untouched, which makes a repeated projection at
    /// the same instant a no-op. Iteration order is irrelevant since the
    /// contributions commute.
    #[instrument(skip(self), fields(account_id = account_id, as_of = %as_of))]
    pub async fn project_balance(
        &self,
        account_id: i32,
        as_of: NaiveDateTime,
    ) -> Result<BalanceProjection> {
        let txn = self.db.begin().await?;

        let account = store::find_account(&txn, account_id).await?;
        let operations = store::operations_for_account(&txn, account_id).await?;

        let mut balance = account.balance;
        let mut reconciled = Vec::new();

        for op in operations {
            let Some(due_at) = op.scheduled_at else {
                continue;
            };
            if op.status != operation::OperationStatus::Scheduled || due_at > as_of {
                continue;
            }

            match op.kind {
                operation::OperationKind::FutureDeposit => balance += op.amount,
                operation::OperationKind::FutureWithdraw => balance -= op.amount,
                // Immediate kinds never carry a schedule; skip defensively
                // rather than corrupt the balance.
                _ => continue,
            }

            debug!(
                "Executing scheduled operation id={} kind={:?} amount={} due {}",
                op.id, op.kind, op.amount, due_at
            );

            let mut active: operation::ActiveModel = op.into();
            active.status = Set(operation::OperationStatus::Executed);
            reconciled.push(active.update(&txn).await?);
        }

        let account = if reconciled.is_empty() {
            account
        } else {
            let mut active: account::ActiveModel = account.into();
            active.balance = Set(balance);
            active.update(&txn).await?
        };

        txn.commit().await?;

        info!(
            "Projected balance {} for account_id={} as of {} ({} operations reconciled)",
            account.balance,
            account_id,
            as_of,
            reconciled.len()
        );

        Ok(BalanceProjection {
            account,
            reconciled,
        })
    }
}
