//! Store-query helpers for the ledger engine.
//!
//! These are generic over [`ConnectionTrait`] so the same lookups run
//! both inside a mutating transaction and on a plain connection for pure
//! reads.

use chrono::{NaiveDateTime, Utc};
use model::entities::{account, operation};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, instrument, trace};

use crate::error::{LedgerError, Result};

/// Loads an account by id, failing with `AccountNotFound` when absent.
#[instrument(skip(conn), fields(account_id = account_id))]
pub async fn find_account<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
) -> Result<account::Model> {
    trace!("Loading account {}", account_id);

    account::Entity::find_by_id(account_id)
        .one(conn)
        .await?
        .ok_or(LedgerError::AccountNotFound(account_id))
}

/// Loads an operation by id, failing with `OperationNotFound` when absent.
#[instrument(skip(conn), fields(operation_id = operation_id))]
pub async fn find_operation<C: ConnectionTrait>(
    conn: &C,
    operation_id: i32,
) -> Result<operation::Model> {
    trace!("Loading operation {}", operation_id);

    operation::Entity::find_by_id(operation_id)
        .one(conn)
        .await?
        .ok_or(LedgerError::OperationNotFound(operation_id))
}

/// Records a new operation row.
///
/// An absent description falls back to the caller-facing placeholder.
/// This must run on the same connection (transaction) as the balance
/// mutation it belongs to.
pub async fn insert_operation<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
    amount: Decimal,
    description: Option<String>,
    kind: operation::OperationKind,
    status: operation::OperationStatus,
    scheduled_at: Option<NaiveDateTime>,
) -> Result<operation::Model> {
    let operation = operation::ActiveModel {
        account_id: Set(account_id),
        amount: Set(amount),
        description: Set(description.unwrap_or_else(|| common::DEFAULT_DESCRIPTION.to_string())),
        kind: Set(kind),
        status: Set(status),
        scheduled_at: Set(scheduled_at),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    debug!(
        "Recorded operation id={} kind={:?} status={:?} amount={} for account_id={}",
        operation.id, operation.kind, operation.status, operation.amount, account_id
    );

    Ok(operation)
}

/// Gets all operations for the account, regardless of status.
///
/// The projection pass relies on the lack of a status filter: it has to
/// see scheduled and executed operations alike.
#[instrument(skip(conn), fields(account_id = account_id))]
pub async fn operations_for_account<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
) -> Result<Vec<operation::Model>> {
    trace!("Getting operations for account_id={}", account_id);

    let operations = operation::Entity::find()
        .filter(operation::Column::AccountId.eq(account_id))
        .order_by_asc(operation::Column::Id)
        .all(conn)
        .await?;

    debug!(
        "Found {} operations for account_id={}",
        operations.len(),
        account_id
    );

    Ok(operations)
}

/// Gets the operations for the account scheduled at exactly the given
/// instant.
///
/// This matches on equality of `scheduled_at`, not a range, so immediate
/// operations (which carry no schedule) never appear here.
#[instrument(skip(conn), fields(account_id = account_id, at = %at))]
pub async fn operations_for_account_at<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
    at: NaiveDateTime,
) -> Result<Vec<operation::Model>> {
    trace!(
        "Getting operations for account_id={} scheduled at {}",
        account_id, at
    );

    let operations = operation::Entity::find()
        .filter(
            Condition::all()
                .add(operation::Column::AccountId.eq(account_id))
                .add(operation::Column::ScheduledAt.eq(at)),
        )
        .order_by_asc(operation::Column::Id)
        .all(conn)
        .await?;

    debug!(
        "Found {} operations for account_id={} at {}",
        operations.len(),
        account_id,
        at
    );

    for op in &operations {
        trace!(
            "Operation: id={}, kind={:?}, status={:?}, amount={}",
            op.id, op.kind, op.status, op.amount
        );
    }

    Ok(operations)
}
