//! Shared helpers for the engine tests.

use chrono::{NaiveDateTime, Utc};
use migration::{Migrator, MigratorTrait};
use model::entities::{account, operation};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, Set};

pub type Result<T> = std::result::Result<T, DbErr>;

pub async fn setup_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    // Enable foreign keys
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

/// Creates a test account holding `cents / 100` as its balance.
pub async fn new_account(db: &DatabaseConnection, cents: i64) -> Result<account::Model> {
    account::ActiveModel {
        name: Set("Test account".to_string()),
        description: Set(Some("Account for ledger testing".to_string())),
        balance: Set(Decimal::new(cents, 2)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts an operation row directly, bypassing the engine.
pub async fn new_operation(
    db: &DatabaseConnection,
    account: &account::Model,
    cents: i64,
    kind: operation::OperationKind,
    status: operation::OperationStatus,
    scheduled_at: Option<NaiveDateTime>,
) -> Result<operation::Model> {
    operation::ActiveModel {
        account_id: Set(account.id),
        amount: Set(Decimal::new(cents, 2)),
        description: Set("Test operation".to_string()),
        kind: Set(kind),
        status: Set(status),
        scheduled_at: Set(scheduled_at),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// The current instant shifted by a number of days, for scheduling tests.
pub fn days_from_now(days: i64) -> NaiveDateTime {
    Utc::now().naive_utc() + chrono::Duration::days(days)
}
