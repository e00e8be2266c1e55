use anyhow::Result;
use ledger::Ledger;
use sea_orm::Database;

/// Default database when DATABASE_URL is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://stoneledger.db";

/// Connects to the database and wraps it in a ledger engine.
pub async fn connect_ledger(database_url: &str) -> Result<Ledger> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;
    Ok(Ledger::new(db))
}
