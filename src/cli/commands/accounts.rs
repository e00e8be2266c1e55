use anyhow::Result;
use common::converters::account_to_record;
use ledger::Ledger;
use rust_decimal::Decimal;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn create(
    ledger: &Ledger,
    name: String,
    description: Option<String>,
    opening_balance: Decimal,
) -> Result<()> {
    let account = ledger
        .create_account(name, description, opening_balance)
        .await?;
    print_json(&account_to_record(&account))
}

pub async fn list(ledger: &Ledger) -> Result<()> {
    let accounts = ledger.list_accounts().await?;
    let records: Vec<_> = accounts.iter().map(account_to_record).collect();
    print_json(&records)
}

pub async fn update(
    ledger: &Ledger,
    account_id: i32,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let account = ledger.update_account(account_id, name, description).await?;
    print_json(&account_to_record(&account))
}

pub async fn delete(ledger: &Ledger, account_id: i32) -> Result<()> {
    let account = ledger.delete_account(account_id).await?;
    print_json(&account_to_record(&account))
}
