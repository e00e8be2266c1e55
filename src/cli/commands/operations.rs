use anyhow::Result;
use chrono::NaiveDateTime;
use common::converters::operation_to_record;
use common::{DepositInput, WithdrawInput};
use ledger::Ledger;
use rust_decimal::Decimal;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn deposit(
    ledger: &Ledger,
    account_id: i32,
    amount: Decimal,
    description: Option<String>,
) -> Result<()> {
    let input = DepositInput {
        amount: Some(amount),
        description,
    };
    let operation = ledger.execute_deposit(account_id, input).await?;
    print_json(&operation_to_record(&operation))
}

pub async fn withdraw(
    ledger: &Ledger,
    account_id: i32,
    amount: Decimal,
    description: Option<String>,
) -> Result<()> {
    let input = WithdrawInput {
        amount: Some(amount),
        description,
    };
    let operation = ledger.execute_withdraw(account_id, input).await?;
    print_json(&operation_to_record(&operation))
}

pub async fn schedule_deposit(
    ledger: &Ledger,
    account_id: i32,
    amount: Decimal,
    at: NaiveDateTime,
    description: Option<String>,
) -> Result<()> {
    let input = DepositInput {
        amount: Some(amount),
        description,
    };
    let operation = ledger.schedule_deposit(account_id, input, at).await?;
    print_json(&operation_to_record(&operation))
}

pub async fn get_deposit(ledger: &Ledger, operation_id: i32) -> Result<()> {
    let operation = ledger.get_deposit(operation_id).await?;
    print_json(&operation_to_record(&operation))
}

pub async fn get_withdraw(ledger: &Ledger, operation_id: i32) -> Result<()> {
    let operation = ledger.get_withdraw(operation_id).await?;
    print_json(&operation_to_record(&operation))
}

pub async fn schedule_withdraw(
    ledger: &Ledger,
    account_id: i32,
    amount: Decimal,
    at: NaiveDateTime,
    description: Option<String>,
) -> Result<()> {
    let input = WithdrawInput {
        amount: Some(amount),
        description,
    };
    let operation = ledger.schedule_withdraw(account_id, input, at).await?;
    print_json(&operation_to_record(&operation))
}
