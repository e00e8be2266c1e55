use anyhow::Result;
use chrono::NaiveDateTime;
use common::converters::{account_to_balance_record, operation_to_record};
use ledger::Ledger;
use tracing::warn;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shows the stored balance, or projects it against `as_of`.
///
/// Projection permanently executes any scheduled operation that has
/// become due; this is the ledger's only reconciliation trigger.
pub async fn show(ledger: &Ledger, account_id: i32, as_of: Option<NaiveDateTime>) -> Result<()> {
    match as_of {
        None => {
            let account = ledger.get_account(account_id).await?;
            print_json(&account_to_balance_record(&account, None))
        }
        Some(as_of) => {
            let projection = ledger.project_balance(account_id, as_of).await?;
            if !projection.reconciled.is_empty() {
                warn!(
                    "Projection executed {} scheduled operation(s)",
                    projection.reconciled.len()
                );
            }
            print_json(&account_to_balance_record(&projection.account, Some(as_of)))
        }
    }
}

/// Lists an account's operations, optionally only those scheduled at
/// exactly `at`.
pub async fn statement(ledger: &Ledger, account_id: i32, at: Option<NaiveDateTime>) -> Result<()> {
    let operations = match at {
        None => ledger.operations_for_account(account_id).await?,
        Some(at) => ledger.operations_for_account_at(account_id, at).await?,
    };
    let records: Vec<_> = operations.iter().map(operation_to_record).collect();
    print_json(&records)
}
