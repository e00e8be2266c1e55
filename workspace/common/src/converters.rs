//! Pure conversion functions between persistence entities and transport
//! records.
//!
//! One function per entity pair, no reflection and no hidden mapping
//! rules. Everything here is synchronous and side-effect free so the
//! transformations can be unit tested on their own.

use chrono::NaiveDateTime;
use model::entities::{account, operation};

use crate::records::{
    AccountRecord, BalanceRecord, OperationKind, OperationRecord, OperationStatus,
};

/// Converts a stored operation kind to its transport counterpart.
pub fn kind_to_record(kind: operation::OperationKind) -> OperationKind {
    match kind {
        operation::OperationKind::Deposit => OperationKind::Deposit,
        operation::OperationKind::Withdraw => OperationKind::Withdraw,
        operation::OperationKind::FutureDeposit => OperationKind::FutureDeposit,
        operation::OperationKind::FutureWithdraw => OperationKind::FutureWithdraw,
    }
}

/// Converts a stored operation status to its transport counterpart.
pub fn status_to_record(status: operation::OperationStatus) -> OperationStatus {
    match status {
        operation::OperationStatus::Executed => OperationStatus::Executed,
        operation::OperationStatus::Scheduled => OperationStatus::Scheduled,
    }
}

/// Converts an account entity to its transport record.
pub fn account_to_record(account: &account::Model) -> AccountRecord {
    AccountRecord {
        id: account.id,
        name: account.name.clone(),
        description: account.description.clone(),
        balance: account.balance,
    }
}

/// Converts an operation entity to its transport record.
pub fn operation_to_record(operation: &operation::Model) -> OperationRecord {
    OperationRecord {
        id: operation.id,
        account_id: operation.account_id,
        amount: operation.amount,
        description: operation.description.clone(),
        kind: kind_to_record(operation.kind),
        status: status_to_record(operation.status),
        scheduled_at: operation.scheduled_at,
        created_at: operation.created_at,
    }
}

/// Builds a balance record from an account entity.
///
/// `as_of` is `None` for a plain stored-balance read and `Some` when the
/// balance was projected against a target instant.
pub fn account_to_balance_record(
    account: &account::Model,
    as_of: Option<NaiveDateTime>,
) -> BalanceRecord {
    BalanceRecord {
        account_id: account.id,
        balance: account.balance,
        as_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample_account() -> account::Model {
        account::Model {
            id: 3,
            name: "Checking".to_string(),
            description: Some("Main account".to_string()),
            balance: Decimal::new(15000, 2), // 150.00
        }
    }

    fn sample_operation() -> operation::Model {
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        operation::Model {
            id: 11,
            account_id: 3,
            amount: Decimal::new(5000, 2), // 50.00
            description: "Rent".to_string(),
            kind: operation::OperationKind::FutureWithdraw,
            status: operation::OperationStatus::Scheduled,
            scheduled_at: Some(created + chrono::Duration::days(5)),
            created_at: created,
        }
    }

    #[test]
    fn test_account_to_record() {
        let account = sample_account();
        let record = account_to_record(&account);

        assert_eq!(record.id, account.id);
        assert_eq!(record.name, account.name);
        assert_eq!(record.description, account.description);
        assert_eq!(record.balance, account.balance);
    }

    #[test]
    fn test_operation_to_record() {
        let operation = sample_operation();
        let record = operation_to_record(&operation);

        assert_eq!(record.id, operation.id);
        assert_eq!(record.account_id, operation.account_id);
        assert_eq!(record.amount, operation.amount);
        assert_eq!(record.description, operation.description);
        assert_eq!(record.kind, OperationKind::FutureWithdraw);
        assert_eq!(record.status, OperationStatus::Scheduled);
        assert_eq!(record.scheduled_at, operation.scheduled_at);
        assert_eq!(record.created_at, operation.created_at);
    }

    #[test]
    fn test_kind_mapping_is_exhaustive() {
        let pairs = [
            (operation::OperationKind::Deposit, OperationKind::Deposit),
            (operation::OperationKind::Withdraw, OperationKind::Withdraw),
            (
                operation::OperationKind::FutureDeposit,
                OperationKind::FutureDeposit,
            ),
            (
                operation::OperationKind::FutureWithdraw,
                OperationKind::FutureWithdraw,
            ),
        ];
        for (entity_kind, record_kind) in pairs {
            assert_eq!(kind_to_record(entity_kind), record_kind);
        }
    }

    #[test]
    fn test_balance_record_as_of() {
        let account = sample_account();

        let stored = account_to_balance_record(&account, None);
        assert_eq!(stored.account_id, 3);
        assert_eq!(stored.balance, account.balance);
        assert!(stored.as_of.is_none());

        let as_of = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let projected = account_to_balance_record(&account, Some(as_of));
        assert_eq!(projected.as_of, Some(as_of));
    }
}
