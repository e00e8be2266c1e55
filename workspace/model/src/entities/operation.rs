use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::account;

/// The kind of a ledger operation.
///
/// The sign of an operation is implied by its kind; `amount` is always a
/// positive magnitude. `Future*` kinds are recorded with a scheduled
/// instant and only touch the balance at reconciliation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OperationKind {
    #[sea_orm(string_value = "Deposit")]
    Deposit,
    #[sea_orm(string_value = "Withdraw")]
    Withdraw,
    #[sea_orm(string_value = "FutureDeposit")]
    FutureDeposit,
    #[sea_orm(string_value = "FutureWithdraw")]
    FutureWithdraw,
}

impl OperationKind {
    /// True for `Deposit` and `FutureDeposit`.
    pub fn is_deposit(self) -> bool {
        matches!(self, Self::Deposit | Self::FutureDeposit)
    }

    /// True for `Withdraw` and `FutureWithdraw`.
    pub fn is_withdraw(self) -> bool {
        matches!(self, Self::Withdraw | Self::FutureWithdraw)
    }
}

/// The lifecycle status of a ledger operation.
///
/// `Scheduled` transitions to `Executed` exactly once, when reconciliation
/// determines the scheduled instant has arrived. The transition never
/// reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OperationStatus {
    #[sea_orm(string_value = "Executed")]
    Executed,
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
}

/// A single ledger operation tied to an account.
///
/// Immutable after creation except for the one-way `status` transition.
/// The engine never deletes operations; removal only happens through the
/// account cascade.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The owning account.
    pub account_id: i32,
    /// Positive magnitude of the operation.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    pub description: String,
    pub kind: OperationKind,
    pub status: OperationStatus,
    /// The instant at or after which a future-kinded operation becomes
    /// eligible for execution. `None` for immediate operations.
    pub scheduled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "account::Entity",
        from = "Column::AccountId",
        to = "account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
