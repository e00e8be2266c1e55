use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A bank account holding a running balance.
///
/// The balance is only ever mutated by the ledger engine, either when an
/// immediate operation executes or when a scheduled operation is
/// reconciled against a query date.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Signed running balance. Equals the signed sum of all `Executed`
    /// operation amounts for this account (deposit kinds positive,
    /// withdraw kinds negative).
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub balance: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// An account owns zero or more operations.
    #[sea_orm(has_many = "super::operation::Entity")]
    Operation,
}

impl Related<super::operation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
