use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create accounts table
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string(Accounts::Name))
                    .col(string_null(Accounts::Description))
                    .col(decimal(Accounts::Balance).decimal_len(16, 4))
                    .to_owned(),
            )
            .await?;

        // Create operations table
        manager
            .create_table(
                Table::create()
                    .table(Operations::Table)
                    .if_not_exists()
                    .col(pk_auto(Operations::Id))
                    .col(integer(Operations::AccountId))
                    .col(decimal(Operations::Amount).decimal_len(16, 4))
                    .col(string(Operations::Description))
                    .col(string_len(Operations::Kind, 20))
                    .col(string_len(Operations::Status, 20))
                    .col(date_time_null(Operations::ScheduledAt))
                    .col(date_time(Operations::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_operation_account")
                            .from(Operations::Table, Operations::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Statement reads and projection always filter by account
        manager
            .create_index(
                Index::create()
                    .name("idx_operations_account_id")
                    .table(Operations::Table)
                    .col(Operations::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Operations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Name,
    Description,
    Balance,
}

#[derive(DeriveIden)]
enum Operations {
    Table,
    Id,
    AccountId,
    Amount,
    Description,
    Kind,
    Status,
    ScheduledAt,
    CreatedAt,
}
