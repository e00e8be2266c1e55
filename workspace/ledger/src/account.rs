//! Account pass-through CRUD.
//!
//! Nothing here touches the balance except `create_account`'s opening
//! amount; all later balance mutation goes through the deposit, withdraw
//! and projection calls.

use model::entities::account;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::{debug, info};

use crate::error::Result;
use crate::{store, Ledger};

impl Ledger {
    /// Creates a new account with an opening balance.
    pub async fn create_account(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        opening_balance: Decimal,
    ) -> Result<account::Model> {
        let account = account::ActiveModel {
            name: Set(name.into()),
            description: Set(description),
            balance: Set(opening_balance),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(
            "Created account id={} with opening balance {}",
            account.id, account.balance
        );
        Ok(account)
    }

    /// Loads an account by id.
    pub async fn get_account(&self, account_id: i32) -> Result<account::Model> {
        store::find_account(&self.db, account_id).await
    }

    /// Lists all accounts, ordered by id.
    pub async fn list_accounts(&self) -> Result<Vec<account::Model>> {
        let accounts = account::Entity::find()
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Found {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Updates the descriptive fields of an account.
    ///
    /// The balance is deliberately not updatable here.
    pub async fn update_account(
        &self,
        account_id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<account::Model> {
        let account = store::find_account(&self.db, account_id).await?;

        let mut active: account::ActiveModel = account.into();
        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(description) = description {
            active.description = Set(Some(description));
        }
        let account = active.update(&self.db).await?;

        debug!("Updated account id={}", account.id);
        Ok(account)
    }

    /// Deletes an account; its operations go with it (FK cascade).
    pub async fn delete_account(&self, account_id: i32) -> Result<account::Model> {
        let account = store::find_account(&self.db, account_id).await?;
        account.clone().delete(&self.db).await?;

        info!("Deleted account id={}", account.id);
        Ok(account)
    }
}
