//! Statement reads: pure projections over an account's operation
//! history. Nothing here mutates state.

use chrono::NaiveDateTime;
use model::entities::operation;

use crate::error::Result;
use crate::{store, Ledger};

impl Ledger {
    /// All operations for the account, oldest first.
    pub async fn operations_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<operation::Model>> {
        store::find_account(&self.db, account_id).await?;
        store::operations_for_account(&self.db, account_id).await
    }

    /// The operations scheduled at exactly `at`.
    ///
    /// Equality match, not a range: immediate operations never appear
    /// here, and neither do scheduled operations due at any other
    /// instant.
    pub async fn operations_for_account_at(
        &self,
        account_id: i32,
        at: NaiveDateTime,
    ) -> Result<Vec<operation::Model>> {
        store::find_account(&self.db, account_id).await?;
        store::operations_for_account_at(&self.db, account_id, at).await
    }
}
