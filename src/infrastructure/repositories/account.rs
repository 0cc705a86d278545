use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;
use tokio::sync::Mutex;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::{AccountRepository, FindByCol};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {column} = type::string($value) LIMIT 1"
            ))
            .bind(("table", ACCOUNT))
            .bind(("value", column.value()))
            .await?
            .take(0)?;

        Ok(account.map(Into::into))
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn get_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        self.find_one(FindByCol::Email(email.to_owned())).await
    }

    async fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        self.find_one(FindByCol::Id(id.to_owned())).await
    }

    async fn save_account(&self, account: Account) -> RepositoryResult<()> {
        let _: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(account))
            .await?;

        Ok(())
    }
}

/// In-process directory. Lookups and inserts share one lock, so the
/// uniqueness check on insert cannot race with another insert.
#[derive(Default)]
pub struct AccountRepositoryMemory {
    accounts: Mutex<Vec<Account>>,
}

impl AccountRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryMemory {
    async fn get_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|a| a.email() == email).cloned())
    }

    async fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|a| a.id() == id).cloned())
    }

    async fn save_account(&self, account: Account) -> RepositoryResult<()> {
        let mut accounts = self.accounts.lock().await;

        if accounts.iter().any(|a| a.email() == account.email()) {
            return Err(RepositoryError::Conflict(format!(
                "email {} is already registered",
                account.email()
            )));
        }

        if accounts.iter().any(|a| a.id() == account.id()) {
            return Err(RepositoryError::Conflict(format!(
                "account {} already exists",
                account.id()
            )));
        }

        accounts.push(account);

        Ok(())
    }
}
