use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub enum FindByCol {
    Id(String),
    Email(String),
}

impl FindByCol {
    pub fn value(self) -> String {
        match self {
            Self::Id(id) => id,
            Self::Email(email) => email,
        }
    }
}

impl std::fmt::Display for FindByCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(_) => write!(f, "account_id"),
            Self::Email(_) => write!(f, "email"),
        }
    }
}

/// Account directory.
///
/// `save_account` is insert-only. Implementations must reject a second
/// account with the same email with [`RepositoryError::Conflict`], the
/// lookup done before inserting is not enough on its own.
///
/// [`RepositoryError::Conflict`]: super::repository::RepositoryError::Conflict
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn get_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;
    async fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>>;
    async fn save_account(&self, account: Account) -> RepositoryResult<()>;
}
