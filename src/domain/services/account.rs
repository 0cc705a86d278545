use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, SignupInput, SignupOutput};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn signup(&self, input: SignupInput) -> AppResult<SignupOutput>;
    async fn get_account(&self, account_id: &str) -> AppResult<Account>;
}
