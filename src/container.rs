use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::config::MailerConfig;

use crate::domain::gateways::mailer::MailerGateway;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::gateways::mailer::MailerGatewayImpl;
use crate::infrastructure::repositories::account::{
    AccountRepositoryImpl, AccountRepositoryMemory,
};

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        mailer_gateway: Arc<dyn MailerGateway>,
    ) -> Self {
        Container {
            account_service: Arc::new(AccountServiceImpl::new(
                account_repository,
                mailer_gateway,
            )),
        }
    }

    /// Accounts stored in SurrealDB.
    pub fn surrealdb(conn: Surreal<Client>, mailer: &MailerConfig) -> Self {
        Self::new(
            Arc::new(AccountRepositoryImpl::new(Arc::new(conn))),
            mailer_gateway(mailer),
        )
    }

    /// Accounts kept in process memory, lost on restart.
    pub fn memory(mailer: &MailerConfig) -> Self {
        Self::new(
            Arc::new(AccountRepositoryMemory::new()),
            mailer_gateway(mailer),
        )
    }
}

fn mailer_gateway(config: &MailerConfig) -> Arc<dyn MailerGateway> {
    Arc::new(MailerGatewayImpl::new(config.sender.as_str()))
}
