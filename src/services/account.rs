use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    gateways::mailer::MailerGateway,
    models::account::{Account, SignupInput, SignupOutput},
    repositories::account::AccountRepository,
    services::account::AccountService,
    validation::{validate_car_plate, validate_cpf, validate_email, validate_name},
};

use async_trait::async_trait;

pub const WELCOME_SUBJECT: &str = "Bem-vindo ao nosso sistema!";
pub const WELCOME_BODY: &str = "...";

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
    mailer: Arc<dyn MailerGateway>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>, mailer: Arc<dyn MailerGateway>) -> Self {
        Self { repository, mailer }
    }

    async fn is_account(&self, email: &str) -> AppResult<bool> {
        Ok(self.repository.get_account_by_email(email).await?.is_some())
    }

    /// Sends the welcome mail on a detached task. The outcome never reaches the caller.
    fn welcome(&self, email: String) {
        let mailer = Arc::clone(&self.mailer);

        tokio::spawn(async move {
            if let Err(error) = mailer.send(&email, WELCOME_SUBJECT, WELCOME_BODY).await {
                tracing::warn!(%error, "welcome mail was not sent");
            }
        });
    }
}

fn validate(input: &SignupInput) -> AppResult<()> {
    if !validate_name(&input.name) {
        return Err(AppError::InvalidName());
    }

    if !validate_email(&input.email) {
        return Err(AppError::InvalidEmail());
    }

    if !validate_cpf(&input.cpf) {
        return Err(AppError::InvalidCpf());
    }

    if input.is_driver && !input.car_plate.as_deref().is_some_and(validate_car_plate) {
        return Err(AppError::InvalidCarPlate());
    }

    Ok(())
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(
        name = "signup",
        skip(self, input),
        fields(is_passenger = input.is_passenger, is_driver = input.is_driver),
        err(Display)
    )]
    async fn signup(&self, input: SignupInput) -> AppResult<SignupOutput> {
        // Early exit only; the directory's unique email constraint is what
        // actually prevents duplicates under concurrent signups.
        if self.is_account(&input.email).await? {
            return Err(AppError::DuplicatedAccount());
        }

        validate(&input)?;

        let account = Account::create(SignupInput {
            name: input.name.trim().to_owned(),
            ..input
        });
        let account_id = account.id().to_owned();
        let email = account.email().to_owned();

        self.repository.save_account(account).await?;

        tracing::info!(%account_id, "account created");

        self.welcome(email);

        Ok(SignupOutput { account_id })
    }

    async fn get_account(&self, account_id: &str) -> AppResult<Account> {
        match self.repository.get_account_by_id(account_id).await? {
            Some(account) => Ok(account),
            None => Err(AppError::NotFound("Account not found")),
        }
    }
}
