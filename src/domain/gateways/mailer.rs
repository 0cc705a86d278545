use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("mail to {to} could not be delivered: {reason}")]
    Delivery { to: String, reason: String },
}

#[async_trait]
pub trait MailerGateway: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError>;
}
