use async_trait::async_trait;

use crate::domain::gateways::mailer::{MailerError, MailerGateway};

/// Hands mail over to the logging pipeline instead of an SMTP relay.
pub struct MailerGatewayImpl {
    sender: String,
}

impl MailerGatewayImpl {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl MailerGateway for MailerGatewayImpl {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        if to.trim().is_empty() {
            return Err(MailerError::Delivery {
                to: to.to_owned(),
                reason: "empty recipient".to_owned(),
            });
        }

        tracing::info!(
            from = %self.sender,
            to,
            subject,
            body_length = body.len(),
            "mail dispatched"
        );

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send() {
        let mailer = MailerGatewayImpl::new("no-reply@ride.local");

        assert!(
            mailer
                .send("john.doe@gmail.com", "Bem-vindo ao nosso sistema!", "...")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_send_without_recipient() {
        let mailer = MailerGatewayImpl::new("no-reply@ride.local");

        let result = mailer.send(" ", "subject", "body").await;

        assert!(matches!(result, Err(MailerError::Delivery { .. })));
    }
}
