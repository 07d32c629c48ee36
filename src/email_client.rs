use crate::domain::EmailAddress;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// HTTP client for the transactional email delivery API.
///
/// This is the *live* transport behind the notification dispatcher; the console fallback never
/// touches it. One instance is built at startup and shared across all requests.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("Failed to build the HTTP client")]
    Build(#[source] reqwest::Error),
    #[error("The email delivery request failed")]
    Request(#[from] reqwest::Error),
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, EmailClientError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EmailClientError::Build)?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email through the delivery API",
        skip(self, body)
    )]
    pub async fn send_email(
        &self,
        from_name: &str,
        from_email: &EmailAddress,
        recipient: &EmailAddress,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailClientError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: format!("{from_name} <{from_email}>"),
            to: recipient.as_ref(),
            subject,
            text_body: body,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Lifetimes keep the request body borrowing from the caller: no clones for what is immediately
/// serialized and dropped. The sender is the one owned field, assembled as `Name <address>`.
#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: String,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}
