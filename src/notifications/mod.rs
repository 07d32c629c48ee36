mod templates;

pub use templates::{
    booking_notifications, contact_notification, shift_display, volunteer_notification,
};

use crate::domain::EmailAddress;
use crate::email_client::EmailClient;

/// A recipient/subject/body triple destined for delivery, with an optional per-message sender
/// identity override.
///
/// Messages are only ever constructed by the formatters from data that already passed validation,
/// and each one is consumed exactly once by the dispatcher.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    to: EmailAddress,
    subject: String,
    body: String,
    from_name: Option<String>,
    from_email: Option<EmailAddress>,
}

impl NotificationMessage {
    pub fn new(to: EmailAddress, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: body.into(),
            from_name: None,
            from_email: None,
        }
    }

    /// Override the configured sender identity for this one message.
    pub fn with_sender(mut self, name: impl Into<String>, email: EmailAddress) -> Self {
        self.from_name = Some(name.into());
        self.from_email = Some(email);
        self
    }

    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Whether a message made it to the transport. Used only for logging; delivery problems are
/// invisible to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    Failed,
}

impl DispatchOutcome {
    pub fn is_delivered(self) -> bool {
        self == Self::Delivered
    }
}

/// The default sender identity stamped on outgoing messages that carry no override.
pub struct SenderIdentity {
    pub name: String,
    pub email: EmailAddress,
}

/// The fixed recipient addresses, parsed from configuration at startup.
#[derive(Clone)]
pub struct NotificationRecipients {
    pub operations: EmailAddress,
    pub volunteers: EmailAddress,
}

/// The injected delivery capability: either the live HTTP client or the console fallback used in
/// local development and tests of everything that sits above it.
pub enum EmailTransport {
    Api(EmailClient),
    Console,
}

/// Sends formatted messages through whatever transport was injected at startup.
///
/// `dispatch` never raises: a visitor who submitted a valid form must not see an error because
/// email infrastructure happens to be unavailable.
pub struct NotificationDispatcher {
    transport: EmailTransport,
    sender: SenderIdentity,
}

impl NotificationDispatcher {
    pub fn new(transport: EmailTransport, sender: SenderIdentity) -> Self {
        Self { transport, sender }
    }

    #[tracing::instrument(
        name = "Dispatching a notification",
        skip(self, message),
        fields(recipient = %message.to(), subject = %message.subject())
    )]
    pub async fn dispatch(&self, message: &NotificationMessage) -> DispatchOutcome {
        let from_name = message.from_name.as_deref().unwrap_or(&self.sender.name);
        let from_email = message.from_email.as_ref().unwrap_or(&self.sender.email);
        match &self.transport {
            EmailTransport::Api(client) => {
                match client
                    .send_email(
                        from_name,
                        from_email,
                        &message.to,
                        &message.subject,
                        &message.body,
                    )
                    .await
                {
                    Ok(()) => DispatchOutcome::Delivered,
                    Err(error) => {
                        tracing::error!(
                            error.cause_chain = ?error,
                            error.message = %error,
                            "Failed to send notification email"
                        );
                        DispatchOutcome::Failed
                    }
                }
            }
            EmailTransport::Console => {
                // Simulated delivery: log the would-be message and report success, so form
                // handlers can be exercised without any email infrastructure.
                tracing::info!(
                    from = %format!("{from_name} <{from_email}>"),
                    to = %message.to,
                    subject = %message.subject,
                    body = %message.body,
                    "Would send email"
                );
                DispatchOutcome::Delivered
            }
        }
    }
}
