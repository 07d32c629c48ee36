use super::schema::{Constraint, Schema};
use super::submission::FormSubmission;
use once_cell::sync::Lazy;

/// A contact enquiry, extracted from the raw submission. The phone number is the one optional
/// field; an empty value collapses to `None` and renders as "(Not provided)" downstream.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self {
            name: submission.text("name"),
            email: submission.text("email"),
            phone: submission.optional_text("phone"),
            subject: submission.text("subject"),
            message: submission.text("message"),
        }
    }
}

pub fn schema() -> &'static Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("contact")
            .field("name", vec![Constraint::required("Name is required")])
            .field(
                "email",
                vec![
                    Constraint::required("Email is required"),
                    Constraint::email("Please enter a valid email address"),
                ],
            )
            .field(
                "subject",
                vec![Constraint::required("Subject is required")],
            )
            .field(
                "message",
                vec![Constraint::required("Message is required")],
            )
    });
    &SCHEMA
}
