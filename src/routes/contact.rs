use super::{submission_accepted, validation_failure};
use crate::forms::{contact, ContactForm, FormSubmission};
use crate::notifications::{contact_notification, NotificationDispatcher, NotificationRecipients};
use crate::utils::e400;
use actix_web::{web, HttpResponse};

/// Handle a contact form submission: parse, validate, then notify the operations inbox. The
/// dispatch outcome never reaches the visitor.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(body, dispatcher, recipients)
)]
pub async fn contact(
    body: web::Bytes,
    dispatcher: web::Data<NotificationDispatcher>,
    recipients: web::Data<NotificationRecipients>,
) -> Result<HttpResponse, actix_web::Error> {
    let submission = FormSubmission::from_urlencoded(&body).map_err(e400)?;
    let form = ContactForm::from_submission(&submission);

    if let Err(errors) = contact::schema().validate(&submission) {
        return Ok(validation_failure(&errors, &form));
    }

    let message = contact_notification(&form, &recipients.operations);
    dispatcher.dispatch(&message).await;

    Ok(submission_accepted())
}
