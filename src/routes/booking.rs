use super::{submission_accepted, validation_failure};
use crate::domain::EmailAddress;
use crate::forms::{booking, BookingForm, FormSubmission, ValidationErrors};
use crate::notifications::{
    booking_notifications, NotificationDispatcher, NotificationRecipients,
};
use crate::payments::MockPaymentClient;
use crate::utils::e400;
use actix_web::{web, HttpResponse};

/// Handle a booking submission.
///
/// The full pipeline: parse, schema validation, session-day business rule, mock payment, then
/// format and dispatch the admin/submitter pair in order. Delivery failures are logged by the
/// dispatcher and never reach the response: a paid booking does not error because an email
/// bounced.
#[tracing::instrument(
    name = "Handling a booking submission",
    skip(body, dispatcher, recipients, payment_client)
)]
pub async fn book(
    body: web::Bytes,
    dispatcher: web::Data<NotificationDispatcher>,
    recipients: web::Data<NotificationRecipients>,
    payment_client: web::Data<MockPaymentClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let submission = FormSubmission::from_urlencoded(&body).map_err(e400)?;
    let form = BookingForm::from_submission(&submission);

    if let Err(errors) = booking::schema().validate(&submission) {
        return Ok(validation_failure(&errors, &form));
    }
    if let Err(errors) = booking::check_session_date(&form.date) {
        return Ok(validation_failure(&errors, &form));
    }

    // The schema already vetted the shape, so this parse only fails if the two validators ever
    // disagree; surface it as a plain field error rather than a 500.
    let submitter = match EmailAddress::parse(form.email.clone()) {
        Ok(address) => address,
        Err(_) => {
            let errors =
                ValidationErrors::singleton("email", "Please enter a valid email address");
            return Ok(validation_failure(&errors, &form));
        }
    };

    let transaction_id = payment_client.process_payment(form.total_amount).await;

    let messages =
        booking_notifications(&form, submitter, &transaction_id, &recipients.operations);
    for message in &messages {
        dispatcher.dispatch(message).await;
    }

    Ok(submission_accepted())
}
