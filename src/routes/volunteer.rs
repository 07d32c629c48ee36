use super::{submission_accepted, validation_failure};
use crate::forms::{volunteer, FormSubmission, VolunteerForm};
use crate::notifications::{
    volunteer_notification, NotificationDispatcher, NotificationRecipients,
};
use crate::utils::e400;
use actix_web::{web, HttpResponse};

/// Handle a volunteer application: parse, validate, then notify the volunteers inbox.
#[tracing::instrument(
    name = "Handling a volunteer application",
    skip(body, dispatcher, recipients)
)]
pub async fn join(
    body: web::Bytes,
    dispatcher: web::Data<NotificationDispatcher>,
    recipients: web::Data<NotificationRecipients>,
) -> Result<HttpResponse, actix_web::Error> {
    let submission = FormSubmission::from_urlencoded(&body).map_err(e400)?;
    let form = VolunteerForm::from_submission(&submission);

    if let Err(errors) = volunteer::schema().validate(&submission) {
        return Ok(validation_failure(&errors, &form));
    }

    let message = volunteer_notification(&form, &recipients.volunteers);
    dispatcher.dispatch(&message).await;

    Ok(submission_accepted())
}
