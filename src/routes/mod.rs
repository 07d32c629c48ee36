mod booking;
mod contact;
mod health_check;
mod horses;
mod volunteer;

pub use booking::*;
pub use contact::*;
pub use health_check::*;
pub use horses::*;
pub use volunteer::*;

use crate::forms::ValidationErrors;
use actix_web::HttpResponse;

/// The failure contract shared by every form handler: per-field messages plus the submitted data
/// echoed back so the caller can re-populate the form.
pub(in crate::routes) fn validation_failure(
    errors: &ValidationErrors,
    data: &impl serde::Serialize,
) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "errors": errors,
        "data": data,
    }))
}

pub(in crate::routes) fn submission_accepted() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
