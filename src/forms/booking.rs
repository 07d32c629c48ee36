use super::schema::{Constraint, Schema, ValidationErrors};
use super::submission::FormSubmission;
use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;

/// Error shown when the requested date falls outside the published session days.
const SESSION_DAY_MESSAGE: &str =
    "Sessions are only available on Friday, Saturday, and Sunday.";

/// A booking request, extracted from the raw submission with the numeric coercions applied.
///
/// `guests` and `total_amount` deliberately fall back to `1` and `0.0` instead of rejecting the
/// submission when they fail to parse; the rest of the pipeline treats the coerced values as the
/// submission of record and echoes them back on validation failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub guests: u32,
    pub total_amount: f64,
}

impl BookingForm {
    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self {
            name: submission.text("name"),
            email: submission.text("email"),
            phone: submission.text("phone"),
            date: submission.text("date"),
            guests: submission
                .value("guests")
                .and_then(|value| value.trim().parse::<u32>().ok())
                .filter(|guests| *guests > 0)
                .unwrap_or(1),
            total_amount: submission
                .value("totalAmount")
                .and_then(|value| value.trim().parse::<f64>().ok())
                .unwrap_or(0.0),
        }
    }
}

pub fn schema() -> &'static Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("booking")
            .field("name", vec![Constraint::required("Name is required")])
            .field(
                "email",
                vec![
                    Constraint::required("Email is required"),
                    Constraint::email("Please enter a valid email address"),
                ],
            )
            .field(
                "phone",
                vec![Constraint::required("Phone number is required")],
            )
            .field("date", vec![Constraint::required("Please select a date")])
    });
    &SCHEMA
}

/// The one booking rule that cannot live in the field schema: sessions only run on Friday,
/// Saturday and Sunday, judged on the submitted date's UTC day-of-week. A date that does not
/// parse fails the same way, since it certainly does not fall on an open day.
///
/// Only called once schema validation has passed; a submission that already failed the schema
/// never sees this message.
pub fn check_session_date(date: &str) -> Result<(), ValidationErrors> {
    let weekday = NaiveDate::parse_from_str(date, "%Y-%m-%d").map(|date| date.weekday());
    match weekday {
        Ok(Weekday::Fri | Weekday::Sat | Weekday::Sun) => Ok(()),
        _ => Err(ValidationErrors::singleton("date", SESSION_DAY_MESSAGE)),
    }
}
