use super::schema::{Constraint, Schema};
use super::submission::FormSubmission;
use once_cell::sync::Lazy;

/// The fixed set of shift codes a volunteer can sign up for.
pub static SHIFTS: [&str; 6] = ["mon_am", "mon_pm", "thu_am", "fri_am", "sat_am", "sun_am"];

/// A volunteer application, extracted from the raw submission. `availability` carries every
/// selected shift code in submission order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub availability: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
}

impl VolunteerForm {
    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self {
            first_name: submission.text("firstName"),
            last_name: submission.text("lastName"),
            email: submission.text("email"),
            phone: submission.text("phone"),
            bio: submission.optional_text("bio"),
            availability: submission.values("availability").to_vec(),
            orientation_date: submission.optional_text("orientationDate"),
            referral_source: submission.optional_text("referralSource"),
        }
    }
}

pub fn schema() -> &'static Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("volunteer")
            .field(
                "firstName",
                vec![Constraint::required("First name is required")],
            )
            .field(
                "lastName",
                vec![Constraint::required("Last name is required")],
            )
            .field(
                "email",
                vec![
                    Constraint::required("Email is required"),
                    Constraint::email("Please enter a valid email address"),
                ],
            )
            .field(
                "phone",
                vec![
                    Constraint::required("Phone number is required"),
                    Constraint::min_length(10, "Phone number must be at least 10 digits"),
                ],
            )
            .field(
                "bio",
                vec![Constraint::max_length(
                    500,
                    "Bio must be 500 characters or less",
                )],
            )
            .field(
                "availability",
                vec![
                    Constraint::min_selections(1, "Please select at least one shift"),
                    Constraint::one_of(&SHIFTS, "Please choose shifts from the published schedule"),
                ],
            )
    });
    &SCHEMA
}
