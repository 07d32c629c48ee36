pub mod booking;
pub mod contact;
pub mod donation;
mod schema;
mod submission;
pub mod volunteer;

pub use booking::BookingForm;
pub use contact::ContactForm;
pub use schema::{Constraint, Schema, ValidationErrors};
pub use submission::FormSubmission;
pub use volunteer::VolunteerForm;
