use super::schema::{Constraint, Schema};
use once_cell::sync::Lazy;

/// The supported donation cadences.
pub static FREQUENCIES: [&str; 2] = ["one-time", "monthly"];

/// Rule set for the donation form. Donations are validated server-side like every other form,
/// but no notification is sent for them: the payment provider owns the receipt.
pub fn schema() -> &'static Schema {
    static SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new("donation")
            .field(
                "amount",
                vec![
                    Constraint::required("Please enter a donation amount"),
                    Constraint::numeric("Please enter a valid amount"),
                    Constraint::min_number(1.0, "Minimum donation is $1"),
                    Constraint::max_number(10_000.0, "Maximum donation is $10,000"),
                ],
            )
            .field(
                "frequency",
                vec![
                    Constraint::required("Please choose a donation frequency"),
                    Constraint::one_of(&FREQUENCIES, "Please choose a donation frequency"),
                ],
            )
    });
    &SCHEMA
}
