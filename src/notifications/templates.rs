use super::NotificationMessage;
use crate::domain::EmailAddress;
use crate::forms::{BookingForm, ContactForm, VolunteerForm};
use crate::payments::TransactionId;

/// Shown in place of any optional field the visitor left blank.
const NOT_PROVIDED: &str = "(Not provided)";

/// The fixed session time window printed on both booking emails.
const SESSION_TIME: &str = "9:30 AM - 12:00 PM";

/// Map a shift code to its human-readable display string. Unknown codes pass through unchanged
/// rather than breaking the email over a label we have not catalogued.
pub fn shift_display(code: &str) -> &str {
    match code {
        "mon_am" => "Monday AM (8:00-12:00)",
        "mon_pm" => "Monday PM (1:00-5:00)",
        "thu_am" => "Thursday AM (8:00-12:00)",
        "fri_am" => "Friday AM (8:00-12:00)",
        "sat_am" => "Saturday AM (8:00-12:00)",
        "sun_am" => "Sunday AM (8:00-12:00)",
        other => other,
    }
}

fn format_availability(shifts: &[String]) -> String {
    shifts
        .iter()
        .map(|shift| shift_display(shift))
        .collect::<Vec<_>>()
        .join("\n  • ")
}

/// Build the operations notification for a contact enquiry.
pub fn contact_notification(
    form: &ContactForm,
    operations: &EmailAddress,
) -> NotificationMessage {
    let subject = format!("Contact: {} - {}", form.subject, form.name);
    let body = format!(
        r#"New Contact Form Submission
==========================

Subject: {subject_line}

From:
Name: {name}
Email: {email}
Phone: {phone}

Message:
--------------------------
{message}
--------------------------

---
This email was automatically sent from the website contact form."#,
        subject_line = form.subject,
        name = form.name,
        email = form.email,
        phone = form.phone.as_deref().unwrap_or(NOT_PROVIDED),
        message = form.message,
    );
    NotificationMessage::new(operations.clone(), subject, body)
}

/// Build the volunteers-inbox notification for a new application.
pub fn volunteer_notification(
    form: &VolunteerForm,
    volunteers: &EmailAddress,
) -> NotificationMessage {
    let subject = format!(
        "New Volunteer Application: {} {}",
        form.first_name, form.last_name
    );
    let body = format!(
        r#"New Volunteer Application Received
===================================

Name: {first_name} {last_name}
Email: {email}
Phone: {phone}

About Them:
{bio}

Availability:
  • {availability}

How They Found Us: {referral_source}

---
This email was automatically sent from the website volunteer form."#,
        first_name = form.first_name,
        last_name = form.last_name,
        email = form.email,
        phone = form.phone,
        bio = form.bio.as_deref().unwrap_or(NOT_PROVIDED),
        availability = format_availability(&form.availability),
        referral_source = form.referral_source.as_deref().unwrap_or(NOT_PROVIDED),
    );
    NotificationMessage::new(volunteers.clone(), subject, body)
}

/// Build both booking notifications from one submission: the operational summary for the admin
/// inbox and the confirmation/receipt for the submitter. Both embed the same transaction id.
pub fn booking_notifications(
    form: &BookingForm,
    submitter: EmailAddress,
    transaction_id: &TransactionId,
    operations: &EmailAddress,
) -> [NotificationMessage; 2] {
    let admin_subject = format!("New Booking: {} - {}", form.name, form.date);
    let admin_body = format!(
        r#"New Booking Session
==================

Guest: {name}
Email: {email}
Phone: {phone}

Date: {date}
Time: {time}
Guests: {guests}
Total Paid: ${total_amount}
Transaction ID: {transaction_id}

---
This email was automatically sent from the booking system."#,
        name = form.name,
        email = form.email,
        phone = form.phone,
        date = form.date,
        time = SESSION_TIME,
        guests = form.guests,
        total_amount = form.total_amount,
        transaction_id = transaction_id,
    );

    let confirmation_subject = format!("Booking Confirmation: {}", form.date);
    let confirmation_body = format!(
        r#"Booking Confirmation - The Horse Project Santa Barbara
======================================================

Dear {name},

Thank you for booking your "Play With Rescued Horses" session! We are excited to welcome you to the sanctuary.

Here are your booking details:
Date: {date}
Time: {time}
Guests: {guests}
Total Paid: ${total_amount}
Booking Ref: {transaction_id}

Address:
[Sanctuary Address Placeholder]
Santa Barbara, CA

What to bring:
- Closed-toe shoes (mandatory)
- Water bottle
- Sunscreen/Hat
- Curiosity and an open heart!

If you need to reschedule, please just reply to this email. We understand that plans change and we're happy to find another time that works for you!

See you soon!

The Horse Project Team
thehorseprojectsantabarbara.com"#,
        name = form.name,
        date = form.date,
        time = SESSION_TIME,
        guests = form.guests,
        total_amount = form.total_amount,
        transaction_id = transaction_id,
    );

    [
        NotificationMessage::new(operations.clone(), admin_subject, admin_body),
        NotificationMessage::new(submitter, confirmation_subject, confirmation_body),
    ]
}
