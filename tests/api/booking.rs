use crate::helpers::{extract_transaction_id, spawn_app};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn sunday_booking_body() -> String {
    // 2024-01-07 is a Sunday.
    "name=Jane%20Doe&email=jane%40example.com&phone=8055550199&date=2024-01-07\
     &guests=2&totalAmount=150"
        .to_string()
}

#[tokio::test]
async fn a_weekend_booking_sends_the_admin_summary_and_the_submitter_receipt() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_form("/book", sunday_booking_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(serde_json::json!({ "success": true }), payload);

    let emails = app.sent_emails().await;
    assert_eq!(2, emails.len());

    let admin = &emails[0];
    assert_eq!("thehorseprojectsb@gmail.com", admin["To"]);
    assert_eq!("New Booking: Jane Doe - 2024-01-07", admin["Subject"]);
    let admin_body = admin["TextBody"].as_str().unwrap();
    assert!(admin_body.contains("Time: 9:30 AM - 12:00 PM"));
    assert!(admin_body.contains("Guests: 2"));
    assert!(admin_body.contains("Total Paid: $150"));

    let confirmation = &emails[1];
    assert_eq!("jane@example.com", confirmation["To"]);
    assert_eq!("Booking Confirmation: 2024-01-07", confirmation["Subject"]);
    let confirmation_body = confirmation["TextBody"].as_str().unwrap();
    assert!(confirmation_body.contains("Dear Jane Doe,"));
    assert!(confirmation_body.contains("[Sanctuary Address Placeholder]"));
}

#[tokio::test]
async fn both_booking_emails_embed_the_same_mock_transaction_id() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_form("/book", sunday_booking_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let emails = app.sent_emails().await;
    let admin_id = extract_transaction_id(emails[0]["TextBody"].as_str().unwrap());
    let confirmation_id = extract_transaction_id(emails[1]["TextBody"].as_str().unwrap());
    assert!(admin_id.starts_with("MOCK_"));
    assert_eq!(admin_id, confirmation_id);
}

#[tokio::test]
async fn a_weekday_booking_is_rejected_and_nothing_is_dispatched() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // No payment, no emails for a rejected date
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act - 2024-01-02 is a Tuesday
    let body = "name=Jane%20Doe&email=jane%40example.com&phone=8055550199&date=2024-01-02";
    let response = app.post_form("/book", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        "Sessions are only available on Friday, Saturday, and Sunday.",
        payload["errors"]["date"]
    );
}

#[tokio::test]
async fn schema_errors_take_precedence_over_the_session_day_rule() {
    // Arrange
    let app = spawn_app().await;

    // Act - date missing entirely; the day-of-week rule must not run
    let body = "name=Jane%20Doe&email=jane%40example.com&phone=8055550199";
    let response = app.post_form("/book", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!("Please select a date", payload["errors"]["date"]);
}

#[tokio::test]
async fn unparseable_numeric_fields_fall_back_to_their_defaults() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let body = "name=Jane%20Doe&email=jane%40example.com&phone=8055550199&date=2024-01-07\
                &guests=several&totalAmount=lots";
    let response = app.post_form("/book", body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let emails = app.sent_emails().await;
    let admin_body = emails[0]["TextBody"].as_str().unwrap();
    assert!(admin_body.contains("Guests: 1"));
    assert!(admin_body.contains("Total Paid: $0"));
}

#[tokio::test]
async fn the_coerced_values_are_echoed_back_on_validation_failure() {
    // Arrange
    let app = spawn_app().await;

    // Act - Tuesday date, so validation fails after coercion
    let body = "name=Jane%20Doe&email=jane%40example.com&phone=8055550199&date=2024-01-02\
                &guests=notanumber&totalAmount=150";
    let response = app.post_form("/book", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(1, payload["data"]["guests"]);
    assert_eq!(150.0, payload["data"]["totalAmount"]);
    assert_eq!("2024-01-02", payload["data"]["date"]);
}
