use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_enquiry_sends_one_notification_to_the_operations_address() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let body = "name=Jane%20Doe&email=jane%40example.com&subject=Tour&message=Can%20we%20visit%3F";
    let response = app.post_form("/contact", body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(serde_json::json!({ "success": true }), payload);

    let emails = app.sent_emails().await;
    assert_eq!(1, emails.len());
    assert_eq!("thehorseprojectsb@gmail.com", emails[0]["To"]);
    assert_eq!("Contact: Tour - Jane Doe", emails[0]["Subject"]);
    let text_body = emails[0]["TextBody"].as_str().unwrap();
    assert!(text_body.contains("Phone: (Not provided)"));
    assert!(text_body.contains("Can we visit?"));
}

#[tokio::test]
async fn missing_required_fields_are_each_reported_with_the_submission_echoed() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // We assert that no notification goes out for an invalid submission!
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            "email=jane%40example.com&subject=Tour&message=Hi",
            "name",
            "Name is required",
        ),
        (
            "name=Jane&subject=Tour&message=Hi",
            "email",
            "Email is required",
        ),
        (
            "name=Jane&email=jane%40example.com&message=Hi",
            "subject",
            "Subject is required",
        ),
        (
            "name=Jane&email=jane%40example.com&subject=Tour",
            "message",
            "Message is required",
        ),
    ];

    for (body, field, expected_message) in test_cases {
        // Act
        let response = app.post_form("/contact", body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was missing {field}."
        );
        let payload: serde_json::Value = response.json().await.unwrap();
        assert_eq!(expected_message, payload["errors"][field]);
    }
}

#[tokio::test]
async fn the_submitted_data_is_echoed_back_on_validation_failure() {
    // Arrange
    let app = spawn_app().await;

    // Act - subject intentionally missing
    let response = app
        .post_form(
            "/contact",
            "name=Jane%20Doe&email=jane%40example.com&message=Hi",
        )
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!("Jane Doe", payload["data"]["name"]);
    assert_eq!("jane@example.com", payload["data"]["email"]);
    assert_eq!("Hi", payload["data"]["message"]);
}

#[tokio::test]
async fn a_delivery_failure_is_invisible_to_the_submitter() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let body = "name=Jane%20Doe&email=jane%40example.com&subject=Tour&message=Can%20we%20visit%3F";
    let response = app.post_form("/contact", body).await;

    // Assert - the transport blew up, the visitor still sees success
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(serde_json::json!({ "success": true }), payload);
}
