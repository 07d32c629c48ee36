use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> String {
    "firstName=Jane&lastName=Doe&email=jane%40example.com&phone=8055550199\
     &availability=mon_am&availability=sat_am"
        .to_string()
}

#[tokio::test]
async fn a_valid_application_notifies_the_volunteers_inbox() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_form("/join", valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let emails = app.sent_emails().await;
    assert_eq!(1, emails.len());
    assert_eq!(
        "volunteers@thehorseprojectsantabarbara.com",
        emails[0]["To"]
    );
    assert_eq!(
        "New Volunteer Application: Jane Doe",
        emails[0]["Subject"]
    );
    let text_body = emails[0]["TextBody"].as_str().unwrap();
    assert!(text_body
        .contains("  • Monday AM (8:00-12:00)\n  • Saturday AM (8:00-12:00)"));
    assert!(text_body.contains("About Them:\n(Not provided)"));
}

#[tokio::test]
async fn an_application_without_any_shift_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let body = "firstName=Jane&lastName=Doe&email=jane%40example.com&phone=8055550199";
    let response = app.post_form("/join", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        "Please select at least one shift",
        payload["errors"]["availability"]
    );
}

#[tokio::test]
async fn a_short_phone_number_is_rejected() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let body = "firstName=Jane&lastName=Doe&email=jane%40example.com&phone=555&availability=mon_am";
    let response = app.post_form("/join", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        "Phone number must be at least 10 digits",
        payload["errors"]["phone"]
    );
}

#[tokio::test]
async fn all_validation_errors_surface_in_one_response() {
    // Arrange
    let app = spawn_app().await;

    // Act - only the first name is filled in
    let response = app.post_form("/join", "firstName=Jane").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    let errors = payload["errors"].as_object().unwrap();
    assert_eq!(4, errors.len());
    assert!(errors.contains_key("lastName"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("phone"));
    assert!(errors.contains_key("availability"));
}

#[tokio::test]
async fn the_selected_shifts_are_echoed_back_on_failure() {
    // Arrange
    let app = spawn_app().await;

    // Act - phone too short, shifts selected
    let body = "firstName=Jane&lastName=Doe&email=jane%40example.com&phone=555\
                &availability=mon_am&availability=sun_am";
    let response = app.post_form("/join", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        serde_json::json!(["mon_am", "sun_am"]),
        payload["data"]["availability"]
    );
}
