use crate::helpers::spawn_app;

#[tokio::test]
async fn the_horse_listing_includes_the_derived_fields() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/horses", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let horses: Vec<serde_json::Value> = response.json().await.unwrap();
    assert!(!horses.is_empty());
    for horse in &horses {
        let status = horse["status"].as_str().unwrap();
        assert_eq!(status == "Available", horse["isAdoptable"]);
        assert_eq!(status == "Sanctuary", horse["isSanctuary"]);
        let age = horse["age"].as_i64().unwrap();
        let expected_display = if age == 1 {
            "1 year old".to_string()
        } else {
            format!("{age} years old")
        };
        assert_eq!(expected_display, horse["ageDisplay"]);
    }
}

#[tokio::test]
async fn sanctuary_residents_are_present_in_the_listing() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/horses", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    let horses: Vec<serde_json::Value> = response.json().await.unwrap();
    assert!(horses
        .iter()
        .any(|horse| horse["status"] == "Sanctuary" && horse["sponsorshipTier"].is_string()));
}
