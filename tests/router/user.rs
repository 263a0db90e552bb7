use super::*;

/// Tests that user responses never expose the password.
///
/// Expected: 201 Created without a `password` key
#[tokio::test]
async fn created_user_has_no_password_field() -> Result<(), TestError> {
    let app = test_app(test_state().await?);

    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({
            "first_name": "Padme",
            "last_name": "Amidala",
            "email": "padme@naboo.test",
            "password": "queen-of-naboo",
            "is_active": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "padme@naboo.test");
    assert!(body.get("password").is_none());
    assert!(body["joined_date"].is_string());

    Ok(())
}

/// Tests listing users after one was seeded.
///
/// Expected: 200 OK with no `password` key on any entry
#[tokio::test]
async fn listed_users_have_no_password_field() -> Result<(), TestError> {
    let state = test_state().await?;
    factory::create_user(&state.db).await?;

    let (status, body) = send(test_app(state), Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password").is_none());

    Ok(())
}
