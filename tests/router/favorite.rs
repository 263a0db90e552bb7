use super::*;

/// Tests that adding the same planet twice lists it twice.
///
/// Expected: two 201 Created responses, then both entries in the favorites
#[tokio::test]
async fn duplicate_favorite_planet_is_listed_twice() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let planet = factory::create_planet(&state.db).await?;
    let uri = format!("/favorite/planet/{}?user_id={}", planet.id, user.id);

    let (first, _) = send(test_app(state.clone()), Method::POST, &uri, None).await;
    let (second, _) = send(test_app(state.clone()), Method::POST, &uri, None).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);

    let (status, body) = send(
        test_app(state),
        Method::GET,
        &format!("/users/favorites?user_id={}", user.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user.id);
    assert_eq!(body["favorites"]["planets"].as_array().unwrap().len(), 2);
    assert!(body["favorites"]["characters"].as_array().unwrap().is_empty());

    Ok(())
}

/// Tests that favorites list fully serialized characters.
///
/// Expected: 200 OK with the character's name in the favorites
#[tokio::test]
async fn favorites_include_character_details() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let character = factory::create_character(&state.db).await?;

    let (status, body) = send(
        test_app(state.clone()),
        Method::POST,
        &format!("/favorite/people/{}?user_id={}", character.id, user.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["character_id"], character.id);

    let (_, body) = send(
        test_app(state),
        Method::GET,
        &format!("/users/favorites?user_id={}", user.id),
        None,
    )
    .await;

    assert_eq!(body["favorites"]["characters"][0]["name"], character.name);

    Ok(())
}

/// Tests removing a favorite that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn remove_missing_favorite_is_not_found() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let character = factory::create_character(&state.db).await?;

    let (status, body) = send(
        test_app(state),
        Method::DELETE,
        &format!("/favorite/people/{}?user_id={}", character.id, user.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Favorite character not found");

    Ok(())
}

/// Tests the favorites listing without a `user_id`.
///
/// Expected: 400 Bad Request with a JSON error
#[tokio::test]
async fn favorites_without_user_id_is_bad_request() -> Result<(), TestError> {
    let app = test_app(test_state().await?);

    let (status, body) = send(app, Method::GET, "/users/favorites", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}
