use super::*;

/// Tests that a created planet echoes every submitted field.
///
/// Expected: 201 Created with an assigned id
#[tokio::test]
async fn create_planet_echoes_fields() -> Result<(), TestError> {
    let app = test_app(test_state().await?);

    let (status, body) = send(
        app,
        Method::POST,
        "/planets",
        Some(json!({
            "name": "Tatooine",
            "description": "desert",
            "diameter": 10465,
            "orbital_period": 304,
            "terrain_type": "desert",
            "atmosphere": "arid",
            "population": 200000,
            "climate": "hot"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "Tatooine");
    assert_eq!(body["description"], "desert");
    assert_eq!(body["diameter"], 10465.0);
    assert_eq!(body["orbital_period"], 304);
    assert_eq!(body["terrain_type"], "desert");
    assert_eq!(body["atmosphere"], "arid");
    assert_eq!(body["population"], 200000);
    assert_eq!(body["climate"], "hot");

    Ok(())
}

/// Tests that the planet list returns planets in insertion order.
///
/// Expected: 200 OK with both planets
#[tokio::test]
async fn list_planets_in_id_order() -> Result<(), TestError> {
    let state = test_state().await?;
    let first = factory::create_planet(&state.db).await?;
    let second = factory::create_planet(&state.db).await?;

    let (status, body) = send(test_app(state), Method::GET, "/planets", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id as i64, second.id as i64]);

    Ok(())
}

/// Tests that a deleted planet can no longer be fetched.
///
/// Expected: 200 OK on delete, then 404 Not Found
#[tokio::test]
async fn deleted_planet_is_gone() -> Result<(), TestError> {
    let state = test_state().await?;
    let planet = factory::create_planet(&state.db).await?;
    let uri = format!("/planets/{}", planet.id);

    let (status, body) = send(test_app(state.clone()), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planet deleted successfully");

    let (status, body) = send(test_app(state), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}
