use super::*;

/// Tests that the root lists every registered endpoint.
///
/// Expected: 200 OK with sorted endpoints including the docs
#[tokio::test]
async fn root_lists_endpoints() -> Result<(), TestError> {
    let app = test_app(test_state().await?);

    let (status, body) = send(app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();

    for path in [
        "/docs",
        "/favorite/people/{people_id}",
        "/favorite/planet/{planet_id}",
        "/people",
        "/people/{people_id}",
        "/planets",
        "/planets/{planet_id}",
        "/political_groups/{group_id}/members",
        "/users/favorites",
        "/vehicles/{vehicle_id}",
    ] {
        assert!(endpoints.contains(&path), "missing {path}");
    }

    let mut sorted = endpoints.clone();
    sorted.sort();
    assert_eq!(endpoints, sorted);

    Ok(())
}
