use crate::common::create_test_config;
use mockito::{Matcher, Server};
use petfinder_client::transport::http_client::{PetfinderHttpClient, PetfinderHttpClientImpl};
use reqwest::Method;
use serde_json::json;

const TOKEN_BODY: &str =
    r#"{"token_type": "Bearer", "expires_in": 3600, "access_token": "abc123"}"#;

#[tokio::test]
async fn authenticate_success_wraps_the_token_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth2/token")
        .match_body(Matcher::JsonString(
            r#"{"grant_type": "client_credentials", "client_id": "test_api_key", "client_secret": "test_api_secret"}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let client = PetfinderHttpClientImpl::new(create_test_config(&server.url()));
    let response = client.authenticate().await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.data().unwrap()["access_token"], json!("abc123"));

    let token = client.auth().token().await.expect("token should be stored");
    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert!(!token.is_expired());

    mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_success_attaches_bearer_to_later_requests() {
    let mut server = Server::new_async().await;
    let _token_mock = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;
    let animals_mock = server
        .mock("GET", "/animals")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(r#"{"animals": [], "pagination": {"current_page": 1, "total_pages": 1}}"#)
        .create_async()
        .await;

    let client = PetfinderHttpClientImpl::new(create_test_config(&server.url()));
    client.authenticate().await.unwrap();

    let response = client
        .request(Method::GET, "animals", None, None)
        .await
        .unwrap();

    assert!(response.is_success());
    animals_mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_failure_returns_failure_and_sets_no_header() {
    let mut server = Server::new_async().await;
    let _token_mock = server
        .mock("POST", "/oauth2/token")
        .with_status(401)
        .with_body(r#"{"title": "Unauthorized"}"#)
        .create_async()
        .await;
    // Later request must go out without any authorization header.
    let animals_mock = server
        .mock("GET", "/animals")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;

    let client = PetfinderHttpClientImpl::new(create_test_config(&server.url()));
    let response = client.authenticate().await.unwrap();

    assert!(!response.is_success());
    let failure = response.failure().unwrap();
    assert_eq!(failure.status_code, 401);
    assert_eq!(
        failure.message,
        "Unauthorized request, please check your credentials."
    );
    assert!(client.auth().token().await.is_none());

    // Unauthenticated calls still reach the upstream and fail there.
    let later = client
        .request(Method::GET, "animals", None, None)
        .await
        .unwrap();
    assert!(!later.is_success());

    animals_mock.assert_async().await;
}
