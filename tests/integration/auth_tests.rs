use crate::common::{api_failure, client_for};
use gbdx_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn password_form() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("grant_type".to_string(), "password".to_string()),
        Matcher::UrlEncoded("username".to_string(), "jane".to_string()),
        Matcher::UrlEncoded("password".to_string(), "s3cret".to_string()),
    ])
}

#[tokio::test]
async fn test_validate_password_posts_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/v1/oauth/token")
        .match_header("authorization", Matcher::Missing)
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded".to_string()),
        )
        .match_body(password_form())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fresh","token_type":"Bearer","expires_in":3600}"#)
        .create_async()
        .await;

    let client = client_for(&server, "unused");
    let body = client
        .auth
        .validate_password("jane", "s3cret")
        .await
        .unwrap();

    assert_eq!(body.as_json().unwrap()["access_token"], "fresh");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_installs_access_token() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/auth/v1/oauth/token")
        .match_body(password_form())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fresh","token_type":"Bearer"}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/users/v1/users/me")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"u1"}"#)
        .create_async()
        .await;

    let client = client_for(&server, "");
    let token = client.login("jane", "s3cret").await.unwrap();

    assert_eq!(token.access_token, "fresh");
    assert_eq!(client.token().await, "fresh");
    client.users.me().await.unwrap();
    me.assert_async().await;
}

#[tokio::test]
async fn test_login_with_bad_credentials_keeps_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/v1/oauth/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let client = client_for(&server, "old");
    let failure = api_failure(client.login("jane", "wrong").await.unwrap_err());

    assert_eq!(failure.code, 400);
    assert_eq!(failure.response, json!({"error": "invalid_grant"}));
    assert_eq!(client.token().await, "old");
}

#[tokio::test]
async fn test_login_with_unexpected_body_fails_to_decode() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/v1/oauth/token")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("ok")
        .create_async()
        .await;

    let client = client_for(&server, "old");
    let err = client.login("jane", "s3cret").await.unwrap_err();

    assert!(matches!(err, AppError::Deserialization(_)));
    assert_eq!(client.token().await, "old");
}
