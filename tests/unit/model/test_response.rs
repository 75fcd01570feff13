use gbdx_client::error::AppError;
use gbdx_client::model::auth::TokenResponse;
use gbdx_client::model::response::ResponseBody;
use serde_json::{Value, json};

#[test]
fn test_response_body_accessors() {
    let json = ResponseBody::Json(json!({"id": 1}));
    assert_eq!(json.as_json(), Some(&json!({"id": 1})));
    assert!(json.as_text().is_none());

    let text = ResponseBody::Text("ok".to_string());
    assert_eq!(text.as_text(), Some("ok"));
    assert!(text.clone().into_json().is_none());

    assert!(ResponseBody::Unreadable.is_unreadable());
}

#[test]
fn test_response_body_display() {
    assert_eq!(ResponseBody::Json(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    assert_eq!(ResponseBody::Text("hello".to_string()).to_string(), "hello");
}

#[test]
fn test_response_body_serializes_as_bare_payload() {
    assert_eq!(
        serde_json::to_value(ResponseBody::Json(json!({"id": "u1"}))).unwrap(),
        json!({"id": "u1"})
    );
    assert_eq!(
        serde_json::to_value(ResponseBody::Text("x".to_string())).unwrap(),
        json!("x")
    );
    assert_eq!(
        serde_json::to_value(ResponseBody::Unreadable).unwrap(),
        Value::Null
    );
}

#[test]
fn test_decode_token_response() {
    let body = ResponseBody::Json(json!({"access_token": "abc", "token_type": "Bearer"}));
    let token: TokenResponse = body.decode().unwrap();
    assert_eq!(token.access_token, "abc");
}

#[test]
fn test_decode_wrong_shape_fails() {
    let body = ResponseBody::Json(json!({"token": "abc"}));
    assert!(matches!(
        body.decode::<TokenResponse>(),
        Err(AppError::Deserialization(_))
    ));
}

#[test]
fn test_decode_unreadable_fails() {
    assert!(matches!(
        ResponseBody::Unreadable.decode::<TokenResponse>(),
        Err(AppError::Deserialization(_))
    ));
}
