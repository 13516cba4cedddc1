//! # Response Envelope
//!
//! Every task-status response uses the same four-field JSON body:
//!
//! ```json
//! {"message":"Successful","status":200,"data":{"state":"done"},"error":null}
//! ```
//!
//! `status` mirrors the HTTP status code. `error` is the failure's display text,
//! or `null`. The body ends with a single newline.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use std::fmt::Display;
use tracing::error;

pub const MESSAGE_SUCCESS: &str = "Successful";
pub const MESSAGE_INVALID_TASK_ID: &str = "Invalid task id";
pub const MESSAGE_FETCH_FAILED: &str = "Status fetch failed";

/// Uniform JSON wrapper for task-status responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T> {
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// 200 envelope carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            message: MESSAGE_SUCCESS.to_string(),
            status: StatusCode::OK,
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope with no data; `error` is rendered with `Display`
    pub fn failure(status: StatusCode, message: impl Into<String>, error: impl Display) -> Self {
        Self {
            message: message.into(),
            status,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// Serialized body, newline-terminated
    pub fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        let mut body = serde_json::to_vec(self)?;
        body.push(b'\n');
        Ok(body)
    }
}

impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        match self.to_body() {
            Ok(body) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                error!(error = %e, message = %self.message, "Failed to serialize response envelope");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("value cannot be represented"))
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec()
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let data: BTreeMap<String, String> =
            [("progress".to_string(), "100".to_string())].into_iter().collect();
        let response = ResponseEnvelope::success(data).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = body_bytes(response).await;
        assert_eq!(body.last(), Some(&b'\n'));
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "{\"message\":\"Successful\",\"status\":200,\"data\":{\"progress\":\"100\"},\"error\":null}\n"
        );
    }

    #[tokio::test]
    async fn test_failure_envelope_renders_error_as_string() {
        let response = ResponseEnvelope::<()>::failure(
            StatusCode::BAD_REQUEST,
            MESSAGE_INVALID_TASK_ID,
            "invalid character",
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Invalid task id",
                "status": 400,
                "data": null,
                "error": "invalid character"
            })
        );
    }

    #[tokio::test]
    async fn test_empty_data_is_an_object() {
        let response = ResponseEnvelope::success(BTreeMap::<String, String>::new()).into_response();
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["data"], json!({}));
        assert_eq!(body["error"], Value::Null);
    }

    #[tokio::test]
    async fn test_serialization_failure_is_bare_500() {
        let response = ResponseEnvelope::success(Unserializable).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        assert!(body_bytes(response).await.is_empty());
    }
}
