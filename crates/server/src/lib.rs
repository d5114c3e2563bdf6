use axum::{Json, http::StatusCode, response::IntoResponse};

use serde::Serialize;
pub use server::{router, run_with_listener, spawn_with_listener};

mod compliance;
mod server;
mod statistics;
mod transactions;

#[derive(Debug)]
pub enum ServerError {
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<axum::extract::rejection::QueryRejection> for ServerError {
    fn from(value: axum::extract::rejection::QueryRejection) -> Self {
        tracing::debug!("rejected query string: {value}");
        Self::Generic(value.body_text())
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generic_body_is_json_error() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "bad" }));
    }
}
