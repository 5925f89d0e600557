use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPIStream = std::result::Result<Response, crate::error::Error>;
pub type ResultAPI = std::result::Result<Json<Value>, crate::error::Error>;
pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] rl_core::error::ErrorCore),

    #[error(transparent)]
    Gemini(#[from] rl_gemini::error::Error),

    #[error("{0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Failed to build response: {0}")]
    Http(#[from] http::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Provider-side failure, the relay itself is fine.
            Error::Gemini(rl_gemini::error::Error::MissingApiKey) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Gemini(_) => StatusCode::BAD_GATEWAY,
            Error::JsonRejection(rejection) => rejection.status(),
            Error::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("Error occurred: {:?}", self);
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
