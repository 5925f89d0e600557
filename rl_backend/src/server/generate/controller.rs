use crate::error::{Error, ResultAPIStream};
use crate::server::app_state::AppState;
use crate::server::http_server::REQUEST_TIMEOUT;
use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::Response;
use futures_util::StreamExt;
use rl_core::server::payload::generate_text_request::GenerateTextRequest;
use std::sync::Arc;
use tracing::error;

/// Relay handler: forwards the message list to the provider and streams
/// the reply back as plain text, fragments in provider emission order.
pub async fn generate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateTextRequest>, JsonRejection>,
) -> ResultAPIStream {
    let Json(payload) = payload?;

    let fragments = state
        .gemini
        .stream_generate_content(&payload.messages)
        .await?;

    // The status line is committed once streaming starts; a mid-stream
    // provider failure or the 30s ceiling terminates the body.
    let deadline = Box::pin(tokio::time::sleep(REQUEST_TIMEOUT));
    let stream = fragments.take_until(deadline).map(|fragment| {
        fragment.map_err(|err| {
            error!("Generation stream interrupted: {err}");
            Error::from(err)
        })
    });
    let body = Body::from_stream(stream);

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body)?;
    Ok(response)
}
