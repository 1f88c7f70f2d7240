//! HTTP surface for the squirrel registry.
//!
//! Axum owns the listener loop and request dispatch; everything specified
//! about the service lives in the handlers here: the five route/verb pairs,
//! the not-found-before-body-parse ordering, and the fixed 404 response
//! (which also serves as the fallback for unknown routes).

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::error::{DreyError, Result};
use crate::model::Record;
use crate::repo::SquirrelRepo;

/// Errors that escape a handler cross the framework boundary here: logged,
/// rendered as a plain 500. Handlers never catch repository or store
/// errors themselves.
impl IntoResponse for DreyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Build the squirrel API router over a repository.
pub fn router(repo: SquirrelRepo) -> Router {
    Router::new()
        .route("/squirrels", get(index).post(create))
        .route(
            "/squirrels/{id}",
            get(retrieve).put(update).patch(update).delete(remove),
        )
        .fallback(fallback)
        .with_state(repo)
}

/// Serve the router on an already-bound listener until the task is dropped
/// or a shutdown signal arrives. Taking the listener rather than an address
/// lets tests bind port 0 and learn the port first.
pub async fn serve(listener: TcpListener, repo: SquirrelRepo) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(addr = %addr, "Squirrel API listening");
    axum::serve(listener, router(repo))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Resolves on SIGINT, plus SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.expect("failed to listen for Ctrl+C");
    }
}

/// GET /squirrels -> 200, JSON array of every stored record.
async fn index(State(repo): State<SquirrelRepo>) -> Result<Response> {
    let squirrels = repo.list()?;
    json_response(&squirrels)
}

/// GET /squirrels/{id} -> 200 with the record, or the fixed 404.
async fn retrieve(State(repo): State<SquirrelRepo>, Path(id): Path<String>) -> Result<Response> {
    match existing(repo.get(&id)?) {
        Some(squirrel) => json_response(&squirrel),
        None => Ok(not_found()),
    }
}

/// POST /squirrels -> 201, empty body, no content-type header.
async fn create(State(repo): State<SquirrelRepo>, body: Bytes) -> Result<Response> {
    let (name, size) = request_fields(&body)?;
    repo.create(&name, &size)?;
    Ok(StatusCode::CREATED.into_response())
}

/// PUT/PATCH /squirrels/{id} -> 204, or the fixed 404.
///
/// Existence is checked before the body is parsed: an unknown id answers
/// 404 even when the body is absent or malformed.
async fn update(
    State(repo): State<SquirrelRepo>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response> {
    if existing(repo.get(&id)?).is_none() {
        return Ok(not_found());
    }
    let (name, size) = request_fields(&body)?;
    repo.update(&id, &name, &size)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// DELETE /squirrels/{id} -> 204, or the fixed 404.
async fn remove(State(repo): State<SquirrelRepo>, Path(id): Path<String>) -> Result<Response> {
    if existing(repo.get(&id)?).is_none() {
        return Ok(not_found());
    }
    repo.delete(&id)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn fallback() -> Response {
    not_found()
}

/// An empty record is treated the same as no record at all.
fn existing(record: Option<Record>) -> Option<Record> {
    record.filter(|r| !r.is_empty())
}

/// Extract the required `name` and `size` fields from a JSON object body.
/// A malformed body or a missing field is an error, never defaulted.
fn request_fields(body: &[u8]) -> Result<(String, String)> {
    let fields: Record = serde_json::from_slice(body).map_err(DreyError::Serialization)?;
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or(DreyError::MissingField("name"))?;
    let size = fields
        .get("size")
        .and_then(Value::as_str)
        .ok_or(DreyError::MissingField("size"))?;
    Ok((name.to_string(), size.to_string()))
}

fn json_response<T: serde::Serialize>(body: &T) -> Result<Response> {
    let bytes = serde_json::to_vec(body).map_err(DreyError::Serialization)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}

/// The one 404 shape the service produces, byte for byte.
fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "404 Not Found",
    )
        .into_response()
}
