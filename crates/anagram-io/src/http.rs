use std::path::PathBuf;
use std::sync::Arc;

use anagram_core::{DictionaryIndex, find};
use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Read-only index handed to every request handler
pub type SharedIndex = Arc<DictionaryIndex>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory served for every route the API does not claim
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

/// JSON array of the anagrams of `letters`, `[]` when there are none
pub fn find_words(index: &DictionaryIndex, letters: &str) -> Result<String, ApiError> {
    let words = find(index, letters);
    Ok(serde_json::to_string(words)?)
}

/// Write a JSON body on success, the error message with a 500 otherwise
pub fn http_out(result: Result<String, ApiError>) -> Response {
    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Request failed: {e}");
            e.into_response()
        }
    }
}

/// GET /anagrams/:letters
async fn anagram_finder(
    State(index): State<SharedIndex>,
    letters: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Response {
    let letters = match letters {
        Ok(Path(letters)) => letters,
        Err(rejection) => {
            tracing::debug!("Decoding letters lossily: {rejection}");
            lossy_letters(uri.path())
        }
    };

    http_out(find_words(&index, &letters))
}

/// Last path segment, percent-decoded with invalid UTF-8 replaced by U+FFFD
fn lossy_letters(path: &str) -> String {
    let raw = path.rsplit('/').next().unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

pub fn anagram_router() -> Router<SharedIndex> {
    Router::new().route("/anagrams/:letters", get(anagram_finder))
}

/// Lookup API plus the static client bundle as fallback
pub fn create_router(index: SharedIndex, options: &RouterOptions) -> Router {
    let router = anagram_router()
        .with_state(index)
        .fallback_service(ServeDir::new(&options.static_dir));

    let router = if options.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
