use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("LockError: {0}")]
    Lock(String),
}

/// Failures of a single bookmark request. `Display` is the message sent back
/// to the client.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("'{0}' is required")]
    MissingField(&'static str),
    #[error("'{0}' must be a string")]
    NotText(&'static str),
    #[error("'rating' must be a number between 0 and 5")]
    InvalidRating(Value),
    #[error("'url' must be a valid URL")]
    InvalidUrl(String),
    #[error("Bookmark not found")]
    NotFound(String),
    #[error("{0}")]
    MalformedBody(String),
    #[error("Failed to access bookmarks")]
    Store(#[from] StoreError),
}

impl BookmarkError {
    pub fn status(&self) -> StatusCode {
        use BookmarkError::*;
        match self {
            MissingField(_) | NotText(_) | InvalidRating(_) | InvalidUrl(_) | MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            NotFound(_) => StatusCode::NOT_FOUND,
            Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        use BookmarkError::*;
        match self {
            MissingField(field) => tracing::error!(field = *field, "{} is required", field),
            NotText(field) => tracing::error!(field = *field, "{} must be a string", field),
            InvalidRating(rating) => {
                tracing::error!(rating = %rating, "Invalid rating '{}' supplied", rating)
            }
            InvalidUrl(url) => tracing::error!(url = %url, "Invalid url '{}' supplied", url),
            NotFound(id) => tracing::error!(id = %id, "Bookmark with id {} not found.", id),
            MalformedBody(reason) => tracing::error!("Malformed bookmark payload: {}", reason),
            Store(e) => tracing::error!(error = %e, "failed to access bookmark store"),
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), self.to_string()).into_response()
    }
}
