//! HTTP handlers for the bookmark resource

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::validate::validate;
use crate::error::BookmarkError;
use crate::handler::AppState;
use crate::model::{Bookmark, CreateBookmark};

pub async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Bookmark>>, BookmarkError> {
    Ok(Json(state.store.list()?))
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmark>, JsonRejection>,
) -> Result<Response, BookmarkError> {
    let Json(payload) = payload.map_err(|e| BookmarkError::MalformedBody(e.body_text()))?;
    let bookmark = validate(payload, state.urls.as_ref())?.into_bookmark(state.ids.next_id());

    state.store.insert(bookmark.clone())?;
    tracing::info!("Bookmark with id {} created", bookmark.id);

    let location = state.location_of(&bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    )
        .into_response())
}

pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, BookmarkError> {
    match state.store.get(&id)? {
        Some(bookmark) => Ok(Json(bookmark)),
        None => Err(BookmarkError::NotFound(id)),
    }
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, BookmarkError> {
    if state.store.remove(&id)?.is_none() {
        return Err(BookmarkError::NotFound(id));
    }

    tracing::info!("Bookmark with id {} deleted.", id);
    Ok(StatusCode::NO_CONTENT)
}
