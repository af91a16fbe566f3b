//! Bookmarks Module
//!
//! Create, list, fetch and delete saved links. Records live in an in-memory
//! [`BookmarkStore`] owned by the application state, so every service (and
//! every test) gets its own collection.
//!
//! # Routes
//!
//! - `GET /bookmarks` - every bookmark, in insertion order
//! - `POST /bookmarks` - validate and store a new bookmark
//! - `GET /bookmarks/:id` - a single bookmark
//! - `DELETE /bookmarks/:id` - remove a bookmark
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks::bookmarks;
//!
//! let app = Router::new()
//!     .merge(bookmarks::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod id;
mod routes;
mod store;
mod validate;

pub use id::{IdGenerator, UuidGenerator};
pub use routes::routes;
pub use store::BookmarkStore;
pub use validate::{UrlValidator, WebUrlValidator};
