use serde_json::Value;
use url::Url;

use crate::error::BookmarkError;
use crate::model::{CreateBookmark, NewBookmark};

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;

pub trait UrlValidator: Send + Sync {
    /// True when `candidate` is an absolute, fetchable web URL.
    fn is_web_url(&self, candidate: &str) -> bool;
}

/// Accepts absolute `http`/`https` URLs that carry a host.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebUrlValidator;

impl UrlValidator for WebUrlValidator {
    fn is_web_url(&self, candidate: &str) -> bool {
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }

        // the parser tolerates `http:host` and `http:///host`, insist on an authority
        let lowered = candidate.to_ascii_lowercase();
        let authority = lowered
            .strip_prefix("https://")
            .or_else(|| lowered.strip_prefix("http://"));
        match authority {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => {}
            _ => return false,
        }

        match Url::parse(candidate) {
            Ok(url) => {
                matches!(url.scheme(), "http" | "https")
                    && url.host_str().is_some_and(|host| !host.is_empty())
            }
            Err(_) => false,
        }
    }
}

fn require(value: Option<Value>, field: &'static str) -> Result<Value, BookmarkError> {
    match value {
        None | Some(Value::Null) => Err(BookmarkError::MissingField(field)),
        Some(Value::String(text)) if text.is_empty() => Err(BookmarkError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn into_text(value: Value, field: &'static str) -> Result<String, BookmarkError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(BookmarkError::NotText(field)),
    }
}

/// Whole numbers in range, whether written as `3`, `3.0` or `3e0`.
fn parse_rating(rating: Value) -> Result<u8, BookmarkError> {
    match rating.as_f64() {
        Some(r) if r.fract() == 0.0 && (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r as u8),
        _ => Err(BookmarkError::InvalidRating(rating)),
    }
}

/// Runs the create checks in order and stops at the first failure:
/// presence of url, title, rating, description, then the rating range,
/// then the text fields' types, then the url shape.
pub fn validate(
    payload: CreateBookmark,
    urls: &dyn UrlValidator,
) -> Result<NewBookmark, BookmarkError> {
    let url = require(payload.url, "url")?;
    let title = require(payload.title, "title")?;
    let rating = require(payload.rating, "rating")?;
    let description = require(payload.description, "description")?;

    let rating = parse_rating(rating)?;
    let title = into_text(title, "title")?;
    let description = into_text(description, "description")?;

    let url = match url {
        Value::String(url) if urls.is_web_url(&url) => url,
        Value::String(url) => return Err(BookmarkError::InvalidUrl(url)),
        other => return Err(BookmarkError::InvalidUrl(other.to_string())),
    };

    Ok(NewBookmark {
        url,
        title,
        rating,
        description,
    })
}
