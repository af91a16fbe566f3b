use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub rating: u8,
    pub description: String,
}

/// Raw create payload. Fields stay untyped so that presence is checked in
/// order by the validation gate before any type is enforced.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateBookmark {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// A create payload that passed validation; only the id is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub rating: u8,
    pub description: String,
}

impl NewBookmark {
    pub fn into_bookmark(self, id: String) -> Bookmark {
        Bookmark {
            id,
            url: self.url,
            title: self.title,
            rating: self.rating,
            description: self.description,
        }
    }
}
