//! Movie records — the single resource type held by the store.
//!
//! A `Movie` always carries its `Director` inline. Directors have no id and
//! no lifecycle of their own; they are created and dropped with the movie.
//!
//! ## Wire shape
//!
//! ```json
//! {
//!   "id": "1",
//!   "isbn": "438227",
//!   "title": "Movie Allok",
//!   "director": { "firstname": "Allok", "lastname": "Raj" }
//! }
//! ```
//!
//! `director` is `null` when the movie has none.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A director embedded in a movie record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A stored movie record. `id` is the key within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

/// Movie payload as decoded from a create or update request.
///
/// Any `id` in the payload is dropped: the store assigns ids on create and
/// the path decides the id on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieDraft {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: Option<Director>,
}

impl MovieDraft {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            director: None,
        }
    }

    /// Attach a director (builder style).
    pub fn with_director(mut self, director: Director) -> Self {
        self.director = Some(director);
        self
    }

    /// Decode a draft from raw JSON request bytes.
    ///
    /// Keys match field names case-insensitively and `null` values leave the
    /// field at its default. A bare `null` body decodes to an empty draft.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice(bytes)? {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => serde_json::from_value(Value::Object(fold_keys(map))),
            other => Err(serde_json::Error::invalid_type(
                unexpected(&other),
                &"a movie object",
            )),
        }
    }

    /// Turn the draft into a stored record under `id`.
    pub fn into_movie(self, id: impl Into<String>) -> Movie {
        Movie {
            id: id.into(),
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}

/// Lowercase every key and drop null members, recursing into nested objects.
fn fold_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => Value::Object(fold_keys(inner)),
                other => other,
            };
            (key.to_lowercase(), value)
        })
        .collect()
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null | Value::Object(_) => Unexpected::Other("value"),
    }
}

/// The three records every fresh store starts with, ids "1", "2", "3".
pub fn seed_movies() -> Vec<Movie> {
    vec![
        MovieDraft::new("438227", "Movie Allok")
            .with_director(Director::new("Allok", "Raj"))
            .into_movie("1"),
        MovieDraft::new("438228", "Movie Apurve")
            .with_director(Director::new("Apurv", "Raj"))
            .into_movie("2"),
        MovieDraft::new("438229", "Movie Raj")
            .with_director(Director::new("Jigyasha", "Raj"))
            .into_movie("3"),
    ]
}
