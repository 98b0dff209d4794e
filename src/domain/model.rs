use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A concert record. Only `id` and `artist` are interpreted; every other
/// field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concert {
    pub data: Map<String, Value>,
}

/// An artist entry nested in a concert's `artist` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artist {
    pub data: Map<String, Value>,
}

impl Concert {
    /// The concert identifier. Non-string ids never compare equal to a
    /// string lookup, so they read as absent.
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }

    /// Object entries of the `artist` array. Missing, null or non-array
    /// values yield nothing.
    pub fn artists(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.data
            .get("artist")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    pub fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists()
            .filter_map(|artist| artist.get("name").and_then(Value::as_str))
    }

    /// Case-insensitive substring match against every artist name.
    /// `needle` must already be lowercased.
    pub fn performed_by(&self, needle: &str) -> bool {
        self.artist_names()
            .any(|name| name.to_lowercase().contains(needle))
    }
}

impl Artist {
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }
}

impl From<&Map<String, Value>> for Artist {
    fn from(data: &Map<String, Value>) -> Self {
        Self { data: data.clone() }
    }
}

impl TryFrom<Value> for Concert {
    type Error = Value;

    /// Only JSON objects can be concerts; anything else is handed back.
    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(data) => Ok(Concert { data }),
            other => Err(other),
        }
    }
}
