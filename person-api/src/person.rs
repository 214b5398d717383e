//! The decoded character record and its extraction from SWAPI JSON.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PersonApiError, PersonApiResult};

/// A character as returned by the SWAPI `people` resource.
///
/// Every field is opaque text; nothing is validated or parsed further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub birth_year: String,
    pub gender: String,
    #[serde(rename = "homeworld")]
    pub homeworld_url: String,
    #[serde(rename = "films")]
    pub film_urls: Vec<String>,
    #[serde(rename = "vehicles")]
    pub vehicle_urls: Vec<String>,
    #[serde(rename = "starships")]
    pub starship_urls: Vec<String>
}

impl Person {
    /// Extracts a person from a JSON object.
    ///
    /// Missing or wrong-typed fields fall back to `""` or an empty list, so
    /// this never fails.
    pub fn from_object(json: &Map<String, Value>) -> Self {
        Self {
            name: text(json, "name"),
            height: text(json, "height"),
            mass: text(json, "mass"),
            hair_color: text(json, "hair_color"),
            birth_year: text(json, "birth_year"),
            gender: text(json, "gender"),
            homeworld_url: text(json, "homeworld"),
            film_urls: text_list(json, "films"),
            vehicle_urls: text_list(json, "vehicles"),
            starship_urls: text_list(json, "starships")
        }
    }
}

fn text(json: &Map<String, Value>, key: &str) -> String {
    json.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

// A list with any non-text element counts as wrong-typed as a whole.
fn text_list(json: &Map<String, Value>, key: &str) -> Vec<String> {
    json.get(key)
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_default()
}

/// Decodes a response body into a [`Person`].
///
/// Fails only when the body is empty, not JSON, or not a JSON object.
pub fn decode_person(body: &[u8]) -> PersonApiResult<Person> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PersonApiError::EmptyBody);
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(Person::from_object(&map)),
        other => Err(PersonApiError::NotAnObject {
            kind: json_kind(&other)
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}
