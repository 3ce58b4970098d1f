//! Typed write payloads converted from JSON bodies that already passed
//! validation. Conversion failures are store-level rejections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::repository::StoreError;

/// Persisted dog record.
pub type Dog = models::dog::Model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDog {
    pub name: String,
    pub description: String,
    pub age: i32,
    pub breed: String,
}

/// Partial update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
}

impl NewDog {
    pub fn from_json(body: &Value) -> Result<Self, StoreError> {
        let map = as_object(body)?;
        Ok(Self {
            name: string_field(map, "name")?.ok_or_else(|| missing("name"))?,
            description: string_field(map, "description")?
                .ok_or_else(|| missing("description"))?,
            age: age_field(map)?.ok_or_else(|| missing("age"))?,
            breed: string_field(map, "breed")?.ok_or_else(|| missing("breed"))?,
        })
    }
}

impl DogChanges {
    pub fn from_json(body: &Value) -> Result<Self, StoreError> {
        let map = as_object(body)?;
        Ok(Self {
            name: string_field(map, "name")?,
            description: string_field(map, "description")?,
            age: age_field(map)?,
            breed: string_field(map, "breed")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.age.is_none()
            && self.breed.is_none()
    }

    pub fn apply_to(&self, dog: &mut Dog) {
        if let Some(name) = &self.name {
            dog.name = name.clone();
        }
        if let Some(description) = &self.description {
            dog.description = description.clone();
        }
        if let Some(age) = self.age {
            dog.age = age;
        }
        if let Some(breed) = &self.breed {
            dog.breed = breed.clone();
        }
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, StoreError> {
    body.as_object()
        .ok_or_else(|| StoreError::InvalidData("dog data must be an object".into()))
}

fn missing(field: &str) -> StoreError {
    StoreError::InvalidData(format!("argument `{}` is missing", field))
}

fn string_field(map: &Map<String, Value>, field: &str) -> Result<Option<String>, StoreError> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(StoreError::InvalidData(format!(
            "argument `{}`: expected string, got {}",
            field,
            json_type(other)
        ))),
    }
}

// The column is a 32-bit integer; integral floats such as 3.0 are accepted.
fn age_field(map: &Map<String, Value>) -> Result<Option<i32>, StoreError> {
    let Some(value) = map.get("age") else { return Ok(None) };
    let reject = || {
        StoreError::InvalidData(format!(
            "argument `age`: expected 32-bit integer, got {}",
            value
        ))
    };
    let Value::Number(n) = value else { return Err(reject()) };
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).map(Some).map_err(|_| reject());
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Ok(Some(f as i32))
        }
        _ => Err(reject()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
