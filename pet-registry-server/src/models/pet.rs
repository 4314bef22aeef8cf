//! Pet records and their validated name fields
//!
//! Names arrive as arbitrary JSON. A field counts as missing when it is
//! absent or falsy: `null`, `""`, `false`, or `0`. Other scalars are kept in
//! their text form (`true`, `42`). Whitespace is not trimmed: `" "` is a
//! valid name.

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ValidationError;

/// Stored pet record.
///
/// Serialized with the column casing of the `Pets` table (`ID`, `Name`, `Owner`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Pet {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Owner")]
    pub owner: String,
}

fn required(field: &'static str, value: Option<&Value>) -> Result<String, ValidationError> {
    let text = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Bool(true)) => Some("true".to_owned()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(_) | Value::Object(_)) => {
            return Err(ValidationError::NotText { field });
        }
    };

    text.ok_or(ValidationError::Empty { field })
}

/// Validated pet name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetName(String);

impl PetName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::from_json(Some(&Value::from(s)))
    }

    /// Validate a possibly-missing name taken from a request body.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        required("petName", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated owner name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerName(String);

impl OwnerName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::from_json(Some(&Value::from(s)))
    }

    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        required("ownerName", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A pet that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: PetName,
    pub owner: OwnerName,
}

impl NewPet {
    /// Validate both fields. The pet name is checked first.
    ///
    /// # Example
    /// ```
    /// use pet_registry_server::models::NewPet;
    ///
    /// assert!(NewPet::new(Some("Rex"), Some("Ana")).is_ok());
    /// assert!(NewPet::new(Some(""), Some("Ana")).is_err());
    /// assert!(NewPet::new(None, Some("Ana")).is_err());
    /// ```
    pub fn new(name: Option<&str>, owner: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PetName::from_json(name.map(Value::from).as_ref())?,
            owner: OwnerName::from_json(owner.map(Value::from).as_ref())?,
        })
    }

    /// Validate `petName` and `ownerName` from a decoded request body.
    ///
    /// A body that is not a JSON object carries neither field.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PetName::from_json(body.get("petName"))?,
            owner: OwnerName::from_json(body.get("ownerName"))?,
        })
    }
}
