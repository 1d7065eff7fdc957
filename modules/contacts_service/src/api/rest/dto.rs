//! REST DTOs with serde derives for HTTP API

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Contact response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    /// Store-assigned identifier
    #[schema(example = "42")]
    pub id: String,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
}

/// Contact creation request
///
/// All three fields are required and must be non-empty; missing fields are
/// reported together as a single validation failure. Falsy JSON values
/// (`null`, `false`, `0`, `""`) count as missing; other scalars are taken as
/// their text form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(text)) => Ok((!text.is_empty()).then_some(text)),
        Some(Value::Number(number)) => {
            Ok((number.as_f64() != Some(0.0)).then(|| number.to_string()))
        }
        Some(other) => Err(de::Error::custom(format!(
            "invalid type: {}, expected text",
            other
        ))),
    }
}

/// Partial contact update; present fields replace stored values
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Envelope for a single contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub data: ContactDto,

    #[schema(example = "Get contacts for 42")]
    pub message: String,
}

/// Envelope for the contact collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactListResponse {
    pub data: Vec<ContactDto>,

    #[schema(example = "Get all contacts")]
    pub message: String,
}

/// Envelope carrying only a message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Delete contacts for 42")]
    pub message: String,
}

// Note: Conversion implementations live in mapper.rs
