//! Request and response types for the Nomi.ai API.
//!
//! These types mirror the server's API contract. Missing and `null` fields
//! decode to their empty values, matching how the API omits data it has no
//! value for.

use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Nomis
// ─────────────────────────────────────────────────────────────────────────────

/// A Nomi (the conversational agent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nomi {
    /// Opaque identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form gender tag.
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    /// Creation time (ISO 8601, kept as the server sent it).
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    /// Free-form relationship tag, e.g. `Friend`.
    #[serde(deserialize_with = "null_as_default")]
    pub relationship_type: String,
}

/// Response for `GET /nomis`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListNomisResponse {
    /// Nomis in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub nomis: Vec<Nomi>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rooms
// ─────────────────────────────────────────────────────────────────────────────

/// A room grouping several Nomis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Room {
    /// Opaque identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Display name. Empty when the room is unnamed.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Creation time (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    /// Last update time (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub updated: String,
    /// Status tag.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Whether backchanneling is enabled for the room.
    #[serde(deserialize_with = "null_as_default")]
    pub backchanneling_enabled: bool,
    /// Free-text note. Empty means no note.
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    /// Participants in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub nomis: Vec<Nomi>,
}

/// Response for `GET /rooms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRoomsResponse {
    /// Rooms in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub rooms: Vec<Room>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /nomis/{id}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Message text, sent verbatim.
    pub message_text: String,
}

impl ChatRequest {
    /// Create a chat request with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_text: text.into(),
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Message ID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Message text.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Send time (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub sent: String,
}

/// Response for `POST /nomis/{id}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// The message as the server recorded it.
    pub sent_message: Message,
    /// The Nomi's reply.
    pub reply_message: Message,
}

/// Decode `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
