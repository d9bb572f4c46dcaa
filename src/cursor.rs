//! # Cursor Utilities
//!
//! Opaque base64 cursors for keyset pagination over `(created_at, id)`,
//! with validation of incoming cursor strings.

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DataError;

/// Decoded position within a `(created_at, id)` ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorData {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

/// Encode cursor data as an opaque base64 string
pub fn encode_cursor(created_at: &DateTime<Utc>, id: &Uuid) -> String {
    let cursor_data = CursorData {
        created_at: *created_at,
        id: *id,
    };
    let json = serde_json::to_string(&cursor_data).expect("cursor serialization cannot fail");
    base64::engine::general_purpose::STANDARD.encode(json.as_bytes())
}

/// Decode cursor data from an opaque base64 string with validation
pub fn decode_cursor(cursor: &str) -> Result<CursorData, DataError> {
    if cursor.is_empty() {
        return Err(DataError::validation("cursor", "cursor cannot be empty"));
    }

    // Reject oversized inputs before attempting to decode
    if cursor.len() > 1000 {
        return Err(DataError::validation("cursor", "cursor is too long"));
    }

    if !cursor
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    {
        return Err(DataError::validation(
            "cursor",
            "cursor contains invalid characters",
        ));
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(cursor)
        .map_err(|_| DataError::validation("cursor", "cursor is not valid base64"))?;

    let json = String::from_utf8(decoded)
        .map_err(|_| DataError::validation("cursor", "cursor payload is not valid UTF-8"))?;

    let data: CursorData = serde_json::from_str(&json)
        .map_err(|_| DataError::validation("cursor", "cursor payload is malformed"))?;

    if data.id.is_nil() {
        return Err(DataError::validation("cursor", "cursor id cannot be nil"));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_cursor_data() {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let encoded = encode_cursor(&now, &id);
        let decoded = decode_cursor(&encoded).expect("valid cursor decodes");

        assert_eq!(decoded.id, id);
        assert_eq!(decoded.created_at, now);
    }

    #[test]
    fn rejects_empty_cursor() {
        assert!(decode_cursor("").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(decode_cursor("not a cursor!").is_err());
    }

    #[test]
    fn rejects_garbage_base64() {
        let garbage = base64::engine::general_purpose::STANDARD.encode(b"{\"nope\":1}");
        assert!(decode_cursor(&garbage).is_err());
    }

    #[test]
    fn rejects_nil_id() {
        let encoded = encode_cursor(&Utc::now(), &Uuid::nil());
        assert!(decode_cursor(&encoded).is_err());
    }
}
