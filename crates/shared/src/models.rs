use serde::{Deserialize, Serialize};

/// Longest message the wall accepts, in characters.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Longest author name the wall accepts, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Author shown when a note is submitted without a name.
pub const ANONYMOUS: &str = "Anonymous";

/// A note on the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub message: String,
    #[serde(default = "default_name")]
    pub name: String,
    pub created_at: String,
}

fn default_name() -> String {
    ANONYMOUS.to_string()
}

/// Create/update payload for a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A validated note body: trimmed message, name defaulted to [`ANONYMOUS`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNote {
    pub message: String,
    pub name: String,
}

impl NoteInput {
    /// Apply the wall's validation rules.
    ///
    /// The same rules run on the server and in the frontend's local
    /// fallback, so a note created offline looks identical to one the
    /// server accepted.
    pub fn normalize(&self) -> Result<NormalizedNote, String> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err("Message is required".to_string());
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(format!(
                "Message cannot exceed {} characters",
                MAX_MESSAGE_LEN
            ));
        }

        let name = self.name.as_deref().unwrap_or("").trim();
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
        }
        let name = if name.is_empty() { ANONYMOUS } else { name };

        Ok(NormalizedNote {
            message: message.to_string(),
            name: name.to_string(),
        })
    }
}

/// Generate a fresh note id (v4 UUID, string form).
#[cfg(feature = "uuid-support")]
pub fn generate_note_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: "abc".to_string(),
            message: "hello".to_string(),
            name: "Maya".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["createdAt"], "2026-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_note_deserializes_without_name() {
        let json = r#"{"id":"n1","message":"hi","createdAt":"2026-01-01T00:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.name, ANONYMOUS);
    }

    #[test]
    fn test_normalize_trims_and_defaults_name() {
        let input = NoteInput {
            message: "  a thought  ".to_string(),
            name: Some("   ".to_string()),
        };
        let n = input.normalize().unwrap();
        assert_eq!(n.message, "a thought");
        assert_eq!(n.name, ANONYMOUS);
    }

    #[test]
    fn test_normalize_keeps_name() {
        let input = NoteInput {
            message: "hi".to_string(),
            name: Some(" Maya ".to_string()),
        };
        let n = input.normalize().unwrap();
        assert_eq!(n.name, "Maya");
    }

    #[test]
    fn test_normalize_rejects_empty_message() {
        let input = NoteInput {
            message: "   ".to_string(),
            name: None,
        };
        assert_eq!(input.normalize().unwrap_err(), "Message is required");
    }

    #[test]
    fn test_normalize_rejects_long_message() {
        let input = NoteInput {
            message: "x".repeat(MAX_MESSAGE_LEN + 1),
            name: None,
        };
        assert!(input.normalize().unwrap_err().contains("500"));
    }

    #[test]
    fn test_normalize_accepts_message_at_limit() {
        let input = NoteInput {
            message: "x".repeat(MAX_MESSAGE_LEN),
            name: None,
        };
        assert!(input.normalize().is_ok());
    }

    #[test]
    fn test_normalize_rejects_long_name() {
        let input = NoteInput {
            message: "hi".to_string(),
            name: Some("y".repeat(MAX_NAME_LEN + 1)),
        };
        assert!(input.normalize().unwrap_err().contains("50"));
    }

    #[cfg(feature = "uuid-support")]
    #[test]
    fn test_generate_note_id_is_unique() {
        assert_ne!(generate_note_id(), generate_note_id());
    }
}
