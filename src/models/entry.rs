// ============================================================================
// ENTRY MODEL - Entrada de texto enviada por el usuario
// ============================================================================

use serde::{Deserialize, Serialize};

/// Una entrada del historial. Sin id, sin timestamp, sin unicidad.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "userInput")]
    pub user_input: String,
}

impl Entry {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }

    /// Texto de la entrada
    pub fn text(&self) -> &str {
        &self.user_input
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self { user_input: text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_user_input_key() {
        let json = serde_json::to_string(&Entry::new("foo")).unwrap();
        assert_eq!(json, r#"{"userInput":"foo"}"#);
    }

    #[test]
    fn test_entry_deserializes_from_user_input_key() {
        let entry: Entry = serde_json::from_str(r#"{"userInput":"bar"}"#).unwrap();
        assert_eq!(entry.text(), "bar");
    }

    #[test]
    fn test_empty_text_is_valid() {
        let entry = Entry::from("");
        assert_eq!(entry, Entry::default());
        assert_eq!(entry.text(), "");
    }
}
