// Word Domain Model

use serde::{Deserialize, Serialize};

/// Row identifier assigned by the storage engine (auto-increment)
pub type RecordId = i64;

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: RecordId,
    pub kanji: String,
    pub romaji: String,
    pub english: String,
    pub example: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Caller-supplied word fields for create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFields {
    pub kanji: String,
    pub romaji: String,
    pub english: String,

    #[serde(default)]
    pub example: Option<String>,
}

impl WordFields {
    /// Required-field checks; messages are surfaced to callers verbatim
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.kanji.is_empty() {
            errors.push("Kanji is required".to_string());
        }
        if self.romaji.is_empty() {
            errors.push("Romaji is required".to_string());
        }
        if self.english.is_empty() {
            errors.push("English is required".to_string());
        }
        errors
    }
}
