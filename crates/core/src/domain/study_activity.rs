// Study Activity Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// A named, URL-addressable exercise type (e.g. flashcards)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyActivity {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Caller-supplied activity fields for create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyActivityFields {
    pub name: String,
    pub url: String,
}

impl StudyActivityFields {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.url.is_empty() {
            errors.push("URL is required".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_both_fields_required() {
        let fields = StudyActivityFields {
            name: String::new(),
            url: String::new(),
        };
        assert_eq!(fields.validate().len(), 2);
    }

    #[test]
    fn test_validate_complete() {
        let fields = StudyActivityFields {
            name: "Flashcards".to_string(),
            url: "http://localhost:8081".to_string(),
        };
        assert!(fields.validate().is_empty());
    }
}
