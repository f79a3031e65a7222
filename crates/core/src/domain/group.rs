// Group Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// A user-defined collection of words for thematic study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Caller-supplied group fields for create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupFields {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl GroupFields {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Name is required".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_required() {
        let fields = GroupFields {
            name: String::new(),
            description: Some("verbs of motion".to_string()),
        };
        assert_eq!(fields.validate(), vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_validate_description_optional() {
        let fields = GroupFields {
            name: "Verbs".to_string(),
            description: None,
        };
        assert!(fields.validate().is_empty());
    }
}
