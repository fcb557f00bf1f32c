use serde::{Deserialize, Serialize};

use baseshop_kernel::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /Projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Required.
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

impl CreateProjectRequest {
    pub const ROUTE: &'static str = "/Projects";

    /// The project name, present and not blank.
    pub fn validate(&self) -> DomainResult<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(DomainError::validation("Name is required")),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreatedResponse {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_field_spellings() {
        let lower: CreateProjectRequest = serde_json::from_str(r#"{"name":"Shop"}"#).unwrap();
        let pascal: CreateProjectRequest = serde_json::from_str(r#"{"Name":"Shop"}"#).unwrap();
        assert_eq!(lower.validate().unwrap(), "Shop");
        assert_eq!(pascal.validate().unwrap(), "Shop");
    }

    #[test]
    fn name_is_required() {
        let missing: CreateProjectRequest = serde_json::from_str("{}").unwrap();
        let null: CreateProjectRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
        let blank = CreateProjectRequest {
            name: Some("  ".to_string()),
        };

        for request in [missing, null, blank] {
            assert!(matches!(request.validate(), Err(DomainError::Validation(_))));
        }
    }
}
