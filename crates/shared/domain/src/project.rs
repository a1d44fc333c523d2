//! Project domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked software project.
///
/// Components are never embedded; fetch them by project id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Project {
    /// Opaque identifier assigned on first insert
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub repository_url: Option<String>,
    /// Owning user; may be unset
    pub created_by_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project fields as supplied by a client on create or full replace.
///
/// Every field is optional at this level; `name` is enforced as a
/// not-null column when the record is written. Unknown fields such as
/// `createdAt` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProjectDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub repository_url: Option<String>,
    pub created_by_id: Option<String>,
}

impl ProjectDraft {
    /// Draft carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Force the identifier, replacing whatever the client sent
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<Project> for ProjectDraft {
    fn from(project: Project) -> Self {
        Self {
            id: Some(project.id),
            name: Some(project.name),
            description: project.description,
            repository_url: project.repository_url,
            created_by_id: project.created_by_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ignores_server_managed_fields() {
        let draft: ProjectDraft = serde_json::from_str(
            r#"{"name":"Alpha","repositoryUrl":"https://x","createdAt":"2024-01-01T00:00:00Z","components":[]}"#,
        )
        .unwrap();

        assert_eq!(draft.name.as_deref(), Some("Alpha"));
        assert_eq!(draft.repository_url.as_deref(), Some("https://x"));
        assert!(draft.id.is_none());
        assert!(draft.created_by_id.is_none());
    }

    #[test]
    fn with_id_overrides_body_id() {
        let draft = ProjectDraft::named("Alpha").with_id("body-id").with_id("path-id");
        assert_eq!(draft.id.as_deref(), Some("path-id"));
    }

    #[test]
    fn project_serializes_camel_case() {
        let now = Utc::now();
        let project = Project {
            id: "p-1".to_string(),
            name: "Alpha".to_string(),
            description: None,
            repository_url: Some("https://x".to_string()),
            created_by_id: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["repositoryUrl"], "https://x");
        assert!(json["createdById"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("components").is_none());
    }
}
