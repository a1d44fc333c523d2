//! Component domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A buildable module inside a project (a Gradle subproject).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Component {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Path of the Gradle subproject relative to the repository root
    pub submodule_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Component fields as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComponentDraft {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub submodule_path: Option<String>,
}

impl ComponentDraft {
    /// Draft for a named component under a project
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
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

impl From<Component> for ComponentDraft {
    fn from(component: Component) -> Self {
        Self {
            id: Some(component.id),
            project_id: Some(component.project_id),
            name: Some(component.name),
            description: component.description,
            submodule_path: component.submodule_path,
        }
    }
}
