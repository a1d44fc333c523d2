//! Dependency domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Gradle dependency declared by a component, attributed to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Dependency {
    pub id: String,
    pub component_id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Gradle configuration, e.g. `implementation` or `testImplementation`
    pub scope: String,
    pub description: Option<String>,
    pub added_by_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dependency {
    /// Gradle coordinate notation: `group:artifact:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Dependency fields as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DependencyDraft {
    pub id: Option<String>,
    pub component_id: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub description: Option<String>,
    pub added_by_id: Option<String>,
}

impl DependencyDraft {
    /// Force the identifier, replacing whatever the client sent
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<Dependency> for DependencyDraft {
    fn from(dependency: Dependency) -> Self {
        Self {
            id: Some(dependency.id),
            component_id: Some(dependency.component_id),
            group_id: Some(dependency.group_id),
            artifact_id: Some(dependency.artifact_id),
            version: Some(dependency.version),
            scope: Some(dependency.scope),
            description: dependency.description,
            added_by_id: Some(dependency.added_by_id),
        }
    }
}
