//! Dependency repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::audit::{new_id, stamp_insert, stamp_update};
use super::entities::dependency::{self, ActiveModel, Entity as DependencyEntity};
use common::AppResult;
use domain::{required, Dependency, DependencyDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Dependency repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// List all dependencies, newest first
    async fn list(&self) -> AppResult<Vec<Dependency>>;

    /// Find dependency by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Dependency>>;

    /// Dependencies declared by a component, newest first
    async fn find_by_component(&self, component_id: &str) -> AppResult<Vec<Dependency>>;

    /// Check whether a dependency with this ID exists
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert when the draft has no ID or an unknown one, otherwise replace
    /// the stored record.
    async fn save(&self, draft: DependencyDraft) -> AppResult<Dependency>;

    /// Delete by ID. Returns whether a row was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of DependencyRepository
pub struct DependencyStore {
    db: DatabaseConnection,
}

impl DependencyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DependencyRepository for DependencyStore {
    async fn list(&self) -> AppResult<Vec<Dependency>> {
        let models = DependencyEntity::find()
            .order_by_desc(dependency::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Dependency::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Dependency>> {
        let result = DependencyEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Dependency::from))
    }

    async fn find_by_component(&self, component_id: &str) -> AppResult<Vec<Dependency>> {
        let models = DependencyEntity::find()
            .filter(dependency::Column::ComponentId.eq(component_id))
            .order_by_desc(dependency::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Dependency::from).collect())
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let count = DependencyEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, draft: DependencyDraft) -> AppResult<Dependency> {
        let component_id = required("component_id", draft.component_id)?;
        let group_id = required("group_id", draft.group_id)?;
        let artifact_id = required("artifact_id", draft.artifact_id)?;
        let version = required("version", draft.version)?;
        let scope = required("scope", draft.scope)?;
        let added_by_id = required("added_by", draft.added_by_id)?;

        let existing = match draft.id.as_deref() {
            Some(id) => DependencyEntity::find_by_id(id).one(&self.db).await?,
            None => None,
        };

        let model = match existing {
            Some(current) => {
                let mut active: ActiveModel = current.into();
                active.component_id = Set(component_id);
                active.group_id = Set(group_id);
                active.artifact_id = Set(artifact_id);
                active.version = Set(version);
                active.scope = Set(scope);
                active.description = Set(draft.description);
                active.added_by_id = Set(added_by_id);
                stamp_update(&mut active);
                active.update(&self.db).await?
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(draft.id.unwrap_or_else(new_id)),
                    component_id: Set(component_id),
                    group_id: Set(group_id),
                    artifact_id: Set(artifact_id),
                    version: Set(version),
                    scope: Set(scope),
                    description: Set(draft.description),
                    added_by_id: Set(added_by_id),
                    ..Default::default()
                };
                stamp_insert(&mut active);
                active.insert(&self.db).await?
            }
        };

        Ok(Dependency::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = DependencyEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
