//! Component repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::audit::{new_id, stamp_insert, stamp_update};
use super::entities::component::{self, ActiveModel, Entity as ComponentEntity};
use common::AppResult;
use domain::{required, Component, ComponentDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Component repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// List all components, newest first
    async fn list(&self) -> AppResult<Vec<Component>>;

    /// Find component by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Component>>;

    /// Components belonging to a project, newest first
    async fn find_by_project(&self, project_id: &str) -> AppResult<Vec<Component>>;

    /// Check whether a component with this ID exists
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert when the draft has no ID or an unknown one, otherwise replace
    /// the stored record.
    async fn save(&self, draft: ComponentDraft) -> AppResult<Component>;

    /// Delete by ID together with its dependencies.
    /// Returns whether a row was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of ComponentRepository
pub struct ComponentStore {
    db: DatabaseConnection,
}

impl ComponentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ComponentRepository for ComponentStore {
    async fn list(&self) -> AppResult<Vec<Component>> {
        let models = ComponentEntity::find()
            .order_by_desc(component::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Component::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Component>> {
        let result = ComponentEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Component::from))
    }

    async fn find_by_project(&self, project_id: &str) -> AppResult<Vec<Component>> {
        let models = ComponentEntity::find()
            .filter(component::Column::ProjectId.eq(project_id))
            .order_by_desc(component::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Component::from).collect())
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let count = ComponentEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, draft: ComponentDraft) -> AppResult<Component> {
        let project_id = required("project_id", draft.project_id)?;
        let name = required("name", draft.name)?;

        let existing = match draft.id.as_deref() {
            Some(id) => ComponentEntity::find_by_id(id).one(&self.db).await?,
            None => None,
        };

        let model = match existing {
            Some(current) => {
                let mut active: ActiveModel = current.into();
                active.project_id = Set(project_id);
                active.name = Set(name);
                active.description = Set(draft.description);
                active.submodule_path = Set(draft.submodule_path);
                stamp_update(&mut active);
                active.update(&self.db).await?
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(draft.id.unwrap_or_else(new_id)),
                    project_id: Set(project_id),
                    name: Set(name),
                    description: Set(draft.description),
                    submodule_path: Set(draft.submodule_path),
                    ..Default::default()
                };
                stamp_insert(&mut active);
                active.insert(&self.db).await?
            }
        };

        Ok(Component::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = ComponentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
