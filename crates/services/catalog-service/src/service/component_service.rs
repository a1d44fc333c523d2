//! Component service - Component use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{Component, ComponentDraft};

use crate::repository::ComponentRepository;

/// Component service trait for dependency injection.
#[async_trait]
pub trait ComponentService: Send + Sync {
    async fn list_components(&self) -> AppResult<Vec<Component>>;

    async fn get_component(&self, id: &str) -> AppResult<Component>;

    /// Components belonging to a project
    async fn list_components_by_project(&self, project_id: &str) -> AppResult<Vec<Component>>;

    /// Persist a new component. Any client supplied ID is discarded.
    async fn create_component(&self, draft: ComponentDraft) -> AppResult<Component>;

    /// Replace an existing component. The stored ID is always `id`.
    async fn update_component(&self, id: &str, draft: ComponentDraft) -> AppResult<Component>;

    /// Delete a component together with its dependencies
    async fn delete_component(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ComponentService using repository.
pub struct ComponentManager {
    repo: Arc<dyn ComponentRepository>,
}

impl ComponentManager {
    pub fn new(repo: Arc<dyn ComponentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ComponentService for ComponentManager {
    async fn list_components(&self) -> AppResult<Vec<Component>> {
        self.repo.list().await
    }

    async fn get_component(&self, id: &str) -> AppResult<Component> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_components_by_project(&self, project_id: &str) -> AppResult<Vec<Component>> {
        self.repo.find_by_project(project_id).await
    }

    async fn create_component(&self, mut draft: ComponentDraft) -> AppResult<Component> {
        draft.id = None;
        let component = self.repo.save(draft).await?;
        info!(
            component_id = %component.id,
            project_id = %component.project_id,
            "Component created"
        );
        Ok(component)
    }

    async fn update_component(&self, id: &str, draft: ComponentDraft) -> AppResult<Component> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.save(draft.with_id(id)).await
    }

    async fn delete_component(&self, id: &str) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.delete(id).await?;
        info!(component_id = %id, "Component deleted");
        Ok(())
    }
}
