//! Project service - Project use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{Project, ProjectDraft};

use crate::repository::ProjectRepository;

/// Project service trait for dependency injection.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// List all projects, newest first
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Get project by ID
    async fn get_project(&self, id: &str) -> AppResult<Project>;

    /// Projects whose name contains `name`, ignoring case
    async fn search_projects(&self, name: &str) -> AppResult<Vec<Project>>;

    /// Projects created by the given user
    async fn list_projects_by_creator(&self, user_id: &str) -> AppResult<Vec<Project>>;

    /// Persist a new project. Any client supplied ID is discarded.
    async fn create_project(&self, draft: ProjectDraft) -> AppResult<Project>;

    /// Replace an existing project. The stored ID is always `id`.
    async fn update_project(&self, id: &str, draft: ProjectDraft) -> AppResult<Project>;

    /// Delete a project together with its components and their dependencies
    async fn delete_project(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ProjectService using repository.
pub struct ProjectManager {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectManager {
    /// Create new project service instance with repository
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProjectService for ProjectManager {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.repo.list().await
    }

    async fn get_project(&self, id: &str) -> AppResult<Project> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn search_projects(&self, name: &str) -> AppResult<Vec<Project>> {
        self.repo.find_by_name_containing(name).await
    }

    async fn list_projects_by_creator(&self, user_id: &str) -> AppResult<Vec<Project>> {
        self.repo.find_by_creator(user_id).await
    }

    async fn create_project(&self, mut draft: ProjectDraft) -> AppResult<Project> {
        draft.id = None;
        let project = self.repo.save(draft).await?;
        info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    async fn update_project(&self, id: &str, draft: ProjectDraft) -> AppResult<Project> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.save(draft.with_id(id)).await
    }

    async fn delete_project(&self, id: &str) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.delete(id).await?;
        info!(project_id = %id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProjectRepository;
    use chrono::Utc;

    fn project_from(draft: ProjectDraft) -> Project {
        let now = Utc::now();
        Project {
            id: draft.id.unwrap_or_else(|| "generated".to_string()),
            name: draft.name.unwrap_or_default(),
            description: draft.description,
            repository_url: draft.repository_url,
            created_by_id: draft.created_by_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_discards_client_id() {
        let mut repo = MockProjectRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|draft| {
                assert!(draft.id.is_none());
                Ok(project_from(draft))
            });

        let service = ProjectManager::new(Arc::new(repo));
        let project = service
            .create_project(ProjectDraft::named("Alpha").with_id("client-chosen"))
            .await
            .unwrap();

        assert_eq!(project.id, "generated");
        assert_eq!(project.name, "Alpha");
    }

    #[tokio::test]
    async fn update_missing_project_writes_nothing() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_save().never();

        let service = ProjectManager::new(Arc::new(repo));
        let result = service
            .update_project("missing", ProjectDraft::named("Beta"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_forces_path_id() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists().returning(|_| Ok(true));
        repo.expect_save().returning(|draft| Ok(project_from(draft)));

        let service = ProjectManager::new(Arc::new(repo));
        let project = service
            .update_project("p-1", ProjectDraft::named("Beta").with_id("other"))
            .await
            .unwrap();

        assert_eq!(project.id, "p-1");
    }

    #[tokio::test]
    async fn delete_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_delete().never();

        let service = ProjectManager::new(Arc::new(repo));
        let result = service.delete_project("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn get_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProjectManager::new(Arc::new(repo));

        assert!(matches!(
            service.get_project("missing").await,
            Err(AppError::NotFound)
        ));
    }
}
