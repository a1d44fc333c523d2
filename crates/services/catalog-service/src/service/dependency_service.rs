//! Dependency service - Gradle dependency use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{Dependency, DependencyDraft};

use crate::repository::DependencyRepository;

/// Dependency service trait for dependency injection.
#[async_trait]
pub trait DependencyService: Send + Sync {
    async fn list_dependencies(&self) -> AppResult<Vec<Dependency>>;

    async fn get_dependency(&self, id: &str) -> AppResult<Dependency>;

    /// Dependencies declared by a component
    async fn list_dependencies_by_component(
        &self,
        component_id: &str,
    ) -> AppResult<Vec<Dependency>>;

    /// Persist a new dependency. Any client supplied ID is discarded.
    async fn create_dependency(&self, draft: DependencyDraft) -> AppResult<Dependency>;

    /// Replace an existing dependency. The stored ID is always `id`.
    async fn update_dependency(&self, id: &str, draft: DependencyDraft) -> AppResult<Dependency>;

    async fn delete_dependency(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of DependencyService using repository.
pub struct DependencyManager {
    repo: Arc<dyn DependencyRepository>,
}

impl DependencyManager {
    pub fn new(repo: Arc<dyn DependencyRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DependencyService for DependencyManager {
    async fn list_dependencies(&self) -> AppResult<Vec<Dependency>> {
        self.repo.list().await
    }

    async fn get_dependency(&self, id: &str) -> AppResult<Dependency> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_dependencies_by_component(
        &self,
        component_id: &str,
    ) -> AppResult<Vec<Dependency>> {
        self.repo.find_by_component(component_id).await
    }

    async fn create_dependency(&self, mut draft: DependencyDraft) -> AppResult<Dependency> {
        draft.id = None;
        let dependency = self.repo.save(draft).await?;
        info!(
            dependency_id = %dependency.id,
            component_id = %dependency.component_id,
            coordinates = %dependency.coordinates(),
            "Dependency added"
        );
        Ok(dependency)
    }

    async fn update_dependency(&self, id: &str, draft: DependencyDraft) -> AppResult<Dependency> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.save(draft.with_id(id)).await
    }

    async fn delete_dependency(&self, id: &str) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDependencyRepository;
    use chrono::Utc;

    fn dependency_from(draft: DependencyDraft) -> Dependency {
        let now = Utc::now();
        Dependency {
            id: draft.id.unwrap_or_else(|| "generated".to_string()),
            component_id: draft.component_id.unwrap_or_default(),
            group_id: draft.group_id.unwrap_or_default(),
            artifact_id: draft.artifact_id.unwrap_or_default(),
            version: draft.version.unwrap_or_default(),
            scope: draft.scope.unwrap_or_default(),
            description: draft.description,
            added_by_id: draft.added_by_id.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn guava() -> DependencyDraft {
        DependencyDraft {
            component_id: Some("c-1".to_string()),
            group_id: Some("com.google.guava".to_string()),
            artifact_id: Some("guava".to_string()),
            version: Some("33.0.0-jre".to_string()),
            scope: Some("implementation".to_string()),
            added_by_id: Some("demo-user-id".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_discards_client_id() {
        let mut repo = MockDependencyRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|draft| {
                assert!(draft.id.is_none());
                Ok(dependency_from(draft))
            });

        let service = DependencyManager::new(Arc::new(repo));
        let dependency = service
            .create_dependency(guava().with_id("client-chosen"))
            .await
            .unwrap();

        assert_eq!(dependency.id, "generated");
        assert_eq!(dependency.coordinates(), "com.google.guava:guava:33.0.0-jre");
    }

    #[tokio::test]
    async fn update_missing_dependency_writes_nothing() {
        let mut repo = MockDependencyRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_save().never();

        let service = DependencyManager::new(Arc::new(repo));

        assert!(matches!(
            service.update_dependency("missing", guava()).await,
            Err(AppError::NotFound)
        ));
    }
}
