//! Project repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::audit::{new_id, stamp_insert, stamp_update};
use super::entities::project::{self, ActiveModel, Entity as ProjectEntity};
use super::escape_like;
use common::AppResult;
use domain::{required, Project, ProjectDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Project repository trait for dependency injection.
///
/// Lists are ordered newest first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List all projects
    async fn list(&self) -> AppResult<Vec<Project>>;

    /// Find project by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>>;

    /// Projects whose name contains `needle`, ignoring case (Unicode-aware)
    async fn find_by_name_containing(&self, needle: &str) -> AppResult<Vec<Project>>;

    /// Projects created by the given user
    async fn find_by_creator(&self, user_id: &str) -> AppResult<Vec<Project>>;

    /// Check whether a project with this ID exists
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert when the draft has no ID or an unknown one, otherwise replace
    /// the stored record. `created_at` survives replacement.
    async fn save(&self, draft: ProjectDraft) -> AppResult<Project>;

    /// Delete by ID; components and their dependencies go with it.
    /// Returns whether a row was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of ProjectRepository
pub struct ProjectStore {
    db: DatabaseConnection,
}

impl ProjectStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectStore {
    async fn list(&self) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>> {
        let result = ProjectEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Project::from))
    }

    async fn find_by_name_containing(&self, needle: &str) -> AppResult<Vec<Project>> {
        let needle = needle.to_lowercase();

        // SQLite's LOWER() only folds ASCII, so non-ASCII names are matched here
        if self.db.get_database_backend() == DbBackend::Sqlite {
            let models = ProjectEntity::find()
                .order_by_desc(project::Column::CreatedAt)
                .all(&self.db)
                .await?;

            return Ok(models
                .into_iter()
                .filter(|model| model.name.to_lowercase().contains(&needle))
                .map(Project::from)
                .collect());
        }

        let pattern = format!("%{}%", escape_like(&needle));
        let models = ProjectEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(project::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn find_by_creator(&self, user_id: &str) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .filter(project::Column::CreatedById.eq(user_id))
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let count = ProjectEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, draft: ProjectDraft) -> AppResult<Project> {
        let name = required("name", draft.name)?;

        let existing = match draft.id.as_deref() {
            Some(id) => ProjectEntity::find_by_id(id).one(&self.db).await?,
            None => None,
        };

        let model = match existing {
            Some(current) => {
                let mut active: ActiveModel = current.into();
                active.name = Set(name);
                active.description = Set(draft.description);
                active.repository_url = Set(draft.repository_url);
                active.created_by_id = Set(draft.created_by_id);
                stamp_update(&mut active);
                active.update(&self.db).await?
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(draft.id.unwrap_or_else(new_id)),
                    name: Set(name),
                    description: Set(draft.description),
                    repository_url: Set(draft.repository_url),
                    created_by_id: Set(draft.created_by_id),
                    ..Default::default()
                };
                stamp_insert(&mut active);
                active.insert(&self.db).await?
            }
        };

        Ok(Project::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = ProjectEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
