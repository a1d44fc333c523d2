//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::audit::{new_id, stamp_insert, stamp_update};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{User, UserDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, newest first
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Check whether a user with this ID exists
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert when the draft has no ID or an unknown one, otherwise replace
    /// the stored record. A missing role becomes `member`.
    async fn save(&self, draft: UserDraft) -> AppResult<User>;

    /// Delete user by ID. Returns whether a row was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let count = UserEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, draft: UserDraft) -> AppResult<User> {
        let role = String::from(draft.role.unwrap_or_default());

        let existing = match draft.id.as_deref() {
            Some(id) => UserEntity::find_by_id(id).one(&self.db).await?,
            None => None,
        };

        let model = match existing {
            Some(current) => {
                let mut active: ActiveModel = current.into();
                active.email = Set(draft.email);
                active.first_name = Set(draft.first_name);
                active.last_name = Set(draft.last_name);
                active.profile_image_url = Set(draft.profile_image_url);
                active.role = Set(role);
                stamp_update(&mut active);
                active.update(&self.db).await?
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(draft.id.unwrap_or_else(new_id)),
                    email: Set(draft.email),
                    first_name: Set(draft.first_name),
                    last_name: Set(draft.last_name),
                    profile_image_url: Set(draft.profile_image_url),
                    role: Set(role),
                    ..Default::default()
                };
                stamp_insert(&mut active);
                active.insert(&self.db).await?
            }
        };

        Ok(User::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
