//! User service - Lookups and owner provisioning.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppResult, OptionExt};
use domain::{User, UserDraft, UserRole, DEFAULT_OWNER_EMAIL};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Make sure the placeholder owner row exists so that records created
    /// without an authenticated user can reference it.
    async fn ensure_default_owner(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn ensure_default_owner(&self, id: &str) -> AppResult<User> {
        if let Some(user) = self.repo.find_by_id(id).await? {
            return Ok(user);
        }

        let user = self
            .repo
            .save(UserDraft {
                id: Some(id.to_string()),
                email: Some(DEFAULT_OWNER_EMAIL.to_string()),
                first_name: Some("Demo".to_string()),
                last_name: Some("User".to_string()),
                profile_image_url: None,
                role: Some(UserRole::Member),
            })
            .await?;

        info!(user_id = %user.id, "Provisioned default owner");
        Ok(user)
    }
}
