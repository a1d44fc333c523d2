//! Domain layer - Catalog records shared by the data-access and HTTP layers.
//!
//! Records are plain data: relations are carried as foreign-key ids and
//! fetched explicitly, never as nested object graphs.

pub mod component;
pub mod constants;
pub mod dependency;
pub mod error;
pub mod project;
pub mod user;

pub use component::{Component, ComponentDraft};
pub use constants::*;
pub use dependency::{Dependency, DependencyDraft};
pub use error::{required, DomainError, DomainResult};
pub use project::{Project, ProjectDraft};
pub use user::{User, UserDraft, UserRole};
