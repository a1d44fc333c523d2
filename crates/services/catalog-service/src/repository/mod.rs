//! Repository layer for data access.
//!
//! One repository per entity. Each is a thin pass-through to the store:
//! list, find, exists, save (insert or update) and delete, plus the
//! foreign-key lookups its callers need.

pub mod audit;
pub mod entities;
mod component_repository;
mod dependency_repository;
mod project_repository;
mod user_repository;

pub use component_repository::{ComponentRepository, ComponentStore};
pub use dependency_repository::{DependencyRepository, DependencyStore};
pub use project_repository::{ProjectRepository, ProjectStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use component_repository::MockComponentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use dependency_repository::MockDependencyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use project_repository::MockProjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Escape LIKE wildcards so user input matches literally (escape char `\`).
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_guards_wildcards() {
        assert_eq!(escape_like("alpha"), "alpha");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
