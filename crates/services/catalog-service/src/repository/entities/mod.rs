//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod component;
pub mod dependency;
pub mod project;
pub mod user;
