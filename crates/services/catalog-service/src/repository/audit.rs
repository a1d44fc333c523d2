//! Audit stamping and identifier assignment for writes.
//!
//! Every repository calls these explicitly on its save path: inserts get
//! both timestamps and, when absent, a fresh identifier; updates only move
//! `updated_at`.

use chrono::Utc;
use sea_orm::entity::prelude::DateTimeUtc;
use uuid::Uuid;

/// Active models carrying `created_at` / `updated_at` audit columns.
pub trait Auditable {
    fn set_created_at(&mut self, at: DateTimeUtc);
    fn set_updated_at(&mut self, at: DateTimeUtc);
}

/// Stamp both audit columns with the same instant.
pub fn stamp_insert<A: Auditable>(model: &mut A) {
    let now = Utc::now();
    model.set_created_at(now);
    model.set_updated_at(now);
}

/// Refresh `updated_at`; `created_at` is left as stored.
pub fn stamp_update<A: Auditable>(model: &mut A) {
    model.set_updated_at(Utc::now());
}

/// Identifier for a record inserted without one.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
