//! Dependency database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Dependency;

use crate::repository::audit::Auditable;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dependencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub component_id: String,
    #[sea_orm(column_type = "Text")]
    pub group_id: String,
    #[sea_orm(column_type = "Text")]
    pub artifact_id: String,
    #[sea_orm(column_type = "Text")]
    pub version: String,
    #[sea_orm(column_type = "Text")]
    pub scope: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "added_by")]
    pub added_by_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::component::Entity",
        from = "Column::ComponentId",
        to = "super::component::Column::Id",
        on_delete = "Cascade"
    )]
    Component,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AddedById",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Component.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Auditable for ActiveModel {
    fn set_created_at(&mut self, at: DateTimeUtc) {
        self.created_at = Set(at);
    }

    fn set_updated_at(&mut self, at: DateTimeUtc) {
        self.updated_at = Set(at);
    }
}

/// Convert database model to domain entity
impl From<Model> for Dependency {
    fn from(model: Model) -> Self {
        Dependency {
            id: model.id,
            component_id: model.component_id,
            group_id: model.group_id,
            artifact_id: model.artifact_id,
            version: model.version,
            scope: model.scope,
            description: model.description,
            added_by_id: model.added_by_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
