//! Migration: Create dependencies table.
//!
//! Rows go away with their component; the attributing user cannot be
//! removed while it still has dependencies.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dependencies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Dependencies::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Dependencies::ComponentId).string().not_null())
                    .col(ColumnDef::new(Dependencies::GroupId).text().not_null())
                    .col(ColumnDef::new(Dependencies::ArtifactId).text().not_null())
                    .col(ColumnDef::new(Dependencies::Version).text().not_null())
                    .col(ColumnDef::new(Dependencies::Scope).text().not_null())
                    .col(ColumnDef::new(Dependencies::Description).text().null())
                    .col(ColumnDef::new(Dependencies::AddedBy).string().not_null())
                    .col(
                        ColumnDef::new(Dependencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Dependencies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dependencies_component_id")
                            .from(Dependencies::Table, Dependencies::ComponentId)
                            .to(Components::Table, Components::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dependencies_added_by")
                            .from(Dependencies::Table, Dependencies::AddedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dependencies_component_id")
                    .table(Dependencies::Table)
                    .col(Dependencies::ComponentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dependencies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Dependencies {
    Table,
    Id,
    ComponentId,
    GroupId,
    ArtifactId,
    Version,
    Scope,
    Description,
    AddedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Components {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
