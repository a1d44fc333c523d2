//! Migration: Create components table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Components::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Components::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Components::ProjectId).string().not_null())
                    .col(ColumnDef::new(Components::Name).text().not_null())
                    .col(ColumnDef::new(Components::Description).text().null())
                    .col(ColumnDef::new(Components::SubmodulePath).text().null())
                    .col(
                        ColumnDef::new(Components::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Components::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_components_project_id")
                            .from(Components::Table, Components::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_components_project_id")
                    .table(Components::Table)
                    .col(Components::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Components::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Components {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    SubmodulePath,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}
