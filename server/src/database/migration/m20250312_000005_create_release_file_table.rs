use sea_orm_migration::prelude::*;

use crate::database::entity::distribution;
use crate::database::entity::file;
use crate::database::entity::organization;
use crate::database::entity::release;
use crate::database::entity::release_file::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250312_000005_create_release_file_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Column::OrganizationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Column::ProjectId).big_integer().null())
                    .col(ColumnDef::new(Column::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(Column::FileId).big_integer().not_null())
                    .col(ColumnDef::new(Column::Ident).string_len(40).not_null())
                    .col(ColumnDef::new(Column::Name).string().not_null())
                    .col(
                        ColumnDef::new(Column::DistributionId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_release_file_organization")
                            .from_tbl(Entity)
                            .from_col(Column::OrganizationId)
                            .to_tbl(organization::Entity)
                            .to_col(organization::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_release_file_release")
                            .from_tbl(Entity)
                            .from_col(Column::ReleaseId)
                            .to_tbl(release::Entity)
                            .to_col(release::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_release_file_file")
                            .from_tbl(Entity)
                            .from_col(Column::FileId)
                            .to_tbl(file::Entity)
                            .to_col(file::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_release_file_distribution")
                            .from_tbl(Entity)
                            .from_col(Column::DistributionId)
                            .to_tbl(distribution::Entity)
                            .to_col(distribution::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-release-file-release-ident")
                    .table(Entity)
                    .col(Column::ReleaseId)
                    .col(Column::Ident)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}
