use sea_orm_migration::prelude::*;

use crate::database::entity::distribution::*;
use crate::database::entity::release;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250312_000004_create_distribution_table"
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
                    .col(ColumnDef::new(Column::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(Column::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_distribution_release")
                            .from_tbl(Entity)
                            .from_col(Column::ReleaseId)
                            .to_tbl(release::Entity)
                            .to_col(release::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-distribution-release-name")
                    .table(Entity)
                    .col(Column::ReleaseId)
                    .col(Column::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}
