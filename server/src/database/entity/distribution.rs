//! A distribution channel of a release.

use sea_orm::entity::prelude::*;

pub type DistributionModel = Model;

/// A distribution channel of a release.
///
/// Distributions further scope the artifacts of a release, e.g. to
/// a per-platform build. Their names are unique within a release
/// and take part in release file ident derivation.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "distribution")]
pub struct Model {
    /// Unique numeric ID of the distribution.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// ID of the release the distribution belongs to.
    #[sea_orm(indexed)]
    pub release_id: i64,

    /// Name of the distribution channel.
    #[sea_orm(column_type = "String(StringLen::N(64))", indexed)]
    pub name: String,

    /// Timestamp when the distribution is created.
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::release::Entity",
        from = "Column::ReleaseId",
        to = "super::release::Column::Id"
    )]
    Release,

    #[sea_orm(has_many = "super::release_file::Entity")]
    ReleaseFile,
}

impl Related<super::release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Release.def()
    }
}

impl Related<super::release_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
