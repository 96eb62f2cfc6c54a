//! A release of a software project.

use sea_orm::entity::prelude::*;

pub type ReleaseModel = Model;

/// A release of a software project.
///
/// A release groups the set of files produced from one version of
/// the software. Version strings are unique within an organization.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "release")]
pub struct Model {
    /// Unique numeric ID of the release.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// ID of the organization the release belongs to.
    #[sea_orm(indexed)]
    pub organization_id: i64,

    /// The version string of the release.
    #[sea_orm(indexed)]
    pub version: String,

    /// Timestamp when the release is created.
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,

    #[sea_orm(has_many = "super::distribution::Entity")]
    Distribution,

    #[sea_orm(has_many = "super::release_file::Entity")]
    ReleaseFile,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::distribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distribution.def()
    }
}

impl Related<super::release_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
