//! An organization owning releases.

use sea_orm::entity::prelude::*;

pub type OrganizationModel = Model;

/// An organization owning releases.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    /// Unique numeric ID of the organization.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Unique URL-safe slug of the organization.
    #[sea_orm(column_type = "String(StringLen::N(50))", unique, indexed)]
    pub slug: String,

    /// Human-readable name of the organization.
    pub name: String,

    /// Timestamp when the organization is created.
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::release::Entity")]
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
