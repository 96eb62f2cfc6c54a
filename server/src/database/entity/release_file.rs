//! An association between a release and a file.
//!
//! The ident of the association is derived from its name and the
//! name of the distribution it is scoped to, and is unique within
//! a release.

use sea_orm::entity::prelude::*;

use crate::error::{ServerError, ServerResult};
use depot::ident::ReleaseFileIdent;

pub type ReleaseFileModel = Model;

/// An association between a release and a file.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "release_file")]
pub struct Model {
    /// Unique numeric ID of the association.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// ID of the organization the release belongs to.
    #[sea_orm(indexed)]
    pub organization_id: i64,

    /// ID of the project the artifact was uploaded under, when known.
    ///
    /// Never negative when present.
    pub project_id: Option<i64>,

    /// ID of the release the file is attached to.
    #[sea_orm(indexed)]
    pub release_id: i64,

    /// ID of the stored file blob.
    pub file_id: i64,

    /// The derived identifier of the association.
    ///
    /// This is the SHA-1 digest of the name (and the distribution
    /// name, when one is set) in hexadecimal format. Unique within
    /// a release.
    #[sea_orm(column_type = "String(StringLen::N(40))", indexed)]
    pub ident: String,

    /// Name of the artifact within the release (e.g., a URL path).
    pub name: String,

    /// ID of the distribution the artifact is scoped to.
    ///
    /// This is NULL when the artifact applies to the entire release.
    #[sea_orm(indexed)]
    pub distribution_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,

    #[sea_orm(
        belongs_to = "super::release::Entity",
        from = "Column::ReleaseId",
        to = "super::release::Column::Id"
    )]
    Release,

    #[sea_orm(
        belongs_to = "super::file::Entity",
        from = "Column::FileId",
        to = "super::file::Column::Id"
    )]
    File,

    #[sea_orm(
        belongs_to = "super::distribution::Entity",
        from = "Column::DistributionId",
        to = "super::distribution::Column::Id"
    )]
    Distribution,
}

impl Model {
    /// Parses the stored ident column.
    pub fn ident(&self) -> ServerResult<ReleaseFileIdent> {
        ReleaseFileIdent::from_hex(&self.ident).map_err(ServerError::from)
    }
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Release.def()
    }
}

impl Related<super::file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::File.def()
    }
}

impl Related<super::distribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distribution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
