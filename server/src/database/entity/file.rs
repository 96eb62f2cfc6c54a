//! A stored file blob.

use sea_orm::entity::prelude::*;

pub type FileModel = Model;

/// A stored file blob.
///
/// The blob itself lives in the storage backend. Several release
/// files may point to the same blob under different names.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "file")]
pub struct Model {
    /// Unique numeric ID of the file.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Name the file was uploaded as.
    pub name: String,

    /// SHA-1 checksum of the blob contents, in hexadecimal format.
    #[sea_orm(column_type = "String(StringLen::N(40))")]
    pub checksum: Option<String>,

    /// Size of the blob in bytes.
    pub size: Option<i64>,

    /// Timestamp when the file is created.
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::release_file::Entity")]
    ReleaseFile,
}

impl Related<super::release_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
