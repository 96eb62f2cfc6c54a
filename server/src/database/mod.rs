pub mod entity;
pub mod migration;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::query::{JoinType, QueryOrder, QuerySelect, QueryTrait};
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult};
use sea_orm::{Iterable as EnumIterable, Select, SqlErr};

use crate::error::{ServerError, ServerResult};
use depot::ident::ReleaseFileIdent;
use entity::distribution::{self, DistributionModel, Entity as Distribution};
use entity::file::{self, FileModel};
use entity::release_file::{self, Entity as ReleaseFile, ReleaseFileModel};

const SELECT_RELEASE_FILE: &str = "RF_";
const SELECT_FILE: &str = "F_";
const SELECT_DISTRIBUTION: &str = "D_";

/// A new release file to be inserted.
#[derive(Debug, Clone)]
pub struct AddReleaseFile {
    /// ID of the organization the release belongs to.
    pub organization_id: i64,

    /// ID of the project the artifact was uploaded under, when known.
    pub project_id: Option<i64>,

    /// ID of the release to attach the file to.
    pub release_id: i64,

    /// ID of the stored file blob.
    pub file_id: i64,

    /// Name of the artifact within the release.
    pub name: String,

    /// Distribution the artifact is scoped to.
    pub distribution: Option<DistributionModel>,

    /// Explicit ident of the association.
    ///
    /// When absent, the ident is derived from the name and the
    /// distribution name. An explicitly supplied ident is persisted
    /// untouched.
    pub ident: Option<ReleaseFileIdent>,
}

#[async_trait]
pub trait DepotDatabase: Send + Sync {
    /// Attaches a file to a release.
    ///
    /// A duplicate `(release, ident)` pair is rejected by the
    /// database's unique index and surfaces as
    /// [`ServerError::ReleaseFileAlreadyExists`]. No corrective
    /// action is taken.
    async fn create_release_file(&self, add: AddReleaseFile) -> ServerResult<ReleaseFileModel>;

    /// Renames a release file or moves it to another distribution.
    ///
    /// The ident follows its inputs: it is recomputed from the new
    /// name and distribution unless the caller supplies one
    /// explicitly.
    async fn rename_release_file(
        &self,
        release_file: ReleaseFileModel,
        new_name: String,
        new_distribution: Option<DistributionModel>,
        ident: Option<ReleaseFileIdent>,
    ) -> ServerResult<ReleaseFileModel>;

    /// Retrieves a release file by its ident.
    async fn find_release_file(
        &self,
        release_id: i64,
        ident: &ReleaseFileIdent,
    ) -> ServerResult<ReleaseFileModel>;

    /// Retrieves a release file by its ident, returning the file
    /// blob and the distribution it is scoped to as well.
    async fn find_release_file_with_file(
        &self,
        release_id: i64,
        ident: &ReleaseFileIdent,
    ) -> ServerResult<(ReleaseFileModel, FileModel, Option<DistributionModel>)>;

    /// Lists the files attached to a release, ordered by name.
    async fn list_release_files(&self, release_id: i64) -> ServerResult<Vec<ReleaseFileModel>>;

    /// Retrieves a distribution of a release by name.
    async fn find_distribution(
        &self,
        release_id: i64,
        name: &str,
    ) -> ServerResult<DistributionModel>;
}

fn prefix_column<E: EntityTrait, S: QuerySelect>(mut select: S, prefix: &str) -> S {
    for col in <E::Column as EnumIterable>::iter() {
        let alias = format!("{}{}", prefix, Iden::to_string(&col));
        select = select.column_as(col, alias);
    }
    select
}

/// Resolves the ident of an association.
///
/// An explicitly supplied ident wins over derivation.
fn resolve_ident(
    explicit: Option<ReleaseFileIdent>,
    name: &str,
    distribution: Option<&DistributionModel>,
) -> ReleaseFileIdent {
    match explicit {
        Some(ident) => ident,
        None => ReleaseFileIdent::derive(name, distribution.map(|d| d.name.as_str())),
    }
}

pub fn build_release_file_query() -> Select<ReleaseFile> {
    /*
        Build something like:

        select * from release_file
        inner join file
            on release_file.file_id = file.id
        left join distribution
            on release_file.distribution_id = distribution.id
        where
            release_file.release_id = 42 and
            release_file.ident = '4a68969ef8e858229267b842dedf42ab5dde4d50'

        Returns (ReleaseFileModel, FileModel, Option<DistributionModel>).

        The distribution join is a left join since most artifacts
        are not scoped to a distribution. Each artifact download
        submits a single query.
    */
    let mut query = ReleaseFile::find()
        .select_only()
        .join(JoinType::InnerJoin, release_file::Relation::File.def())
        .join(
            JoinType::LeftJoin,
            release_file::Relation::Distribution.def(),
        );

    query = prefix_column::<release_file::Entity, _>(query, SELECT_RELEASE_FILE);
    query = prefix_column::<file::Entity, _>(query, SELECT_FILE);
    query = prefix_column::<distribution::Entity, _>(query, SELECT_DISTRIBUTION);

    query
}

#[async_trait]
impl DepotDatabase for DatabaseConnection {
    async fn create_release_file(&self, add: AddReleaseFile) -> ServerResult<ReleaseFileModel> {
        let ident = resolve_ident(add.ident, &add.name, add.distribution.as_ref());

        let model = release_file::ActiveModel {
            organization_id: Set(add.organization_id),
            project_id: Set(add.project_id),
            release_id: Set(add.release_id),
            file_id: Set(add.file_id),
            ident: Set(ident.to_hex()),
            name: Set(add.name),
            distribution_id: Set(add.distribution.map(|d| d.id)),
            ..Default::default()
        };

        model.insert(self).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ServerError::ReleaseFileAlreadyExists,
            _ => ServerError::database_error(e),
        })
    }

    async fn rename_release_file(
        &self,
        release_file: ReleaseFileModel,
        new_name: String,
        new_distribution: Option<DistributionModel>,
        ident: Option<ReleaseFileIdent>,
    ) -> ServerResult<ReleaseFileModel> {
        let ident = resolve_ident(ident, &new_name, new_distribution.as_ref());

        ReleaseFile::update(release_file::ActiveModel {
            id: Set(release_file.id),
            ident: Set(ident.to_hex()),
            name: Set(new_name),
            distribution_id: Set(new_distribution.map(|d| d.id)),
            ..Default::default()
        })
        .exec(self)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ServerError::ReleaseFileAlreadyExists,
            _ if matches!(e, DbErr::RecordNotUpdated) => ServerError::NoSuchReleaseFile,
            _ => ServerError::database_error(e),
        })
    }

    async fn find_release_file(
        &self,
        release_id: i64,
        ident: &ReleaseFileIdent,
    ) -> ServerResult<ReleaseFileModel> {
        ReleaseFile::find()
            .filter(release_file::Column::ReleaseId.eq(release_id))
            .filter(release_file::Column::Ident.eq(ident.to_hex()))
            .one(self)
            .await
            .map_err(ServerError::database_error)?
            .ok_or(ServerError::NoSuchReleaseFile)
    }

    async fn find_release_file_with_file(
        &self,
        release_id: i64,
        ident: &ReleaseFileIdent,
    ) -> ServerResult<(ReleaseFileModel, FileModel, Option<DistributionModel>)> {
        let stmt = build_release_file_query()
            .filter(release_file::Column::ReleaseId.eq(release_id))
            .filter(release_file::Column::Ident.eq(ident.to_hex()))
            .build(self.get_database_backend());

        let result = self
            .query_one(stmt)
            .await
            .map_err(ServerError::database_error)?
            .ok_or(ServerError::NoSuchReleaseFile)?;

        let release_file = release_file::Model::from_query_result(&result, SELECT_RELEASE_FILE)
            .map_err(ServerError::database_error)?;
        let file = file::Model::from_query_result(&result, SELECT_FILE)
            .map_err(ServerError::database_error)?;

        let distribution = {
            let distribution_id: Option<i64> = result
                .try_get(SELECT_DISTRIBUTION, distribution::Column::Id.as_str())
                .map_err(ServerError::database_error)?;

            if distribution_id.is_some() {
                Some(
                    distribution::Model::from_query_result(&result, SELECT_DISTRIBUTION)
                        .map_err(ServerError::database_error)?,
                )
            } else {
                None
            }
        };

        Ok((release_file, file, distribution))
    }

    async fn list_release_files(&self, release_id: i64) -> ServerResult<Vec<ReleaseFileModel>> {
        ReleaseFile::find()
            .filter(release_file::Column::ReleaseId.eq(release_id))
            .order_by_asc(release_file::Column::Name)
            .all(self)
            .await
            .map_err(ServerError::database_error)
    }

    async fn find_distribution(
        &self,
        release_id: i64,
        name: &str,
    ) -> ServerResult<DistributionModel> {
        Distribution::find()
            .filter(distribution::Column::ReleaseId.eq(release_id))
            .filter(distribution::Column::Name.eq(name))
            .one(self)
            .await
            .map_err(ServerError::database_error)?
            .ok_or(ServerError::NoSuchDistribution)
    }
}
