use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

use super::entity::distribution::{self, DistributionModel};
use super::entity::file::{self, FileModel};
use super::entity::organization::{self, OrganizationModel};
use super::entity::release::{self, ReleaseModel};
use super::migration::{Migrator, MigratorTrait};
use super::{AddReleaseFile, DepotDatabase};
use crate::error::ServerError;
use depot::ident::ReleaseFileIdent;

async fn test_database() -> DatabaseConnection {
    // A pooled in-memory SQLite database is one database per
    // connection, so the pool must be restricted to a single one.
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    db
}

async fn add_organization(db: &DatabaseConnection, slug: &str) -> OrganizationModel {
    organization::ActiveModel {
        slug: Set(slug.to_string()),
        name: Set(slug.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn add_release(
    db: &DatabaseConnection,
    organization: &OrganizationModel,
    version: &str,
) -> ReleaseModel {
    release::ActiveModel {
        organization_id: Set(organization.id),
        version: Set(version.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn add_file(db: &DatabaseConnection, name: &str) -> FileModel {
    file::ActiveModel {
        name: Set(name.to_string()),
        checksum: Set(None),
        size: Set(Some(4096)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn add_distribution(
    db: &DatabaseConnection,
    release: &ReleaseModel,
    name: &str,
) -> DistributionModel {
    distribution::ActiveModel {
        release_id: Set(release.id),
        name: Set(name.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

fn add_release_file(
    organization: &OrganizationModel,
    release: &ReleaseModel,
    file: &FileModel,
    name: &str,
) -> AddReleaseFile {
    AddReleaseFile {
        organization_id: organization.id,
        project_id: None,
        release_id: release.id,
        file_id: file.id,
        name: name.to_string(),
        distribution: None,
        ident: None,
    }
}

#[tokio::test]
async fn test_create_release_file() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;

    let release_file = db
        .create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    assert_eq!("4a68969ef8e858229267b842dedf42ab5dde4d50", release_file.ident);
    assert_eq!("app.js", release_file.name);
    assert_eq!(release.id, release_file.release_id);
    assert_eq!(None, release_file.distribution_id);
    assert_eq!(
        ReleaseFileIdent::derive("app.js", None),
        release_file.ident().unwrap()
    );

    let found = db
        .find_release_file(release.id, &release_file.ident().unwrap())
        .await
        .unwrap();
    assert_eq!(release_file, found);
}

#[tokio::test]
async fn test_create_release_file_with_distribution() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;
    let ios = add_distribution(&db, &release, "ios").await;

    let mut add = add_release_file(&org, &release, &file, "app.js");
    add.distribution = Some(ios.clone());

    let release_file = db.create_release_file(add).await.unwrap();

    assert_eq!("6edf77942c2bb820f84b81dbfbfedef49abd4938", release_file.ident);
    assert_eq!(Some(ios.id), release_file.distribution_id);
}

#[tokio::test]
async fn test_create_release_file_explicit_ident() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;

    let explicit =
        ReleaseFileIdent::from_hex("ffffffffffffffffffffffffffffffffffffffff").unwrap();

    let mut add = add_release_file(&org, &release, &file, "app.js");
    add.ident = Some(explicit);

    let release_file = db.create_release_file(add).await.unwrap();

    // The explicit ident wins over derivation.
    assert_eq!(explicit, release_file.ident().unwrap());
    assert_ne!(
        ReleaseFileIdent::derive("app.js", None),
        release_file.ident().unwrap()
    );
}

#[tokio::test]
async fn test_rename_recomputes_ident() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;

    let release_file = db
        .create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    let renamed = db
        .rename_release_file(release_file, "main.js".to_string(), None, None)
        .await
        .unwrap();

    assert_eq!("main.js", renamed.name);
    assert_eq!("c4a4248f7568c9e41265502c39b0daeb8b635431", renamed.ident);

    let found = db
        .find_release_file(release.id, &renamed.ident().unwrap())
        .await
        .unwrap();
    assert_eq!(renamed, found);

    // The old ident no longer resolves.
    let old = ReleaseFileIdent::derive("app.js", None);
    assert!(matches!(
        db.find_release_file(release.id, &old).await,
        Err(ServerError::NoSuchReleaseFile)
    ));
}

#[tokio::test]
async fn test_distribution_reassignment_recomputes_ident() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;
    let ios = add_distribution(&db, &release, "ios").await;

    let release_file = db
        .create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    // Same name, new distribution: the ident must follow.
    let moved = db
        .rename_release_file(release_file, "app.js".to_string(), Some(ios.clone()), None)
        .await
        .unwrap();

    assert_eq!("6edf77942c2bb820f84b81dbfbfedef49abd4938", moved.ident);
    assert_eq!(Some(ios.id), moved.distribution_id);
}

#[tokio::test]
async fn test_rename_explicit_ident() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;

    let release_file = db
        .create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    let explicit =
        ReleaseFileIdent::from_hex("ffffffffffffffffffffffffffffffffffffffff").unwrap();

    let renamed = db
        .rename_release_file(release_file, "main.js".to_string(), None, Some(explicit))
        .await
        .unwrap();

    assert_eq!("main.js", renamed.name);
    assert_eq!(explicit, renamed.ident().unwrap());
}

#[tokio::test]
async fn test_duplicate_ident_rejected() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;

    db.create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    // Same name, same release: same derived ident.
    assert!(matches!(
        db.create_release_file(add_release_file(&org, &release, &file, "app.js"))
            .await,
        Err(ServerError::ReleaseFileAlreadyExists)
    ));

    // The same name under another release is fine.
    let other = add_release(&db, &org, "2.0.0").await;
    db.create_release_file(add_release_file(&org, &other, &file, "app.js"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_find_release_file_with_file() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "app.js").await;
    let ios = add_distribution(&db, &release, "ios").await;

    let plain = db
        .create_release_file(add_release_file(&org, &release, &file, "app.js"))
        .await
        .unwrap();

    let mut add = add_release_file(&org, &release, &file, "app.js");
    add.distribution = Some(ios.clone());
    let scoped = db.create_release_file(add).await.unwrap();

    let (found, found_file, found_dist) = db
        .find_release_file_with_file(release.id, &plain.ident().unwrap())
        .await
        .unwrap();
    assert_eq!(plain, found);
    assert_eq!(file, found_file);
    assert_eq!(None, found_dist);

    let (found, found_file, found_dist) = db
        .find_release_file_with_file(release.id, &scoped.ident().unwrap())
        .await
        .unwrap();
    assert_eq!(scoped, found);
    assert_eq!(file, found_file);
    assert_eq!(Some(ios), found_dist);

    let unknown = ReleaseFileIdent::derive("missing.js", None);
    assert!(matches!(
        db.find_release_file_with_file(release.id, &unknown).await,
        Err(ServerError::NoSuchReleaseFile)
    ));
}

#[tokio::test]
async fn test_list_release_files() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let file = add_file(&db, "bundle").await;

    for name in ["vendor.js", "app.js", "main.js"] {
        db.create_release_file(add_release_file(&org, &release, &file, name))
            .await
            .unwrap();
    }

    let files = db.list_release_files(release.id).await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(vec!["app.js", "main.js", "vendor.js"], names);

    let empty = add_release(&db, &org, "2.0.0").await;
    assert!(db.list_release_files(empty.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_distribution() {
    let db = test_database().await;
    let org = add_organization(&db, "sagittarius").await;
    let release = add_release(&db, &org, "1.2.3").await;
    let ios = add_distribution(&db, &release, "ios").await;

    let found = db.find_distribution(release.id, "ios").await.unwrap();
    assert_eq!(ios, found);

    assert!(matches!(
        db.find_distribution(release.id, "android").await,
        Err(ServerError::NoSuchDistribution)
    ));
}
