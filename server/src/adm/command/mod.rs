pub mod list_release_files;
pub mod migrate_database;
