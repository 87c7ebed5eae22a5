//! Dependency resolution over the mod catalog.
//!
//! Every operation here is all-or-nothing: a failed catalog read aborts the
//! whole resolution and nothing partial is handed back to the caller.

use crate::database::DatabaseError;

pub mod closure;
pub mod downloads;
pub mod manifest;
pub mod required;

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("Mod not found")]
    ModNotFound,
    #[error("Version not found")]
    VersionNotFound,
    #[error("No files found for this version")]
    FilesNotFound,
    #[error("No dependencies found")]
    DependenciesNotFound,
    #[error("{0}")]
    Database(#[from] DatabaseError),
}
