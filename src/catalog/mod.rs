//! Read-only access to the mod catalog.
//!
//! The resolver only ever talks to a [`CatalogReader`]; in the server that is a
//! pooled [`PgConnection`] checked out for the duration of one request.

use sqlx::PgConnection;

use crate::{
    database::{
        repository::{dependencies, mod_files, mod_versions, mods},
        DatabaseError,
    },
    types::models::{
        dependency::ModDependency, mod_entity::Mod, mod_file::ModFile, mod_version::ModVersion,
    },
};

#[cfg(test)]
pub mod memory;

#[allow(async_fn_in_trait)]
pub trait CatalogReader {
    async fn get_mod(&mut self, mod_id: &str) -> Result<Option<Mod>, DatabaseError>;

    async fn get_version(
        &mut self,
        mod_id: &str,
        version_number: &str,
    ) -> Result<Option<ModVersion>, DatabaseError>;

    /// Ordered by the stored version string, descending.
    async fn get_latest_version(&mut self, mod_id: &str)
        -> Result<Option<ModVersion>, DatabaseError>;

    async fn get_versions_for_mods(
        &mut self,
        mod_ids: &[String],
    ) -> Result<Vec<ModVersion>, DatabaseError>;

    async fn get_files_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModFile>, DatabaseError>;

    async fn get_dependencies_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModDependency>, DatabaseError>;
}

impl CatalogReader for PgConnection {
    async fn get_mod(&mut self, mod_id: &str) -> Result<Option<Mod>, DatabaseError> {
        mods::get_one(mod_id, self).await
    }

    async fn get_version(
        &mut self,
        mod_id: &str,
        version_number: &str,
    ) -> Result<Option<ModVersion>, DatabaseError> {
        mod_versions::get_by_version_str(mod_id, version_number, self).await
    }

    async fn get_latest_version(
        &mut self,
        mod_id: &str,
    ) -> Result<Option<ModVersion>, DatabaseError> {
        mod_versions::get_latest_for_mod(mod_id, self).await
    }

    async fn get_versions_for_mods(
        &mut self,
        mod_ids: &[String],
    ) -> Result<Vec<ModVersion>, DatabaseError> {
        mod_versions::get_for_mods(mod_ids, self).await
    }

    async fn get_files_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModFile>, DatabaseError> {
        mod_files::get_for_versions(version_ids, self).await
    }

    async fn get_dependencies_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModDependency>, DatabaseError> {
        dependencies::get_for_versions(version_ids, self).await
    }
}
