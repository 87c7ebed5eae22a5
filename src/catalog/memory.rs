use crate::{
    database::DatabaseError,
    types::models::{
        dependency::{DependencyType, ModDependency},
        mod_entity::Mod,
        mod_file::ModFile,
        mod_version::ModVersion,
    },
};

use super::CatalogReader;

/// Catalog held in plain vectors, with per-operation call counters.
#[derive(Default)]
pub struct MemoryCatalog {
    mods: Vec<Mod>,
    versions: Vec<ModVersion>,
    files: Vec<ModFile>,
    dependencies: Vec<ModDependency>,
    /// Dependency lookups beyond this many calls fail
    fail_dependencies_after: Option<usize>,
    pub dependency_lookups: usize,
    pub version_lookups: usize,
    pub file_lookups: usize,
}

impl MemoryCatalog {
    pub fn with_mod(mut self, mod_id: &str) -> Self {
        self.mods.push(Mod {
            mod_id: mod_id.into(),
            mod_name: format!("{mod_id} name"),
            mod_author: "nim".into(),
            mod_description: None,
            mod_tags: None,
            mod_icon: None,
            forum_url: None,
            github_url: None,
            donation_url: None,
            mod_release_date: None,
        });
        self
    }

    pub fn with_version(mut self, id: i32, mod_id: &str, version_number: &str) -> Self {
        self.versions.push(ModVersion {
            mod_version_id: id,
            mod_id: mod_id.into(),
            version_number: version_number.into(),
            release_date: None,
            changelog: None,
        });
        self
    }

    pub fn with_file(mut self, version_id: i32, file_url: &str, file_type: &str) -> Self {
        let file_id = self.files.len() as i32 + 1;
        self.files.push(ModFile {
            file_id,
            mod_version_id: version_id,
            file_type: file_type.into(),
            file_size: 1024,
            file_url: file_url.into(),
            upload_date: None,
        });
        self
    }

    pub fn with_dependency(
        mut self,
        version_id: i32,
        dependency_mod_id: &str,
        dependency_type: DependencyType,
    ) -> Self {
        let id = self.dependencies.len() as i32 + 1;
        self.dependencies.push(ModDependency {
            id,
            mod_version_id: version_id,
            dependency_mod_id: dependency_mod_id.into(),
            minimum_dependency_version: None,
            maximum_dependency_version: None,
            dependency_type,
        });
        self
    }

    pub fn failing_dependencies_after(mut self, calls: usize) -> Self {
        self.fail_dependencies_after = Some(calls);
        self
    }
}

impl CatalogReader for MemoryCatalog {
    async fn get_mod(&mut self, mod_id: &str) -> Result<Option<Mod>, DatabaseError> {
        Ok(self.mods.iter().find(|m| m.mod_id == mod_id).cloned())
    }

    async fn get_version(
        &mut self,
        mod_id: &str,
        version_number: &str,
    ) -> Result<Option<ModVersion>, DatabaseError> {
        Ok(self
            .versions
            .iter()
            .find(|v| v.mod_id == mod_id && v.version_number == version_number)
            .cloned())
    }

    async fn get_latest_version(
        &mut self,
        mod_id: &str,
    ) -> Result<Option<ModVersion>, DatabaseError> {
        Ok(self
            .versions
            .iter()
            .filter(|v| v.mod_id == mod_id)
            .max_by(|a, b| a.version_number.as_bytes().cmp(b.version_number.as_bytes()))
            .cloned())
    }

    async fn get_versions_for_mods(
        &mut self,
        mod_ids: &[String],
    ) -> Result<Vec<ModVersion>, DatabaseError> {
        self.version_lookups += 1;
        Ok(self
            .versions
            .iter()
            .filter(|v| mod_ids.contains(&v.mod_id))
            .cloned()
            .collect())
    }

    async fn get_files_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModFile>, DatabaseError> {
        self.file_lookups += 1;
        Ok(self
            .files
            .iter()
            .filter(|f| version_ids.contains(&f.mod_version_id))
            .cloned()
            .collect())
    }

    async fn get_dependencies_for_versions(
        &mut self,
        version_ids: &[i32],
    ) -> Result<Vec<ModDependency>, DatabaseError> {
        self.dependency_lookups += 1;
        if self
            .fail_dependencies_after
            .is_some_and(|limit| self.dependency_lookups > limit)
        {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(self
            .dependencies
            .iter()
            .filter(|d| version_ids.contains(&d.mod_version_id))
            .cloned()
            .collect())
    }
}
