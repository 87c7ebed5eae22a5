use crate::{
    catalog::CatalogReader,
    types::models::{
        dependency::ModDependency,
        manifest::Manifest,
        mod_entity::Mod,
        mod_version::{ModVersion, VersionSelector},
    },
};

use super::ResolveError;

/// Looks the mod up first and the version second, so a mod without any
/// versions reports a missing version rather than a missing mod.
pub async fn resolve_version<C: CatalogReader>(
    catalog: &mut C,
    mod_id: &str,
    selector: &VersionSelector,
) -> Result<(Mod, ModVersion), ResolveError> {
    let mod_entity = catalog
        .get_mod(mod_id)
        .await?
        .ok_or(ResolveError::ModNotFound)?;

    let version = match selector {
        VersionSelector::Latest => catalog.get_latest_version(mod_id).await?,
        VersionSelector::Exact(v) => catalog.get_version(mod_id, v).await?,
    }
    .ok_or(ResolveError::VersionNotFound)?;

    Ok((mod_entity, version))
}

/// `None` means the manifest carries no dependency section at all.
pub fn select_dependencies(
    rows: Vec<ModDependency>,
    include_optional: bool,
) -> Option<Vec<ModDependency>> {
    let selected: Vec<ModDependency> = if include_optional {
        rows
    } else {
        rows.into_iter().filter(ModDependency::is_required).collect()
    };

    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

/// Builds the install manifest for one version. Only direct dependencies are
/// listed; nothing is expanded transitively here.
pub async fn build_manifest<C: CatalogReader>(
    catalog: &mut C,
    mod_id: &str,
    selector: &VersionSelector,
    include_optional: bool,
) -> Result<Manifest, ResolveError> {
    let (mod_entity, version) = resolve_version(catalog, mod_id, selector).await?;

    let files = catalog
        .get_files_for_versions(&[version.mod_version_id])
        .await?;
    if files.is_empty() {
        return Err(ResolveError::FilesNotFound);
    }

    let rows = catalog
        .get_dependencies_for_versions(&[version.mod_version_id])
        .await?;

    Ok(Manifest {
        mod_entity,
        version,
        files,
        dependencies: select_dependencies(rows, include_optional),
    })
}
