use std::collections::HashSet;

use crate::{
    catalog::CatalogReader,
    database::DatabaseError,
    types::models::{dependency::ModDependency, mod_version::VersionSelector},
};

use super::{manifest::resolve_version, ResolveError};

/// Collects every required dependency row reachable from `version_id`,
/// layer by layer: version -> required rows -> all versions of those mods -> ...
///
/// Rows are accumulated as found. Two versions that both require the same mod
/// contribute one row each, so the same mod can be listed more than once.
/// Optional edges are never followed.
pub async fn collect_required<C: CatalogReader>(
    catalog: &mut C,
    version_id: i32,
) -> Result<Vec<ModDependency>, DatabaseError> {
    let mut visited: HashSet<i32> = HashSet::new();
    let mut collected: Vec<ModDependency> = vec![];
    let mut layer = vec![version_id];

    while !layer.is_empty() {
        visited.extend(layer.iter().copied());

        let required: Vec<ModDependency> = catalog
            .get_dependencies_for_versions(&layer)
            .await?
            .into_iter()
            .filter(ModDependency::is_required)
            .collect();
        if required.is_empty() {
            break;
        }

        let mut seen_mods: HashSet<&str> = HashSet::new();
        let mod_ids: Vec<String> = required
            .iter()
            .filter(|row| seen_mods.insert(row.dependency_mod_id.as_str()))
            .map(|row| row.dependency_mod_id.clone())
            .collect();

        let versions = catalog.get_versions_for_mods(&mod_ids).await?;
        collected.extend(required);

        let mut queued: HashSet<i32> = HashSet::new();
        layer = versions
            .into_iter()
            .map(|v| v.mod_version_id)
            .filter(|id| !visited.contains(id) && queued.insert(*id))
            .collect();
    }

    Ok(collected)
}

/// [`collect_required`] for a version addressed by mod id and selector.
/// A version without any required dependency is reported as not found.
pub async fn required_for<C: CatalogReader>(
    catalog: &mut C,
    mod_id: &str,
    selector: &VersionSelector,
) -> Result<Vec<ModDependency>, ResolveError> {
    let (_, version) = resolve_version(catalog, mod_id, selector).await?;

    let rows = collect_required(catalog, version.mod_version_id).await?;
    if rows.is_empty() {
        return Err(ResolveError::DependenciesNotFound);
    }

    Ok(rows)
}
