use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{catalog::CatalogReader, database::DatabaseError};

/// Every version reachable from a set of starting versions.
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    seeds: HashSet<i32>,
    visited: HashSet<i32>,
    /// Seeds that a version of another mod depends on, i.e. part of a cycle
    reentered: HashSet<i32>,
    rounds: usize,
}

impl Closure {
    /// The starting versions plus everything they pull in.
    pub fn all(&self) -> &HashSet<i32> {
        &self.visited
    }

    /// Only the versions that are depended upon. A starting version shows up
    /// here solely when a cycle leads back to it through another mod.
    pub fn dependencies(&self) -> HashSet<i32> {
        self.visited
            .iter()
            .filter(|id| !self.seeds.contains(id) || self.reentered.contains(id))
            .copied()
            .collect()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Both views as sorted id lists.
    pub fn summary(&self) -> ClosureSummary {
        let mut versions: Vec<i32> = self.visited.iter().copied().collect();
        versions.sort_unstable();
        let mut dependencies: Vec<i32> = self.dependencies().into_iter().collect();
        dependencies.sort_unstable();

        ClosureSummary {
            versions,
            dependencies,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ClosureSummary {
    pub versions: Vec<i32>,
    pub dependencies: Vec<i32>,
}

/// Breadth-first walk over the dependency graph, one batched lookup per round.
///
/// A dependency row names a mod rather than a version, so each edge expands to
/// every version of that mod. The recorded min/max bounds are not applied.
/// Each version is expanded at most once, which keeps cyclic graphs finite.
pub async fn resolve_closure<C: CatalogReader>(
    catalog: &mut C,
    starting: &[i32],
) -> Result<Closure, DatabaseError> {
    let seeds: HashSet<i32> = starting.iter().copied().collect();
    let mut visited: HashSet<i32> = HashSet::new();
    let mut reentered: HashSet<i32> = HashSet::new();
    // Owning mod of every version fetched so far
    let mut version_mods: HashMap<i32, String> = HashMap::new();
    let mut rounds = 0;

    let mut unique: HashSet<i32> = HashSet::new();
    let mut frontier: Vec<i32> = starting
        .iter()
        .copied()
        .filter(|id| unique.insert(*id))
        .collect();

    loop {
        frontier.retain(|id| !visited.contains(id));
        if frontier.is_empty() {
            break;
        }
        rounds += 1;

        let rows = catalog.get_dependencies_for_versions(&frontier).await?;
        visited.extend(frontier.iter().copied());

        let mut seen_mods: HashSet<&str> = HashSet::new();
        let mod_ids: Vec<String> = rows
            .iter()
            .filter(|row| seen_mods.insert(row.dependency_mod_id.as_str()))
            .map(|row| row.dependency_mod_id.clone())
            .collect();
        if mod_ids.is_empty() {
            break;
        }

        let versions = catalog.get_versions_for_mods(&mod_ids).await?;
        version_mods.extend(
            versions
                .iter()
                .map(|v| (v.mod_version_id, v.mod_id.clone())),
        );

        let mut queued: HashSet<i32> = HashSet::new();
        let mut next = Vec::with_capacity(versions.len());
        for version in versions {
            let id = version.mod_version_id;
            // A seed whose mod is still unknown cannot belong to `version.mod_id`:
            // every version of that mod was fetched just above.
            if seeds.contains(&id)
                && rows.iter().any(|r| {
                    r.dependency_mod_id == version.mod_id
                        && version_mods.get(&r.mod_version_id) != Some(&version.mod_id)
                })
            {
                reentered.insert(id);
            }
            if !visited.contains(&id) && queued.insert(id) {
                next.push(id);
            }
        }
        frontier = next;
    }

    log::debug!(
        "Resolved closure of {} version(s) from {:?} in {} round(s)",
        visited.len(),
        starting,
        rounds
    );

    Ok(Closure {
        seeds,
        visited,
        reentered,
        rounds,
    })
}
