use serde::Serialize;

use super::{
    dependency::ModDependency, mod_entity::Mod, mod_file::ModFile, mod_version::ModVersion,
};

/// Everything a client needs to install one version of a mod.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    #[serde(rename = "mod")]
    pub mod_entity: Mod,
    pub version: ModVersion,
    pub files: Vec<ModFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<ModDependency>>,
}
