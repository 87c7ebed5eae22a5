use serde::{Deserialize, Serialize};

/// A dependency edge from one mod version to another mod (not a pinned version).
/// The min/max bounds are stored for clients but are not enforced when resolving.
#[derive(Serialize, Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct ModDependency {
    pub id: i32,
    #[serde(rename = "modVersionID")]
    pub mod_version_id: i32,
    #[serde(rename = "dependencyModID")]
    pub dependency_mod_id: String,
    #[serde(rename = "minimumDependencyVersion")]
    pub minimum_dependency_version: Option<String>,
    #[serde(rename = "maximumDependencyVersion")]
    pub maximum_dependency_version: Option<String>,
    #[serde(rename = "dependencyType")]
    pub dependency_type: DependencyType,
}

#[derive(sqlx::Type, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "dependency_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Required,
    Optional,
}

impl ModDependency {
    pub fn is_required(&self) -> bool {
        self.dependency_type == DependencyType::Required
    }
}
