use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct ModVersion {
    #[serde(rename = "modVersionID")]
    pub mod_version_id: i32,
    #[serde(rename = "modID")]
    pub mod_id: String,
    /// Free-form; compared as a plain string, never as semver
    #[serde(rename = "versionNumber")]
    pub version_number: String,
    #[serde(rename = "releaseDate", with = "crate::types::serde::chrono_dt_secs::option")]
    pub release_date: Option<DateTime<Utc>>,
    pub changelog: Option<String>,
}

/// Which version of a mod a request refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    Latest,
    Exact(String),
}

impl From<&str> for VersionSelector {
    fn from(value: &str) -> Self {
        match value {
            "latest" => VersionSelector::Latest,
            v => VersionSelector::Exact(v.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_sentinel_is_case_sensitive() {
        assert_eq!(VersionSelector::from("latest"), VersionSelector::Latest);
        assert_eq!(
            VersionSelector::from("Latest"),
            VersionSelector::Exact("Latest".into())
        );
        assert_eq!(
            VersionSelector::from("1.2.0"),
            VersionSelector::Exact("1.2.0".into())
        );
    }
}
