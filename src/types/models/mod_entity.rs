use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct Mod {
    #[serde(rename = "modID")]
    pub mod_id: String,
    #[serde(rename = "modName")]
    pub mod_name: String,
    #[serde(rename = "modAuthor")]
    pub mod_author: String,
    #[serde(rename = "modDescription")]
    pub mod_description: Option<String>,
    /// Comma delimited, exactly as stored
    #[serde(rename = "modTags")]
    pub mod_tags: Option<String>,
    #[serde(rename = "modIcon")]
    pub mod_icon: Option<String>,
    #[serde(rename = "forumURL")]
    pub forum_url: Option<String>,
    #[serde(rename = "githubURL")]
    pub github_url: Option<String>,
    #[serde(rename = "donationURL")]
    pub donation_url: Option<String>,
    #[serde(rename = "modReleaseDate", with = "crate::types::serde::chrono_dt_secs::option")]
    pub mod_release_date: Option<DateTime<Utc>>,
}
