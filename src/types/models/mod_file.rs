use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct ModFile {
    #[serde(rename = "fileID")]
    pub file_id: i32,
    #[serde(rename = "modVersionID")]
    pub mod_version_id: i32,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: i64,
    #[serde(rename = "fileURL")]
    pub file_url: String,
    #[serde(rename = "uploadDate", with = "crate::types::serde::chrono_dt_secs::option")]
    pub upload_date: Option<DateTime<Utc>>,
}
