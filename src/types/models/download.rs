use serde::Serialize;

use super::mod_file::ModFile;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadRef {
    #[serde(rename = "fileURL")]
    pub file_url: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
}

impl From<ModFile> for DownloadRef {
    fn from(file: ModFile) -> Self {
        DownloadRef {
            file_url: file.file_url,
            file_type: file.file_type,
        }
    }
}
