use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{config::AppData, endpoints::ApiError, resolver::downloads};

#[derive(Deserialize)]
struct DownloadsPath {
    version_id: i32,
}

/// Flat list of files for a version and everything it depends on,
/// optional dependencies included.
#[get("/v1/versions/{version_id}/downloads")]
pub async fn get_download_set(
    data: web::Data<AppData>,
    path: web::Path<DownloadsPath>,
) -> Result<impl Responder, ApiError> {
    let mut pool = data
        .db()
        .acquire()
        .await
        .inspect_err(|e| log::error!("Failed to acquire database connection: {e}"))?;

    let refs = downloads::resolve_download_set(&mut *pool, path.version_id).await?;

    Ok(web::Json(refs))
}
