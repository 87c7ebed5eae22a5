use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    config::AppData,
    endpoints::ApiError,
    resolver::{manifest, required},
    types::models::mod_version::VersionSelector,
};

#[derive(Deserialize)]
struct ManifestPath {
    id: String,
    version: String,
}

#[derive(Deserialize)]
struct ManifestQuery {
    #[serde(default)]
    include_optional: bool,
}

/// Install manifest for one version of a mod; `latest` picks the highest
/// stored version string.
#[get("/v1/mods/{id}/versions/{version}/manifest")]
pub async fn get_manifest(
    data: web::Data<AppData>,
    path: web::Path<ManifestPath>,
    query: web::Query<ManifestQuery>,
) -> Result<impl Responder, ApiError> {
    let mut pool = data
        .db()
        .acquire()
        .await
        .inspect_err(|e| log::error!("Failed to acquire database connection: {e}"))?;
    let selector = VersionSelector::from(path.version.as_str());

    let built =
        manifest::build_manifest(&mut *pool, &path.id, &selector, query.include_optional).await?;

    Ok(web::Json(built))
}

#[get("/v1/mods/{id}/versions/{version}/dependencies/required")]
pub async fn get_required_dependencies(
    data: web::Data<AppData>,
    path: web::Path<ManifestPath>,
) -> Result<impl Responder, ApiError> {
    let mut pool = data
        .db()
        .acquire()
        .await
        .inspect_err(|e| log::error!("Failed to acquire database connection: {e}"))?;
    let selector = VersionSelector::from(path.version.as_str());

    let rows = required::required_for(&mut *pool, &path.id, &selector).await?;

    Ok(web::Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_dependencies_are_opt_in() {
        let query = web::Query::<ManifestQuery>::from_query("").unwrap();
        assert!(!query.include_optional);

        let query = web::Query::<ManifestQuery>::from_query("include_optional=false").unwrap();
        assert!(!query.include_optional);

        let query = web::Query::<ManifestQuery>::from_query("include_optional=true").unwrap();
        assert!(query.include_optional);
    }

    #[test]
    fn malformed_flag_is_rejected() {
        assert!(web::Query::<ManifestQuery>::from_query("include_optional=maybe").is_err());
    }
}
