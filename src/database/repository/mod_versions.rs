use sqlx::PgConnection;

use crate::{database::DatabaseError, types::models::mod_version::ModVersion};

pub async fn get_by_version_str(
    mod_id: &str,
    version: &str,
    conn: &mut PgConnection,
) -> Result<Option<ModVersion>, DatabaseError> {
    sqlx::query_as::<_, ModVersion>(
        "SELECT
            mv.mod_version_id, mv.mod_id, mv.version_number,
            mv.release_date, mv.changelog
        FROM mod_versions mv
        WHERE mv.mod_id = $1
        AND mv.version_number = $2",
    )
    .bind(mod_id)
    .bind(version)
    .fetch_optional(conn)
    .await
    .inspect_err(|e| log::error!("Failed to fetch version {version} of mod {mod_id}: {e}"))
    .map_err(|e| e.into())
}

/// Highest version by raw string comparison. "2.0" sorts above "10.0" here;
/// this mirrors how the catalog has always ranked versions.
pub async fn get_latest_for_mod(
    mod_id: &str,
    conn: &mut PgConnection,
) -> Result<Option<ModVersion>, DatabaseError> {
    sqlx::query_as::<_, ModVersion>(
        r#"SELECT
            mv.mod_version_id, mv.mod_id, mv.version_number,
            mv.release_date, mv.changelog
        FROM mod_versions mv
        WHERE mv.mod_id = $1
        ORDER BY mv.version_number COLLATE "C" DESC
        LIMIT 1"#,
    )
    .bind(mod_id)
    .fetch_optional(conn)
    .await
    .inspect_err(|e| log::error!("Failed to fetch latest version of mod {mod_id}: {e}"))
    .map_err(|e| e.into())
}

pub async fn get_for_mods(
    mod_ids: &[String],
    conn: &mut PgConnection,
) -> Result<Vec<ModVersion>, DatabaseError> {
    if mod_ids.is_empty() {
        return Ok(vec![]);
    }

    sqlx::query_as::<_, ModVersion>(
        "SELECT
            mv.mod_version_id, mv.mod_id, mv.version_number,
            mv.release_date, mv.changelog
        FROM mod_versions mv
        WHERE mv.mod_id = ANY($1)
        ORDER BY mv.mod_version_id",
    )
    .bind(mod_ids)
    .fetch_all(conn)
    .await
    .inspect_err(|e| log::error!("mod_versions::get_for_mods query failed: {e}"))
    .map_err(|e| e.into())
}
