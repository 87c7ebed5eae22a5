use sqlx::PgConnection;

use crate::{database::DatabaseError, types::models::dependency::ModDependency};

pub async fn get_for_versions(
    version_ids: &[i32],
    conn: &mut PgConnection,
) -> Result<Vec<ModDependency>, DatabaseError> {
    if version_ids.is_empty() {
        return Ok(vec![]);
    }

    sqlx::query_as::<_, ModDependency>(
        "SELECT
            dp.id, dp.mod_version_id, dp.dependency_mod_id,
            dp.minimum_dependency_version, dp.maximum_dependency_version,
            dp.dependency_type
        FROM mod_dependencies dp
        WHERE dp.mod_version_id = ANY($1)
        ORDER BY dp.id",
    )
    .bind(version_ids)
    .fetch_all(conn)
    .await
    .inspect_err(|e| log::error!("dependencies::get_for_versions query failed: {e}"))
    .map_err(|e| e.into())
}
