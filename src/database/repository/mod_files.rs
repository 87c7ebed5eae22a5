use sqlx::PgConnection;

use crate::{database::DatabaseError, types::models::mod_file::ModFile};

pub async fn get_for_versions(
    version_ids: &[i32],
    conn: &mut PgConnection,
) -> Result<Vec<ModFile>, DatabaseError> {
    if version_ids.is_empty() {
        return Ok(vec![]);
    }

    sqlx::query_as::<_, ModFile>(
        "SELECT
            mf.file_id, mf.mod_version_id, mf.file_type,
            mf.file_size, mf.file_url, mf.upload_date
        FROM mod_files mf
        WHERE mf.mod_version_id = ANY($1)
        ORDER BY mf.file_id",
    )
    .bind(version_ids)
    .fetch_all(conn)
    .await
    .inspect_err(|e| log::error!("mod_files::get_for_versions query failed: {e}"))
    .map_err(|e| e.into())
}
