use sqlx::PgConnection;

use crate::{database::DatabaseError, types::models::mod_entity::Mod};

pub async fn get_one(id: &str, conn: &mut PgConnection) -> Result<Option<Mod>, DatabaseError> {
    sqlx::query_as::<_, Mod>(
        "SELECT
            m.mod_id, m.mod_name, m.mod_author, m.mod_description, m.mod_tags,
            m.mod_icon, m.forum_url, m.github_url, m.donation_url, m.mod_release_date
        FROM mods m
        WHERE m.mod_id = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .inspect_err(|e| log::error!("Failed to fetch mod {id}: {e}"))
    .map_err(|e| e.into())
}
