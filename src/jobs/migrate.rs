use sqlx::PgConnection;

pub async fn migrate(conn: &mut PgConnection) -> anyhow::Result<()> {
    log::info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(&mut *conn)
        .await
        .inspect_err(|e| log::error!("Error encountered while running migrations: {e}"))?;

    Ok(())
}
