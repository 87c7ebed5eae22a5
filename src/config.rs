#[derive(Clone)]
pub struct AppData {
    db: sqlx::postgres::PgPool,
    port: u16,
    debug: bool,
}

/// Settings that have to be known before the pool exists.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub debug: bool,
    pub log_dir: Option<String>,
}

impl EnvSettings {
    pub fn from_env() -> anyhow::Result<EnvSettings> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<EnvSettings> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or("10".to_string())
            .parse::<u32>()
            .unwrap_or(10);
        let port = lookup("PORT")
            .unwrap_or("8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);
        let debug = lookup("APP_DEBUG").unwrap_or("0".to_string()) == "1";
        let log_dir = lookup("LOG_DIR").filter(|x| !x.is_empty());

        Ok(EnvSettings {
            database_url,
            max_connections,
            port,
            debug,
            log_dir,
        })
    }
}

pub async fn build_config(settings: &EnvSettings) -> anyhow::Result<AppData> {
    let pool = sqlx::postgres::PgPoolOptions::default()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    Ok(AppData {
        db: pool,
        port: settings.port,
        debug: settings.debug,
    })
}

impl AppData {
    pub fn db(&self) -> &sqlx::postgres::PgPool {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}
