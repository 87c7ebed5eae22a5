use actix_cors::Cors;
use actix_web::{
    middleware::Logger,
    web::{self, QueryConfig},
    App, HttpServer,
};
use clap::Parser;
use log::info;

use crate::types::api;

mod catalog;
mod cli;
mod config;
mod database;
mod endpoints;
mod jobs;
mod logging;
mod resolver;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let settings = config::EnvSettings::from_env()?;
    logging::init(settings.debug, settings.log_dir.as_deref())?;

    let app_data = config::build_config(&settings).await?;

    if cli::maybe_cli(args, &app_data).await? {
        return Ok(());
    }

    let addr = "0.0.0.0";
    let port = app_data.port();
    let debug = app_data.debug();

    info!("Starting server on {}:{}", addr, port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_data.clone()))
            .app_data(QueryConfig::default().error_handler(api::query_error_handler))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "HEAD"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(endpoints::manifests::get_manifest)
            .service(endpoints::manifests::get_required_dependencies)
            .service(endpoints::downloads::get_download_set)
            .service(endpoints::health::health)
    })
    .bind((addr, port))?;

    if debug {
        info!("Running in debug mode, using 1 thread.");
        server.workers(1).run().await?;
    } else {
        server.run().await?;
    }

    anyhow::Ok(())
}
