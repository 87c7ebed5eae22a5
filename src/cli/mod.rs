use clap::{Parser, Subcommand};

use crate::{
    config::AppData,
    jobs,
    resolver::{closure, downloads, manifest},
    types::models::mod_version::VersionSelector,
};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an internal job
    #[command(subcommand)]
    Job(JobCommand),
    /// Print every file needed to install a mod version, as JSON
    Downloads {
        /// Numeric mod version id
        version_id: i32,
    },
    /// Print the dependency closure of mod versions, as JSON
    Closure {
        /// Numeric mod version ids to start from
        #[arg(required = true)]
        version_ids: Vec<i32>,
    },
    /// Print the install manifest of a mod version, as JSON
    Manifest {
        mod_id: String,
        /// Version number, or "latest"
        #[arg(default_value = "latest")]
        version: String,
        /// Also list optional dependencies
        #[arg(long)]
        include_optional: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// Runs migrations
    Migrate,
}

/// Runs the requested command, if any. `Ok(false)` means start the server.
pub async fn maybe_cli(args: Args, data: &AppData) -> anyhow::Result<bool> {
    let Some(command) = args.command else {
        return Ok(false);
    };

    let mut conn = data.db().acquire().await?;

    match command {
        Commands::Job(JobCommand::Migrate) => {
            jobs::migrate::migrate(&mut conn).await?;
        }
        Commands::Downloads { version_id } => {
            let refs = downloads::resolve_download_set(&mut *conn, version_id).await?;
            println!("{}", serde_json::to_string_pretty(&refs)?);
        }
        Commands::Closure { version_ids } => {
            let resolved = closure::resolve_closure(&mut *conn, &version_ids).await?;
            println!("{}", serde_json::to_string_pretty(&resolved.summary())?);
        }
        Commands::Manifest {
            mod_id,
            version,
            include_optional,
        } => {
            let selector = VersionSelector::from(version.as_str());
            let built =
                manifest::build_manifest(&mut *conn, &mod_id, &selector, include_optional).await?;
            println!("{}", serde_json::to_string_pretty(&built)?);
        }
    }

    Ok(true)
}
