use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use perguntas_api::db;
use perguntas_api::server::app::{run_server, AppState};
use perguntas_api::settings::Settings;
use perguntas_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(default_value = "server")]
    runner: Runner,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Runner {
    /// Create the table if needed, then serve HTTP
    Server,
    /// Only create the table
    InitSchema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let pool = db::establish_connection(&settings.database).context("Invalid DATABASE_URL")?;

    match cli.runner {
        Runner::InitSchema => {
            db::init_schema(&pool)
                .await
                .context("Failed to create table perguntas")?;
            tracing::info!("Table perguntas is ready");
        }
        Runner::Server => {
            db::ensure_schema(&pool).await;
            run_server(AppState::new(Arc::new(pool.clone())), &settings.address()).await?;
        }
    };
    pool.close().await;
    Ok(())
}
