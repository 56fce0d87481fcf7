use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use editor_portfolio::config::Config;
use editor_portfolio::projects::{ProjectSource, SupabaseProjects};
use editor_portfolio::web::{self, AppState};

/// Rows fetched by `check-db`.
const CHECK_SAMPLE_SIZE: usize = 5;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let command = std::env::args().nth(1);

    // Load and validate configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let projects =
        SupabaseProjects::from_config(&config).context("Failed to create projects client")?;

    match command.as_deref() {
        None | Some("serve") => serve(config, projects).await,
        Some("check-db") => check_db(&projects).await,
        Some(other) => bail!("unknown command '{other}' (expected 'serve' or 'check-db')"),
    }
}

async fn serve(config: Config, projects: SupabaseProjects) -> Result<()> {
    info!(
        endpoint = %projects.endpoint(),
        decorations = config.decorations_enabled,
        "Starting editor-portfolio"
    );

    let state = AppState::new(config, Arc::new(projects));
    web::serve(state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Verify that the projects table is reachable and print a short summary.
async fn check_db(projects: &SupabaseProjects) -> Result<()> {
    info!(endpoint = %projects.endpoint(), "Testing projects table connection");

    let rows = projects
        .sample(CHECK_SAMPLE_SIZE)
        .await
        .context("Projects table query failed")?;

    if rows.is_empty() {
        warn!("Connection successful, but the projects table has no rows yet");
        return Ok(());
    }

    info!(count = rows.len(), "Connection successful");
    for (i, row) in rows.iter().enumerate() {
        let url: String = row.video_url.chars().take(40).collect();
        match row.platform() {
            Some(platform) => info!(
                "{}. [{platform}] {} - {url} (identifier: {})",
                i + 1,
                row.year,
                row.identifier().as_deref().unwrap_or("not found")
            ),
            None => warn!(
                "{}. [{}] {} - {url} (unsupported platform)",
                i + 1,
                row.platform,
                row.year
            ),
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,editor_portfolio=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down...");
}
