//! haven-api - Haven wellness backend entry point
//!
//! Wires configuration, the check-in store, the mood-resolution chain,
//! and the upstream clients into the axum router.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use haven_api::catalog::Catalog;
use haven_api::services::{
    LocalMlClient, MoodResolver, NewsClient, RemoteMlClient, RuleEngine, WeatherClient,
};
use haven_api::store::{CheckinStore, MemoryCheckinStore, SqliteCheckinStore};
use haven_api::{build_router, AppState};

/// Command-line arguments for haven-api
#[derive(Parser, Debug)]
#[command(name = "haven-api")]
#[command(about = "HTTP backend for the Haven youth-wellness app")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "HAVEN_PORT")]
    port: u16,

    /// SQLite database path for check-in persistence
    #[arg(long, default_value = "haven.db", env = "HAVEN_DATABASE")]
    database: PathBuf,

    /// Keep check-ins in memory only (no persistence across restarts)
    #[arg(long, env = "HAVEN_MEMORY_STORE")]
    memory_store: bool,

    /// Base URL of the remote mood-analysis service
    #[arg(long, env = "ML_SERVICE_URL")]
    ml_service_url: Option<String>,

    /// Local inference command line (e.g. "python ml_logic.py");
    /// check-in text is appended as the final argument
    #[arg(long, env = "LOCAL_ML_COMMAND")]
    local_ml_command: Option<String>,

    /// OpenWeather API key; weather serves a fallback payload without it
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    openweather_api_key: Option<String>,

    /// NewsAPI key; news serves fallback items without it
    #[arg(long, env = "NEWSAPI_KEY")]
    newsapi_key: Option<String>,

    /// Frontend origin allowed by CORS; permissive when unset
    #[arg(long, env = "FRONTEND_ORIGIN")]
    frontend_origin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haven_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting Haven backend v{}", env!("CARGO_PKG_VERSION"));

    let store = if args.memory_store {
        info!("Persistence disabled - check-ins held in memory only");
        CheckinStore::Memory(MemoryCheckinStore::new())
    } else {
        let pool = haven_common::db::init_database(&args.database)
            .await
            .with_context(|| format!("Failed to open database {}", args.database.display()))?;
        CheckinStore::Sqlite(SqliteCheckinStore::new(pool))
    };

    let catalog = Catalog::load().context("Failed to parse bundled reference data")?;
    info!(
        tips = catalog.tips.len(),
        flashcards = catalog.flashcards.len(),
        helplines = catalog.helplines.len(),
        "Loaded reference data"
    );

    let remote = match &args.ml_service_url {
        Some(url) => Some(RemoteMlClient::new(url).context("Invalid ML service URL")?),
        None => None,
    };
    let ml_probe = match &args.ml_service_url {
        Some(url) => Some(Arc::new(
            RemoteMlClient::new(url).context("Invalid ML service URL")?,
        )),
        None => None,
    };
    let local = args
        .local_ml_command
        .as_deref()
        .and_then(LocalMlClient::from_command_line);

    match (&remote, &local) {
        (None, None) => warn!("No ML tiers configured - mood resolution is rule-based only"),
        _ => info!(
            remote = remote.is_some(),
            local = local.is_some(),
            "Mood resolution tiers configured"
        ),
    }

    let resolver = MoodResolver::new(remote, local, RuleEngine::new());

    let frontend_origin = args
        .frontend_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()
        .context("Invalid FRONTEND_ORIGIN value")?;

    let state = AppState {
        store: Arc::new(store),
        resolver: Arc::new(resolver),
        catalog: Arc::new(catalog),
        weather: Arc::new(WeatherClient::new(args.openweather_api_key)),
        news: Arc::new(NewsClient::new(args.newsapi_key)),
        ml_probe,
    };

    let app = build_router(state, frontend_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("haven-api listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
