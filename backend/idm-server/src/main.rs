use idm_account::AccountService;
use idm_auth::{Argon2Hasher, JwtTokenIssuer, RateLimitConfig, RequestRateLimiter};
use idm_config::Config;
use idm_core::CancellationSource;
use idm_db::{SqliteAccountStore, create_pool, run_migrations};
use idm_server::{AppState, Metrics, ServerError, ServerResult, build_router, logger};

use std::error::Error;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Environment first, so IDM_* overrides in .env are visible to Config::load
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| ServerError::io(format!("creating {}", dir.display()), e))?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting idm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if let Err(e) = run(config).await {
        error!("Server terminated: {e}");
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: Config) -> ServerResult<()> {
    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = create_pool(
        &database_path,
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await?;
    info!("Database connection established");

    info!("Running database migrations...");
    run_migrations(&pool).await?;
    info!("Migrations complete");

    // Token issuer
    let tokens = match config.auth.jwt_secret {
        Some(ref secret) => {
            info!("JWT: HS256 signing with configured secret");
            JwtTokenIssuer::with_hs256(
                secret.as_bytes(),
                &config.auth.issuer,
                config.auth.token_ttl(),
            )?
        }
        None => JwtTokenIssuer::ephemeral(&config.auth.issuer, config.auth.token_ttl())?,
    };

    let workflow = AccountService::new(
        Arc::new(SqliteAccountStore::new(pool)),
        Arc::new(Argon2Hasher::new()),
        Arc::new(tokens),
    );

    let rate_limiter = RequestRateLimiter::new(RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    let shutdown = CancellationSource::new();

    // Global metrics recorder, rendered by GET /metrics
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::metrics(e.to_string()))?;
    let upkeep = prometheus.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            upkeep.run_upkeep();
        }
    });
    info!("Metrics recorder installed");

    // Build application state
    let app_state = AppState {
        workflow: Arc::new(workflow),
        validation: config.validation.clone(),
        rate_limiter: Arc::new(rate_limiter),
        shutdown: shutdown.clone(),
        handler_timeout: config.handler.timeout(),
        metrics: Metrics::new(),
        prometheus,
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::io(format!("binding {bind_addr}"), e))?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener
        .local_addr()
        .map_err(|e| ServerError::io("reading bound address", e))?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.cancel();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // In-flight requests get the configured grace period once shutdown starts
    let grace = config.server.shutdown_timeout();
    let mut signal = shutdown.signal();
    let mut drain_signal = shutdown.signal();

    info!("Server ready to accept connections");
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.cancelled().await;
        })
        .into_future();

    tokio::select! {
        result = server => {
            result.map_err(|e| ServerError::io("serving requests", e))?;
            info!("Graceful shutdown complete");
        }
        _ = async move {
            drain_signal.cancelled().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(
                "Shutdown grace period of {:?} elapsed, dropping remaining connections",
                grace
            );
        }
    }

    Ok(())
}
