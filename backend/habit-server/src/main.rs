use habit_server::{AppState, DailyRollover, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = habit_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting habit-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = habit_db::create_pool(&database_path).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    habit_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app_state = AppState::from_config(pool, &config)?;

    // Daily rollover (first check runs immediately to catch up)
    let rollover_task = if config.rollover.enabled {
        let rollover = DailyRollover::new(
            app_state.pool.clone(),
            app_state.clock.clone(),
            app_state.retry.clone(),
        );
        Some(rollover.spawn(Duration::from_secs(config.rollover.check_interval_secs)))
    } else {
        warn!("Daily rollover DISABLED - clients must reset habits themselves");
        None
    };

    // Forget login attempts whose quota has refilled
    let limiter = app_state.login_limiter.clone();
    let prune_interval = Duration::from_secs(config.rate_limit.window_secs);
    let prune_task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(prune_interval);
        loop {
            ticker.tick().await;
            limiter.prune();
        }
    });

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(task) = rollover_task {
        task.abort();
    }
    prune_task.abort();

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
