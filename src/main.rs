use quizrooms::{AppState, config::Config, router};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizrooms=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!(
        bind_address = %config.bind_address,
        web_dir = %config.web_dir.display(),
        rooms_file = ?config.rooms_file,
        "Configuration loaded"
    );

    let bind_address = config.bind_address.clone();
    let app_state = AppState::new(config).inspect_err(|e| error!("Failed to load rooms: {e}"))?;
    for room in app_state.quiz.rooms() {
        info!(room = %room.slug(), name = %room.name(), "Room open");
    }

    let app = router(app_state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
