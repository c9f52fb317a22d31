use gym_server::{Server, ServerState, setup_environment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. .env, config, logging
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path().display(),
        "Gym server starting"
    );
    if config.trainers.is_empty() {
        tracing::warn!("TRAINERS is empty, any trainer name will be accepted");
    }

    // 2. Database and shared state
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
