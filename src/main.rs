use store_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    init_logger(&config.log_level, config.log_dir().to_str());

    tracing::info!("Store server starting...");

    // 2. Initialize server state (embedded database, sequence counters)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
