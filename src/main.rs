use nosniff_static::config::{self, Config};
use nosniff_static::logger;
use nosniff_static::server::{self, StaticServer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_FILE.to_string());
    let cfg = Config::load_from(&config_path)?;

    if !logger::init(&cfg.logging) {
        logger::log_warning("A tracing subscriber was already installed; logging.level ignored");
    }

    // Worker threads default to the number of CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let server = StaticServer::bind(cfg)?;
    logger::log_server_start(&server.local_addr()?, &server.state().root);

    server
        .run(async {
            if let Err(e) = server::shutdown_signal().await {
                logger::log_error(&format!("Failed to install signal handlers: {e}"));
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(())
}
