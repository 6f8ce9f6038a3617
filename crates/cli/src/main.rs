use clap::Parser;
use phone_blocklist_api::AppState;
use phone_blocklist_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "phone-blocklist")]
#[command(version)]
#[command(about = "Phone Blocklist - REST service for blocking phone numbers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "PHONE_BLOCKLIST_CONFIG")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long, env = "APP_PORT")]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, env = "BIND_ADDRESS")]
    bind: Option<String>,

    /// Database path
    #[arg(long, env = "DATABASE_PATH")]
    database: Option<String>,

    /// Directory with the browser frontend
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so `.env` values feed the `env` fallbacks.
    let env_file_loaded = bootstrap::load_env();
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        static_dir: cli.static_dir.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(
        env_file_loaded,
        "Starting Phone Blocklist v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pool = bootstrap::init_database(&config.database_url(), &config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos);

    let app_state = AppState {
        blocklist: use_cases.blocklist,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state, config.server.static_dir.as_deref()).await?;

    info!("Server shutdown complete");
    Ok(())
}
