use clap::Parser;
use mailguard_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mailguard")]
#[command(version = "0.1.0")]
#[command(about = "Mailguard - Disposable email detection service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Blocklist file path
    #[arg(long)]
    blocklist: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        blocklist_path: cli.blocklist.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Mailguard v{}", env!("CARGO_PKG_VERSION"));

    // Dependency injection: cache backend, adapters, services, use cases
    let services = di::Services::new(&config).await?;

    let refresh_job = Arc::new(
        mailguard_jobs::BlocklistRefreshJob::new(services.blocklist.clone())
            .with_interval(config.detection.blocklist_refresh_seconds),
    );
    refresh_job.start().await;

    let app_state = services.into_app_state(&config);

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
