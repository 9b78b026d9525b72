use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info};
use zonelight_api::AppState;
use zonelight_domain::CliOverrides;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zonelight")]
#[command(version)]
#[command(about = "Zonelight - static A-record DNS responder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "CONFIG_FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Status page port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Zonelight v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);

    let dns_addr = server::socket_addr(&config.server.bind_address, config.dns.port)?;
    let listener = server::bind_dns_server(dns_addr)?;

    if config.web_ui.enabled {
        let web_addr: SocketAddr =
            server::socket_addr(&config.server.bind_address, config.web_ui.port)?;
        let app_state = AppState::new(dns_services.store.clone());

        tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, app_state).await {
                error!(error = %e, "Status page server error");
            }
        });
    }

    server::start_dns_server(listener, dns_services.handler).await;

    Ok(())
}
