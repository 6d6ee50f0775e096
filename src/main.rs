mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::{error, info};
use wxjson::{Location, WeatherClient, WeatherServer, WxJsonConfig, WxJsonError, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Exits with usage and status 2 before anything is bound.
    let cli = Cli::parse();

    let config = load_config(&cli).map_err(with_user_message)?;

    logging::init(&config.logging, cli.verbose);

    run(cli.command, config)
        .await
        .inspect_err(|e| error!("{e}"))
        .map_err(with_user_message)
}

/// Lead with the friendly message; the detailed error follows as its cause.
fn with_user_message(err: WxJsonError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}

fn load_config(cli: &Cli) -> wxjson::Result<WxJsonConfig> {
    let mut config = WxJsonConfig::load_from_path(cli.config.clone())?;
    match &cli.command {
        Commands::Server { addr: Some(addr) } => config.server.bind_address.clone_from(addr),
        Commands::Client { url: Some(url) } => config.client.server_url.clone_from(url),
        _ => {}
    }
    config.validate()?;
    Ok(config)
}

async fn run(command: Commands, config: WxJsonConfig) -> wxjson::Result<()> {
    match command {
        Commands::Server { .. } => {
            let addr = config.server.socket_addr()?;
            let server = WeatherServer::bind(addr, config.server.max_body_bytes).await?;
            server
                .serve_until(async {
                    let _ = tokio::signal::ctrl_c().await;
                    info!("Interrupted, shutting down");
                })
                .await
        }
        Commands::Client { .. } => {
            let client = WeatherClient::new(&config.client)?;
            let body = client.post_location(&Location::zzyzx()).await?;
            println!("Response:  {body}");
            Ok(())
        }
        Commands::Demo => {
            let exchange =
                wxjson::run_demo(&Location::zzyzx(), &config.server, &config.client).await?;
            println!("Response:  {}", exchange.body);
            let report = exchange.report;
            println!(
                "{}: {}, {} (wind {} {})",
                report.location_name,
                report.weather,
                report.format_temperature(),
                report.wind.direction,
                report.wind.speed
            );
            Ok(())
        }
    }
}
