mod server;

use clap::{Arg, Command};
use std::{net::SocketAddr, path::PathBuf, process, sync::Arc};
use sysagent_core::{new_collector, Collector, Config};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = Command::new("sysagentd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Host metrics agent - serves system metrics as JSON with a web dashboard")
        .arg(
            Arg::new("listen")
                .long("listen")
                .value_name("ADDR")
                .help("Address to bind the HTTP server to")
                .value_parser(clap::value_parser!(SocketAddr)),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .help("Sampling interval in milliseconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("json-config")
                .long("json-config")
                .value_name("PATH")
                .help("Path to JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    let cli_config = sysagent_core::config::CliConfig {
        listen: matches.get_one::<SocketAddr>("listen").copied(),
        interval_ms: matches.get_one::<u64>("interval").copied(),
    };
    let config = Config::load(Some(&cli_config), matches.get_one::<PathBuf>("json-config"))?;

    serve(config)
}

#[tokio::main]
async fn serve(config: Config) -> anyhow::Result<()> {
    let collector: Arc<dyn Collector> = Arc::from(new_collector());
    collector.start(config.interval());

    let app = server::router(Arc::clone(&collector));
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    log::info!("dashboard available at http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    collector.stop();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
    }
}
