use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use bootstrap_actix::common::common::setup_logging;
use bootstrap_actix::config::structs::configuration::Configuration;
use bootstrap_actix::http::enums::shutdown_signal::ShutdownSignal;
use bootstrap_actix::http::http::{http_service, listen};
use bootstrap_actix::http::structs::http_server_options::HttpServerOptions;
use bootstrap_actix::ssl::ssl::generate_self_signed;
use bootstrap_actix::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Err(e) = config.apply_env_overrides(&args.env_prefix) {
        eprintln!("[CONFIG] {}", e);
        exit(101);
    }
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("[CONFIG] {}", e);
        exit(101);
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        if !config.http_server.tls_enabled() {
            error!("[CERTGEN] No TLS certificate and key path configured, exiting...");
            exit(1);
        }
        if let Err(e) = generate_self_signed(&args.selfsigned_domain, &config.http_server.tls_cert, &config.http_server.tls_key) {
            error!("[CERTGEN] {}", e);
            exit(1);
        }
        return Ok(());
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            info!("[BOOT] Starting HTTP server...");
            let instance = http_service(HttpServerOptions::from_config(&config.http_server))?;
            listen(instance, Some(Box::new(|signal: ShutdownSignal| {
                info!("[BOOT] Shutdown request received ({}), shutting down...", signal);
            }))).await?;
            info!("[BOOT] Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
