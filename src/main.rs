//! Service process: composition, startup ordering, graceful shutdown.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use orders_api::config::{load_config, ServiceConfig};
use orders_api::http::{AppState, HttpServer};
use orders_api::lifecycle::{signals, Shutdown};
use orders_api::observability::{logging, Telemetry};
use orders_api::store::StoreClient;

#[derive(Debug, Parser)]
#[command(name = "orders-api", version, about = "Orders read API")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        store_address = %config.store.address,
        collector = %config.telemetry.collector_endpoint,
        "Configuration loaded"
    );

    // Startup order is load-bearing: telemetry before the store client so
    // the store's tracer exists, listener last so traffic only arrives
    // once both are ready. Each step is fatal on failure.
    let telemetry = Telemetry::init(&config.telemetry)?;
    let store = StoreClient::connect(&config.store.address, telemetry.tracer("store")).await?;

    let state = AppState {
        store: store.clone(),
        tracer: telemetry.tracer("orders_api"),
    };
    let server = HttpServer::new(state);
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        _ = signals::shutdown_signal() => {
            tracing::info!("Shutdown signal received");
        }
        result = &mut server_task => {
            // The listener died without a signal; tear down what we can
            // and report the failure.
            let detail = match result {
                Ok(Ok(())) => "listener exited unexpectedly".to_string(),
                Ok(Err(err)) => err.to_string(),
                Err(err) => err.to_string(),
            };
            let _ = store.close().await;
            let _ = telemetry.shutdown();
            return Err(format!("http server: {detail}").into());
        }
    }
    shutdown.trigger();

    // Teardown order: drain HTTP, then close the store, then flush spans.
    // Failures are collected so a store-close error cannot mask (or be
    // masked by) a listener-shutdown error.
    let mut failures: Vec<String> = Vec::new();

    let grace = Duration::from_secs(config.listener.shutdown_grace_secs);
    let drained = tokio::time::timeout(grace, &mut server_task).await;
    match drained {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(err))) => failures.push(format!("http shutdown: {err}")),
        Ok(Err(err)) => failures.push(format!("http server task: {err}")),
        Err(_) => {
            server_task.abort();
            failures.push(format!(
                "http drain exceeded {}s grace period",
                config.listener.shutdown_grace_secs
            ));
        }
    }

    if let Err(err) = store.close().await {
        failures.push(format!("store close: {err}"));
    }

    if let Err(err) = telemetry.shutdown() {
        failures.push(format!("telemetry flush: {err}"));
    }

    if failures.is_empty() {
        tracing::info!("Shutdown complete");
        Ok(())
    } else {
        Err(format!("shutdown failures: {}", failures.join("; ")).into())
    }
}
