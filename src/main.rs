use std::sync::Arc;

use anyhow::Result;
use arena::config::{CliAction, ServerConfig};
use arena::web::{bind, ApiServer};
use arena::AppServices;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("arena {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match ServerConfig::from_env().apply_args(&args) {
        Ok(CliAction::Serve(config)) => config,
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'arena --help' for usage.");
            std::process::exit(1);
        }
    };

    setup_logging();

    let services = Arc::new(AppServices::in_memory());
    let listener = bind(&config).await?;
    let server = ApiServer::new(services, &config);

    server
        .run(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn print_help() {
    println!("Arena - character battles over HTTP\n");
    println!("Usage: arena [options]\n");
    println!("Options:");
    println!("  --port=N       Port to listen on (env ARENA_PORT, default 5000)");
    println!("  --host=ADDR    Address to bind (env ARENA_HOST, default 127.0.0.1)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nLog level is read from RUST_LOG (default: info).");
}
