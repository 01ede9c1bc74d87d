use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calculator_service::{
    api,
    config::{ServerConfig, DEFAULT_CONFIG_PATH},
    engine::{self, CalculatorEngine},
};

#[derive(Parser)]
#[command(name = "calcd")]
#[command(about = "Scientific calculator and unit converter service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the calculator HTTP server
    Serve {
        /// Port for HTTP API (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Path to the JSON config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Evaluate a single expression and print the result
    Eval {
        /// Arithmetic expression, e.g. "2 × (3 + 4)"
        expression: String,
    },
}

/// Initialize tracing with output to stdout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "calculator_service=debug,calcd=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = api::create_app(CalculatorEngine::new(), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Calculator server listening on http://{} (static files from {})",
        addr,
        config.public_dir.display()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, host, config }) => {
            let mut config = ServerConfig::load(&config)?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(config).await?;
        }
        Some(Commands::Eval { expression }) => {
            let value = engine::expression::evaluate(&expression)?;
            println!("{}", engine::format_number(value));
        }
        None => {
            let config = ServerConfig::load(DEFAULT_CONFIG_PATH)?;
            serve(config).await?;
        }
    }

    Ok(())
}
