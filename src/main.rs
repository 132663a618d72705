//! PostVelocity - AI-powered social media management platform backend

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use postvelocity::api::{self, ApiDoc};
use postvelocity::config::Config;

#[derive(Parser)]
#[command(name = "postvelocity")]
#[command(about = "AI-powered social media management platform backend")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config and PORT env)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("postvelocity={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }

            tracing::info!("Starting HTTP server on port {}", config.port);

            let router = api::create_router(&config);
            let listener =
                tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

            println!("PostVelocity server running at http://localhost:{}", config.port);
            println!("  API:      http://localhost:{}/api/...", config.port);
            println!("  API Docs: http://localhost:{}/api/docs", config.port);
            println!("  Health:   http://localhost:{}/api/health", config.port);

            axum::serve(listener, router).await?;
        }

        Commands::Openapi => {
            let openapi = ApiDoc::openapi();
            println!("{}", serde_json::to_string_pretty(&openapi)?);
        }
    }

    Ok(())
}
