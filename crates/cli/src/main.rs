use anyhow::Result;
use clap::{Parser, Subcommand};
use docgate_core::GatewayConfig;
use docgate_service::CollectionRegistry;
use docgate_storage::PgDocumentStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "docgate")]
#[command(about = "Read-only pagination gateway for document collections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway.
    Serve {
        /// Port to bind; overrides DOCGATE_PORT.
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind; overrides DOCGATE_HOST.
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Validate configuration and the collection allow-list, then exit.
    Check,
    /// Print the configured collection allow-list as JSON.
    Collections,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env()?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, host, port).await?,
        Commands::Check => {
            let store = PgDocumentStore::new(&config.database_url).await?;
            let registry = CollectionRegistry::load(&config.collections, &store).await?;
            println!("configuration ok: {} collection(s)", registry.names().len());
        },
        Commands::Collections => {
            let store = PgDocumentStore::new(&config.database_url).await?;
            let registry = CollectionRegistry::load(&config.collections, &store).await?;
            println!("{}", serde_json::to_string_pretty(registry.names())?);
        },
    }

    Ok(())
}
