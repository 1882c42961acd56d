use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armada::{api, db, service::ShipService};

#[derive(Parser)]
#[command(name = "armada")]
#[command(about = "Spacecraft registry server with a filterable REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Path to the SQLite database (defaults to the platform data dir)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "armada=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, db }) => serve(port, db).await,
        None => serve(8080, None).await,
    }
}

async fn serve(port: u16, db_path: Option<PathBuf>) -> anyhow::Result<()> {
    let db = match db_path {
        Some(path) => db::Database::open(path)?,
        None => db::Database::open_default()?,
    };
    db.migrate()?;

    let app = api::create_router(ShipService::new(db));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Armada registry listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
