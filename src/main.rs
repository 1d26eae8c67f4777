use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoplist::config::{self, ConfigLayer};
use shoplist::flow;
use shoplist::server::{AppState, create_router};
use shoplist::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "A shopping list web application", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and database
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,
    },

    /// Start the server
    Serve {
        /// TOML file with host, port, data_dir and static_dir; flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to [default: 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to [default: 8080]
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory for the database [default: ./data]
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Directory served under /static/ [default: ./static]
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print every list with its products
    Lists {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run_init(data_dir: PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(&data_dir)?;

    let db_path = config::db_path(&data_dir);
    let store = SqliteStore::new(&db_path)?;
    store.initialize()?;
    store.close()?;

    println!("Database ready at {}", db_path.display());
    Ok(())
}

fn run_lists(data_dir: PathBuf, json: bool) -> anyhow::Result<()> {
    let db_path = config::db_path(&data_dir);
    if !db_path.exists() {
        bail!(
            "No database at {}. Run 'shoplist init' first.",
            db_path.display()
        );
    }

    let store = SqliteStore::new(&db_path)?;
    let lists = flow::fetch_list_views(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
    } else if lists.is_empty() {
        println!("No lists yet.");
    } else {
        for list in &lists {
            println!("{}", list.list_name);
            for product in &list.products {
                println!("  {} x{} ({})", product.name, product.quantity, product.store);
            }
        }
    }

    Ok(())
}

async fn serve(layer: ConfigLayer) -> anyhow::Result<()> {
    let config = layer.into_config();

    fs::create_dir_all(&config.data_dir)?;
    let store = Arc::new(SqliteStore::new(config.db_path())?);
    store.initialize()?;
    info!("Using database {}", config.db_path().display());

    let state = Arc::new(AppState::new(store.clone(), config.static_dir.clone()));
    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    store.close()?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shoplist=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir } => run_init(data_dir)?,
        Commands::Lists { data_dir, json } => run_lists(data_dir, json)?,
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
            static_dir,
        } => {
            let from_file = match config {
                Some(path) => ConfigLayer::load(&path)?,
                None => ConfigLayer::default(),
            };
            let flags = ConfigLayer {
                host,
                port,
                data_dir,
                static_dir,
            };
            serve(from_file.merge(flags)).await?;
        }
    }

    Ok(())
}
