use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use drey::model::Record;
use drey::repo::SquirrelRepo;
use drey::server;
use drey::store::FileStore;

#[derive(Parser, Debug)]
#[command(name = "drey")]
#[command(about = "A file-backed squirrel registry served over HTTP", long_about = None)]
struct Cli {
    /// Path to the store file (created with an empty list if missing)
    #[arg(short, long)]
    data: PathBuf,

    /// Socket address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

/// Initialize the global `tracing` subscriber from `RUST_LOG`, defaulting
/// to `info`. `try_init` keeps repeated calls in one process a no-op.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Open the store once up front so an unusable path fails at startup,
    // not on the first request. This is also what initializes a missing
    // file with an empty list.
    let store = match FileStore::open(&cli.data) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(path = %cli.data.display(), error = %e, "Failed to open store");
            std::process::exit(1);
        }
    };
    match store.load_all::<Record>() {
        Ok(squirrels) => {
            tracing::info!(path = %cli.data.display(), squirrels = squirrels.len(), "Store opened")
        }
        Err(e) => {
            tracing::error!(path = %cli.data.display(), error = %e, "Store content is unreadable");
            std::process::exit(1);
        }
    }

    let listener = match TcpListener::bind(cli.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %cli.listen, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(listener, SquirrelRepo::new(cli.data)).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
