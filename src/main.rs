use anyhow::Context;
use clap::Parser;
use hsmatch_api::{AppState, RestApi};
use hsmatch_core::{load_catalog, CatalogRow};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// HS tariff code suggestion service
#[derive(Parser, Debug)]
#[command(name = "hsmatch")]
#[command(about = "Suggest HS tariff codes for product descriptions", long_about = None)]
struct Args {
    /// Path to the reference catalog (JSON array of {item_id, hs_code, display_name})
    #[arg(short, long)]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Number of suggestions returned per query by default
    #[arg(long, default_value_t = 2)]
    top_n: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting hsmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog file: {:?}", args.catalog);

    let file = std::fs::File::open(&args.catalog)
        .with_context(|| format!("failed to open catalog file {:?}", args.catalog))?;
    let rows: Vec<CatalogRow> = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse catalog file {:?}", args.catalog))?;

    let index = load_catalog(rows).context("failed to build the corpus index")?;
    info!(
        "Catalog indexed: {} items, {} vocabulary terms",
        index.len(),
        index.vocab_size()
    );

    let state = AppState {
        index: Arc::new(index),
        default_top_n: args.top_n,
    };

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(state, args.http_port)
        .await
        .context("HTTP server error")?;

    info!("Shutting down...");
    Ok(())
}
