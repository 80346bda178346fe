use std::path::PathBuf;

use anagram_config::Config;
use anagram_io::{TcpTransport, Transport};
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod server;
mod state;

#[cfg(test)]
mod tests {
    mod server_tests;
}

use self::server::create_server;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve anagram lookups over HTTP", long_about = None)]
struct Args {
    /// HTTP listen address
    #[arg(long, env = "ANAGRAM_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Comma-separated word list
    #[arg(long, env = "ANAGRAM_WORD_LIST")]
    word_list: Option<PathBuf>,

    /// Static client directory
    #[arg(long, env = "ANAGRAM_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Lower-case words when building the index
    #[arg(long)]
    fold_case: bool,

    /// Emit logs as JSON
    #[arg(long, env = "ANAGRAM_LOG_JSON")]
    log_json: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(addr) = self.listen_addr {
            config.network.listen_addr = addr;
        }
        if let Some(path) = self.word_list {
            config.dictionary.word_list = path;
        }
        if let Some(dir) = self.static_dir {
            config.network.static_dir = dir;
        }
        if self.fold_case {
            config.dictionary.fold_case = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = Config::new();
    args.apply(&mut config);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown requested");
        signal_token.cancel();
    });

    run(config, TcpTransport::new(shutdown)).await
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "anagram=info,anagram_core=info,anagram_io=info,tower_http=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

/// Build the index, then serve until the transport stops
pub async fn run<T: Transport>(config: Config, transport: T) -> anyhow::Result<()> {
    tracing::info!("Starting anagram server");

    let server = create_server(config, transport).inspect_err(|e| {
        tracing::error!("Startup failed: {e}");
    })?;

    tracing::info!("Serving on {}", server.addr());
    server.run().await.inspect_err(|e| {
        tracing::error!("Server exited: {e}");
    })?;

    tracing::info!("Server stopped");
    Ok(())
}
