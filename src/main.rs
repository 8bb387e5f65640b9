use anyhow::{Context, Result};
use clap::Parser;
use scribe_client::auth::CredentialFetcher;
use scribe_client::Config;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "scribe-client", about = "Capture engine client smoke test")]
struct Args {
    /// Path to the configuration file (stem or full name)
    #[arg(long, default_value = "config/scribe-client")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config).context("Failed to load configuration")?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "App metadata: id={} version={} device={}",
        cfg.metadata.app_id, cfg.metadata.app_version, cfg.metadata.device_id
    );
    info!("Token endpoint: {}", cfg.auth.token_url);

    // One exchange against the real endpoint to verify the credentials.
    let fetcher = CredentialFetcher::new(&cfg.auth).context("Invalid auth configuration")?;
    match fetcher.fetch().await {
        Ok(credential) => {
            info!("Access token obtained, expires at {}", credential.expiry);
        }
        Err(e) => {
            error!("Token exchange failed: {}", e);
        }
    }

    Ok(())
}
