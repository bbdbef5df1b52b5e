//! Run the stairworks website

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stairworks_core::SiteConfig;
use stairworks_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: server.bind from config, 127.0.0.1:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Directory served under /assets (overrides server.assets_dir)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Site config file (default: $STAIRWORKS_CONFIG or ~/.stairworks/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the file settings
    pub fn server_config(&self, site: &SiteConfig) -> ServerConfig {
        let mut config = ServerConfig::from(&site.server);
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if self.cors_permissive {
            config.cors_permissive = true;
        }
        if let Some(assets) = &self.assets {
            config.assets_dir = assets.clone();
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let site = match &args.config {
        Some(path) => SiteConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::load().context("Failed to load site config")?,
    };

    let config = args.server_config(&site);
    let state = AppState::from_config(&site).context("Invalid finish catalog")?;

    tracing::info!("Starting stairworks site on {}", config.bind_addr);

    run_server(state, config).await.context("Server error")?;

    Ok(())
}
