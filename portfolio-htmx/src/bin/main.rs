//! portfolio CLI

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_htmx::{
    config::PortfolioConfig,
    forms::{ContactForm, FormRenderer},
    observability, server,
    template::IndexPage,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version)]
#[command(about = "Portfolio site with an HTMX contact form", long_about = None)]
struct Cli {
    /// Config file (defaults to ./portfolio.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Override the configured interface
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Load the configuration, render the page once, and report
    Check,
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<PortfolioConfig> {
    let path = PortfolioConfig::resolve_path(explicit);
    PortfolioConfig::load_from(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init()?;

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::run(config).await?;
        }
        Commands::Check => {
            let addr = config.server.socket_addr()?;
            let form = FormRenderer::render(&ContactForm::default(), None);
            let page = IndexPage::new(&config, &form, "").to_html()?;
            info!(
                %addr,
                title = %config.site.title,
                page_bytes = page.len(),
                "Configuration OK"
            );
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
