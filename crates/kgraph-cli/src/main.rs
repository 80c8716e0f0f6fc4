//! kgraph - Build a knowledge graph from a directory of text documents.

use clap::Parser;
use kgraph_cli::{Cli, Command, PipelineConfig, PipelineContext};
use kgraph_loader::{Credentials, LoaderConfig, Neo4jStore};
use kgraph_openie::OpenIeClient;
use kgraph_segmenter::UnicodeSegmenter;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--verbose`/`--quiet` win over `RUST_LOG`, which wins over the `info` default.
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose || cli.quiet {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> kgraph_cli::Result<()> {
    // Load config, then apply flag overrides
    let mut config = PipelineConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    let extractor = OpenIeClient::with_timeout(
        &config.extraction.service_url,
        config.extraction.request_timeout(),
    )?;
    let mut ctx = PipelineContext::new(config, UnicodeSegmenter::english(), Arc::new(extractor))?;

    match cli.command() {
        Command::Run => {
            let credentials = Credentials::from_file(&ctx.config().graph.credentials_file)?;
            ctx.extract().await?;
            let graph = connect(&ctx.config().graph, &credentials).await?;
            ctx.load(Arc::new(graph)).await?;
        }
        Command::Extract => {
            ctx.extract().await?;
        }
        Command::Load => {
            let credentials = Credentials::from_file(&ctx.config().graph.credentials_file)?;
            ctx.use_filtered_checkpoint()?;
            let graph = connect(&ctx.config().graph, &credentials).await?;
            ctx.load(Arc::new(graph)).await?;
        }
        Command::Statements => {
            ctx.use_filtered_checkpoint()?;
            for statement in ctx.statements() {
                println!("{}", statement);
            }
        }
    }

    info!("{}", ctx.metrics().summary());
    Ok(())
}

async fn connect(config: &LoaderConfig, credentials: &Credentials) -> kgraph_cli::Result<Neo4jStore> {
    let store = Neo4jStore::connect(&config.url, credentials, &config.connect_policy()).await?;
    Ok(store)
}
