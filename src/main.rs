use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikipath::cli::{render_report, Cli};
use wikipath::{load_graph, PathFinder};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_filter().into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mode = cli.edge_mode();
    let store = load_graph(&cli.node_file, &cli.edge_file, mode).with_context(|| {
        format!(
            "failed to load graph from {} and {}",
            cli.node_file.display(),
            cli.edge_file.display()
        )
    })?;
    tracing::info!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        ?mode,
        "graph loaded"
    );

    let finder = PathFinder::new(&store);
    let report = render_report(&finder, &cli.query()).context("path query failed")?;
    println!("{report}");
    Ok(())
}
