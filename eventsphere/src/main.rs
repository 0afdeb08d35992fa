use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eventsphere::config;
use eventsphere::graph::{self, LayoutConfig};
use eventsphere::marvel::MarvelClient;
use eventsphere::pipeline::Pipeline;
use eventsphere::storage::EventCache;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!(error = %err, "load failed");
        for (depth, cause) in err.chain().skip(1).enumerate() {
            error!(cause_depth = depth + 1, cause = %cause, "caused by");
        }
        eprintln!("load failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();

    let client = MarvelClient::new(config::PUBLIC_KEY, config::PRIVATE_KEY, None);
    let cache = EventCache::new(config::CACHE_FILE);
    let pipeline = Pipeline::new(cache, client);

    let (events, source) = pipeline
        .load_events(config::EVENTS_LIMIT)
        .await
        .context("loading the event dataset")?;
    info!(events = events.len(), source = ?source, "dataset ready");

    let textures = pipeline.fetch_textures(&events).await;
    info!(textures = textures.len(), "thumbnails prefetched");

    let snapshot = graph::build_graph(&events, &LayoutConfig::default());
    for node in &snapshot.nodes {
        info!(
            title = %node.title,
            characters = node.character_ids.len(),
            size = node.size,
            "node"
        );
    }
    info!(
        nodes = snapshot.nodes.len(),
        edges = snapshot.edges.len(),
        max_link_strength = snapshot.max_link_strength,
        "graph ready"
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
