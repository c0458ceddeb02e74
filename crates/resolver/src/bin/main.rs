use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use kusto_qualify_catalog::SchemaCache;
use kusto_qualify_resolver::{
    DocumentSession, QualifyEngine, QualifyOutcome, StringBuffer, TextBuffer, WorkspaceConfig,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let path = std::env::args()
        .nth(1)
        .context("usage: kusto-qualify <workspace.json> < query.kql")?;
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read workspace file '{path}'"))?;
    let config = Arc::new(WorkspaceConfig::from_json(&config).context("invalid workspace file")?);

    let mut query = String::new();
    std::io::stdin()
        .read_to_string(&mut query)
        .context("failed to read query from stdin")?;

    let cache = Arc::new(SchemaCache::new());
    config.prime(&cache).await;

    let engine = Arc::new(QualifyEngine::new(cache, config.clone(), config.clone()));
    let session = DocumentSession::new(engine);
    let mut buffer = StringBuffer::new(query);

    let outcome = session
        .qualify(&mut buffer, config.current.as_ref())
        .await
        .context("cannot qualify query")?;

    match outcome {
        QualifyOutcome::Rewritten { replacements } => {
            tracing::info!(replacements, "query rewritten");
        }
        QualifyOutcome::Unchanged => {
            tracing::info!("query already fully qualified or nothing resolved");
        }
        QualifyOutcome::InFlight => unreachable!("single invocation"),
    }

    print!("{}", buffer.text());
    Ok(())
}
