//! Curriculum Search - Binary Entry Point
//!
//! Loads the curriculum table and synonym data, then serves the search page
//! and JSON API until Ctrl+C.

use std::process;
use std::sync::Arc;

use curriculum_search::api::{create_router, AppState};
use curriculum_search::{AppConfig, CurriculumTable, Matcher, QueryExpander, Thesaurus};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;

    // A missing or malformed curriculum file is fatal
    let table = CurriculumTable::from_path(&config.csv_path).map_err(|e| {
        format!(
            "cannot load curriculum table from {}: {e}",
            config.csv_path.display()
        )
    })?;

    let thesaurus = Thesaurus::load(config.synonyms_path.as_deref());
    let matcher = Matcher::new(Arc::new(QueryExpander::new(thesaurus)))
        .with_threshold(config.fuzzy_threshold);

    let state = Arc::new(AppState::new(Arc::new(table), matcher));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("{} v{} listening on http://{}", curriculum_search::NAME, curriculum_search::VERSION, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
