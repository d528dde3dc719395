//! Workspace switcher demo - main entry point.
//!
//! Loads configuration and seed data, creates the in-memory backend,
//! and starts the GPUI application.

use std::sync::Arc;

use switcher_core::{
    builtin_recent_searches, load_or_builtin, AppConfig, BuiltinSource, JsonFileSource,
    Workspace,
};
use switcher_ui::backend::{InMemoryBackend, Latency};
use switcher_ui::window::run_demo;

/// Starting workspace list: the configured seed file, else the built-in catalog.
fn seed_workspaces(config: &AppConfig) -> Vec<Workspace> {
    match &config.data.seed_file {
        Some(path) => {
            tracing::info!("Seeding workspaces from {}", path.display());
            load_or_builtin(&JsonFileSource::new(path))
        }
        None => load_or_builtin(&BuiltinSource),
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Workspace switcher demo starting...");

    let config = AppConfig::load_or_default();

    // Create a tokio runtime and enter its context.
    // The backend's simulated latency uses tokio timers, which need a worker
    // thread driving them while GPUI owns the main thread.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("Failed to create tokio runtime");
    let _guard = rt.enter();

    let workspaces = seed_workspaces(&config);
    tracing::info!("Loaded {} workspaces", workspaces.len());

    let backend = Arc::new(
        InMemoryBackend::new(workspaces).with_latency(Latency::from(&config.behavior)),
    );

    tracing::info!("Starting GPUI application...");
    run_demo(config, backend, builtin_recent_searches());
}
