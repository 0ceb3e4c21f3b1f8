use std::sync::Arc;

use anyhow::{Context, Result};

use carprice::{load_config, ui, AppState};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting car price form (dataset: {}, model: {})",
        config.dataset_path.display(),
        config.model_path.display()
    );

    let state = Arc::new(AppState::load(&config)?);

    // One thread: each submission finishes before the next is handled
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    runtime.block_on(ui::serve(state, &config.bind_addr))
}
