//! Tracing subscriber setup for hosts and tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs a global fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Later calls are no-ops.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    INITIALIZED
        .get_or_try_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_filter))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
        })
        .map(|_| ())
}

pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
