use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber for the current thread until the guard is
/// dropped. The filter comes from `RUST_LOG` and defaults to `info`.
pub fn scoped() -> DefaultGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
