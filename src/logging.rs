use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install the global subscriber, filtered by `RUST_LOG` and `info` when unset
///
/// Safe to call more than once, only the first call does anything
#[uniffi::export]
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if let Err(error) = fmt().with_env_filter(filter).with_target(true).try_init() {
            eprintln!("logging already initialized: {error}");
        }
    });
}
