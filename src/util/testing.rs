// src/util/testing.rs

use std::env;
use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

/// One-shot guard for test-wide initialization (logging).
static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes the global test environment exactly once.
pub fn init_test_env() {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing`
/// is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    // Silence spammy modules
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "mio", "want", "tower_http"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves the process environment this crate reads and restores it on drop,
/// so env-mutating tests (run with `#[serial]`) cannot leak into each other.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_url: Option<String>,
    http_addr: Option<String>,
    openai_api_key: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_url: env::var("TICKLIST_DB_URL").ok(),
            http_addr: env::var("TICKLIST_HTTP_ADDR").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        restore_var("TICKLIST_DB_URL", &self.db_url);
        restore_var("TICKLIST_HTTP_ADDR", &self.http_addr);
        restore_var("OPENAI_API_KEY", &self.openai_api_key);
    }
}

fn restore_var(name: &str, value: &Option<String>) {
    match value {
        Some(v) => env::set_var(name, v),
        None => env::remove_var(name),
    }
}
