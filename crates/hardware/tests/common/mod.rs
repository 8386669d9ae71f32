//! Shared test infrastructure.

/// Mock collaborators for the register bank.
pub mod mocks;

use sparcsim_core::Config;
use sparcsim_core::RegisterBank;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a bank with default configuration and access tracing enabled.
pub fn traced_bank() -> RegisterBank {
    init_tracing();
    let mut config = Config::default();
    config.general.trace_accesses = true;
    RegisterBank::new(&config)
}
