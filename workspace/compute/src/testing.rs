use tracing::Level;
use tracing::subscriber::DefaultGuard;

/// Routes tracing output of the current test through the test harness.
pub fn init_test_tracing() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
