use trackle::commands::Cli;
use trackle::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logging only when explicitly requested; normal runs keep
    // plain console output.
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
