use anyhow::Result;
use ergomate::commands::Cli;
use ergomate::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // In debug mode all message macros route through tracing, so the
    // subscriber has to be installed before the first command runs.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("ergomate=debug".parse()?))
            .init();
    }

    Cli::menu().await
}
