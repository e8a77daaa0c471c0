//! Lane runner client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (simulation worker + frame clock) via RuntimeBuilder
//! 2. Frontend (UI) - CLI
//! 3. Wallet (optional) - simulated contract or walletless
//!
//! # Examples
//!
//! ```bash
//! # Default: terminal UI, no wallet
//! cargo run -p runner-client
//!
//! # Fixed seed with the simulated wallet
//! RUNNER_SEED=42 WALLET_MODE=simulated \
//!   WALLET_ADDRESS=0x1111111111111111111111111111111111111111 \
//!   GAME_CONTRACT_ADDRESS=0x2222222222222222222222222222222222222222 \
//!   cargo run -p runner-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_blockchain_core::{WalletConfig, connect};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runner_client::Client;
    use runner_runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let wallet_config = WalletConfig::from_env().context("Invalid wallet configuration")?;

    // 2. Setup logging
    logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting lane runner client");
    tracing::info!(
        tick_rate_hz = runtime_config.tick_rate_hz,
        restart_policy = %runtime_config.runner.restart_policy,
        power_ups = runtime_config.runner.power_ups_enabled,
        "Runtime configuration loaded"
    );

    // 3. Build Runtime (independent layer)
    let runtime = Runtime::builder()
        .config(runtime_config)
        .build()
        .await
        .context("Failed to build runtime")?;
    tracing::info!(seed = runtime.seed(), "Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config, &runtime.config().runner);

    // 5. Build Client (composition layer)
    let mut builder = Client::builder().runtime(runtime).frontend(frontend);

    // 6. Optional: attach the wallet
    let wallet = connect(&wallet_config);
    match wallet.account() {
        Some(account) => {
            tracing::info!(wallet = wallet.name(), account = %account, "Wallet attached");
            builder = builder.wallet(wallet);
        }
        None => tracing::info!("No wallet connected; progress stays local"),
    }

    // 7. Build and run
    let client = builder.build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
