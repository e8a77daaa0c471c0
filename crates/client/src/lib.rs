//! Top-level client orchestrating Runtime, Frontend, and Wallet layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (simulation worker + frame clock)
//!   ├─→ Frontend (UI layer - CLI, GUI, etc.)
//!   └─→ Wallet (Optional - progress recording)
//! ```
//!
//! Frontend and wallet only talk to the game through a `RuntimeHandle`; a
//! slow or failing wallet never stalls ticks.

mod builder;
mod wallet;

pub use builder::ClientBuilder;
pub use wallet::{ProgressRecorder, WalletWorker};

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_blockchain_core::WalletBridge;
use runner_runtime::{LogSink, spawn_scoreboard_sink};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles independently built layers
/// 2. `Client::run()` starts the runtime clock in the background
/// 3. `Client::run()` optionally starts the wallet worker
/// 4. `Client::run()` transfers control to the frontend (blocking)
/// 5. On frontend exit, background tasks are cleaned up
pub struct Client {
    runtime: runner_runtime::Runtime,
    frontend: Box<dyn Frontend>,
    wallet: Option<Arc<dyn WalletBridge>>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any. Runtime and wallet failures are
    /// logged.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        let wallet_task = self
            .wallet
            .map(|wallet| tokio::spawn(WalletWorker::new(&handle, wallet).run()));

        let scoreboard_task = spawn_scoreboard_sink(&handle, LogSink);

        // Start runtime clock in background
        let mut runtime = self.runtime;
        let runtime_task = tokio::spawn(async move {
            if let Err(e) = runtime.run().await {
                tracing::error!("Runtime error: {}", e);
            }
        });

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        runtime_task.abort();
        let _ = runtime_task.await;
        scoreboard_task.abort();

        if let Some(task) = wallet_task {
            task.abort();
            let _ = task.await;
        }

        frontend_result
    }
}
