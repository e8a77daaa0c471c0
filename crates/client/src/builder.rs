//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_blockchain_core::WalletBridge;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Runtime and Frontend are required; the wallet is optional.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runner_runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
    wallet: Option<Arc<dyn WalletBridge>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    pub fn runtime(mut self, runtime: runner_runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Set the wallet bridge (optional).
    ///
    /// When present, a background worker records milestones and run results
    /// through it. Without one, progress is kept in memory only.
    pub fn wallet(mut self, wallet: Arc<dyn WalletBridge>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the frontend is missing.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            runtime,
            frontend,
            wallet: self.wallet,
        })
    }
}
