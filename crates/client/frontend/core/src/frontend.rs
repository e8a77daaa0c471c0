//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runner_runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the runner via [`RuntimeHandle`]:
/// - Subscribe to events (Run, Score, Milestone)
/// - Submit input and lifecycle commands
/// - Query snapshots for rendering
///
/// Frontends do NOT own the Runtime; the runtime paces ticks on its own and
/// the frontend only reads and steers.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runner_runtime::{RuntimeHandle, Topic};
/// use anyhow::Result;
///
/// struct HeadlessFrontend;
///
/// #[async_trait]
/// impl Frontend for HeadlessFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(Topic::Run);
///         handle.start().await?;
///         while let Ok(event) = events.recv().await {
///             println!("{event:?}");
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
