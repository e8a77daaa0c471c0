//! Wallet abstraction layer for the runner game.
//!
//! Progress (coins/score "taps", levels, milestone NFTs) is recorded against
//! an external game contract through a [`WalletBridge`]. The simulation
//! never waits on it: hosts forward events to a bridge in the background and
//! only log failures.
//!
//! # Implementations
//!
//! - [`SimulatedContract`]: in-memory contract with the same rules and error
//!   surface, used in development and tests
//! - [`NoWallet`]: degraded mode when no wallet provider is available
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{WalletBridge, WalletConfig, connect};
//!
//! let wallet = connect(&WalletConfig::from_env()?);
//! let receipt = wallet.mint_milestone_nft(100).await?;
//! ```

pub mod config;
pub mod no_wallet;
pub mod simulated;
pub mod traits;
pub mod types;

pub use config::{WalletConfig, WalletConfigError, WalletMode, connect};
pub use no_wallet::NoWallet;
pub use simulated::SimulatedContract;
pub use traits::{WalletBridge, WalletError};
pub use types::{Address, AddressParseError, ContractInfo, PlayerStats, TxHash, TxKind, TxReceipt};
