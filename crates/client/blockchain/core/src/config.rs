//! Wallet selection and contract configuration.

use std::env;
use std::sync::Arc;

use tracing::{info, warn};

use crate::no_wallet::NoWallet;
use crate::simulated::SimulatedContract;
use crate::traits::WalletBridge;
use crate::types::{Address, AddressParseError};

/// Which wallet backend to connect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletMode {
    /// Play without recording progress.
    #[default]
    None,
    /// In-memory contract; useful for development and demos.
    Simulated,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalletConfigError {
    #[error("unknown WALLET_MODE '{0}' (expected none or simulated)")]
    UnknownMode(String),

    #[error("invalid {key}: {source}")]
    InvalidAddress {
        key: &'static str,
        #[source]
        source: AddressParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    pub mode: WalletMode,
    /// Player account; the simulated backend stays disconnected without one.
    pub account: Option<Address>,
    pub contract_address: Option<Address>,
    pub chain_id: u64,
}

impl WalletConfig {
    /// Arbitrum One.
    pub const DEFAULT_CHAIN_ID: u64 = 42161;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WALLET_MODE` - `none` or `simulated` (default: none)
    /// - `WALLET_ADDRESS` - Player account address
    /// - `GAME_CONTRACT_ADDRESS` - Progress contract address
    /// - `WALLET_CHAIN_ID` - Chain ID (default: 42161)
    pub fn from_env() -> Result<Self, WalletConfigError> {
        let mut config = Self::default();

        if let Ok(mode) = env::var("WALLET_MODE") {
            config.mode = match mode.trim().to_lowercase().as_str() {
                "" | "none" | "off" => WalletMode::None,
                "simulated" | "sim" => WalletMode::Simulated,
                other => return Err(WalletConfigError::UnknownMode(other.to_string())),
            };
        }
        config.account = read_address("WALLET_ADDRESS")?;
        config.contract_address = read_address("GAME_CONTRACT_ADDRESS")?;
        if let Some(chain_id) = env::var("WALLET_CHAIN_ID")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            config.chain_id = chain_id;
        }

        Ok(config)
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            mode: WalletMode::None,
            account: None,
            contract_address: None,
            chain_id: Self::DEFAULT_CHAIN_ID,
        }
    }
}

fn read_address(key: &'static str) -> Result<Option<Address>, WalletConfigError> {
    match env::var(key) {
        Ok(value) => parse_address(key, &value),
        Err(_) => Ok(None),
    }
}

/// Blank values mean unset.
fn parse_address(key: &'static str, value: &str) -> Result<Option<Address>, WalletConfigError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|source| WalletConfigError::InvalidAddress { key, source })
}

/// Builds the wallet bridge selected by `config`.
///
/// Never fails: a missing provider degrades to [`NoWallet`].
pub fn connect(config: &WalletConfig) -> Arc<dyn WalletBridge> {
    match config.mode {
        WalletMode::None => Arc::new(NoWallet::new(config.chain_id)),
        WalletMode::Simulated => match config.account {
            Some(account) => {
                info!(account = %account.short(), chain_id = config.chain_id, "Simulated wallet connected");
                Arc::new(SimulatedContract::new(
                    account,
                    config.contract_address,
                    config.chain_id,
                ))
            }
            None => {
                warn!("WALLET_MODE=simulated without WALLET_ADDRESS; wallet features disabled");
                Arc::new(NoWallet::new(config.chain_id))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_walletless() {
        let wallet = connect(&WalletConfig::default());
        assert_eq!(wallet.name(), "none");
        assert!(wallet.account().is_none());
    }

    #[test]
    fn simulated_without_account_degrades() {
        let config = WalletConfig {
            mode: WalletMode::Simulated,
            ..WalletConfig::default()
        };
        assert_eq!(connect(&config).name(), "none");
    }

    #[test]
    fn simulated_with_account_connects() {
        let account: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
        let config = WalletConfig {
            mode: WalletMode::Simulated,
            account: Some(account),
            ..WalletConfig::default()
        };
        let wallet = connect(&config);
        assert_eq!(wallet.name(), "simulated");
        assert_eq!(wallet.account(), Some(account));
    }

    #[test]
    fn malformed_addresses_name_their_variable() {
        assert_eq!(parse_address("WALLET_ADDRESS", "  "), Ok(None));

        let err = parse_address(
            "GAME_CONTRACT_ADDRESS",
            "0xzz22222222222222222222222222222222222222",
        )
        .unwrap_err();
        assert!(matches!(
            &err,
            WalletConfigError::InvalidAddress {
                key: "GAME_CONTRACT_ADDRESS",
                source: AddressParseError::Hex(_),
            }
        ));
        assert!(err.to_string().starts_with("invalid GAME_CONTRACT_ADDRESS: invalid hex"));

        assert_eq!(
            parse_address("WALLET_ADDRESS", "0x12"),
            Err(WalletConfigError::InvalidAddress {
                key: "WALLET_ADDRESS",
                source: AddressParseError::Length(2),
            })
        );
    }
}
