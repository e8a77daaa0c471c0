//! Wallet bridge trait and its error surface.

use async_trait::async_trait;

use crate::types::{Address, ContractInfo, PlayerStats, TxReceipt};

/// Reasons a wallet or contract operation was rejected.
///
/// Messages are meant to be shown to players as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Contract address not configured")]
    ContractNotConfigured,

    #[error("Transaction rejected by user")]
    TransactionRejected,

    #[error("Insufficient funds for gas fees")]
    InsufficientFunds,

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl WalletError {
    /// EIP-1193 "user rejected request".
    pub const RPC_USER_REJECTED: i64 = 4001;
    /// JSON-RPC internal error, reported by wallets when gas cannot be paid.
    pub const RPC_INTERNAL: i64 = -32603;

    /// Maps a provider error code and message to a wallet error.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        match code {
            Self::RPC_USER_REJECTED => WalletError::TransactionRejected,
            Self::RPC_INTERNAL => WalletError::InsufficientFunds,
            _ => WalletError::TransactionFailed(message.into()),
        }
    }

    /// True when retrying later might succeed without player action.
    pub fn is_transient(&self) -> bool {
        matches!(self, WalletError::TransactionFailed(_))
    }
}

/// Operations the game records against the progress contract.
///
/// Calls that take an optional address default to the connected account.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// Short label for logs (e.g., "simulated", "none").
    fn name(&self) -> &str;

    /// Connected account, if any.
    fn account(&self) -> Option<Address>;

    /// Static contract metadata (milestones, rewards, chain).
    fn contract_info(&self) -> ContractInfo;

    /// Records the player's progress counter. Counters never decrease.
    async fn update_taps(&self, count: u64) -> Result<TxReceipt, WalletError>;

    /// Raises the player's level. The level must exceed the current one.
    async fn update_level(&self, level: u32) -> Result<TxReceipt, WalletError>;

    /// Mints the NFT for an achieved milestone, once per milestone.
    async fn mint_milestone_nft(&self, milestone: u64) -> Result<TxReceipt, WalletError>;

    async fn get_player_stats(&self, address: Option<Address>) -> Result<PlayerStats, WalletError>;

    async fn is_milestone_achieved(
        &self,
        milestone: u64,
        address: Option<Address>,
    ) -> Result<bool, WalletError> {
        let stats = self.get_player_stats(address).await?;
        Ok(stats.total_taps >= milestone)
    }

    /// Lowest milestone the player has not reached yet.
    async fn next_milestone(&self, address: Option<Address>) -> Result<Option<u64>, WalletError> {
        let stats = self.get_player_stats(address).await?;
        Ok(self
            .contract_info()
            .milestones
            .into_iter()
            .find(|&milestone| milestone > stats.total_taps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_codes_map_to_player_messages() {
        assert_eq!(
            WalletError::from_rpc(4001, "denied").to_string(),
            "Transaction rejected by user"
        );
        assert_eq!(
            WalletError::from_rpc(-32603, "gas").to_string(),
            "Insufficient funds for gas fees"
        );
        assert_eq!(
            WalletError::from_rpc(-32000, "nonce too low").to_string(),
            "Transaction failed: nonce too low"
        );
    }
}
