//! Walletless mode.

use async_trait::async_trait;

use crate::traits::{WalletBridge, WalletError};
use crate::types::{Address, ContractInfo, PlayerStats, TxReceipt};

/// Bridge used when no wallet is available; every call reports
/// [`WalletError::WalletNotConnected`].
#[derive(Debug, Clone)]
pub struct NoWallet {
    chain_id: u64,
}

impl NoWallet {
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }
}

#[async_trait]
impl WalletBridge for NoWallet {
    fn name(&self) -> &str {
        "none"
    }

    fn account(&self) -> Option<Address> {
        None
    }

    fn contract_info(&self) -> ContractInfo {
        ContractInfo::new(self.chain_id, None)
    }

    async fn update_taps(&self, _count: u64) -> Result<TxReceipt, WalletError> {
        Err(WalletError::WalletNotConnected)
    }

    async fn update_level(&self, _level: u32) -> Result<TxReceipt, WalletError> {
        Err(WalletError::WalletNotConnected)
    }

    async fn mint_milestone_nft(&self, _milestone: u64) -> Result<TxReceipt, WalletError> {
        Err(WalletError::WalletNotConnected)
    }

    async fn get_player_stats(&self, _address: Option<Address>) -> Result<PlayerStats, WalletError> {
        Err(WalletError::WalletNotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_reports_disconnected() {
        let wallet = NoWallet::new(1);
        assert_eq!(wallet.update_taps(5).await, Err(WalletError::WalletNotConnected));
        assert_eq!(wallet.update_level(2).await, Err(WalletError::WalletNotConnected));
        assert_eq!(
            wallet.mint_milestone_nft(100).await,
            Err(WalletError::WalletNotConnected)
        );
        assert_eq!(
            wallet.next_milestone(None).await,
            Err(WalletError::WalletNotConnected)
        );
    }
}
