//! In-memory progress contract.
//!
//! Applies the same rules a deployed contract enforces (monotonic counters,
//! one NFT per achieved milestone, increasing levels) so hosts can exercise
//! wallet flows without a network.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::traits::{WalletBridge, WalletError};
use crate::types::{Address, ContractInfo, PlayerStats, TxHash, TxKind, TxReceipt};

#[derive(Debug, Default)]
struct Ledger {
    players: HashMap<Address, PlayerStats>,
    minted: HashSet<(Address, u64)>,
    tx_counter: u64,
    /// Provider error to return from the next state-changing call.
    pending_failure: Option<(i64, String)>,
    history: Vec<TxReceipt>,
}

/// Simulated contract bound to a single connected account.
#[derive(Clone)]
pub struct SimulatedContract {
    account: Address,
    info: ContractInfo,
    ledger: Arc<Mutex<Ledger>>,
}

impl SimulatedContract {
    pub fn new(account: Address, contract_address: Option<Address>, chain_id: u64) -> Self {
        Self {
            account,
            info: ContractInfo::new(chain_id, contract_address),
            ledger: Arc::new(Mutex::new(Ledger::default())),
        }
    }

    /// Makes the next state-changing call fail with a provider error code.
    pub fn fail_next(&self, code: i64, message: impl Into<String>) {
        self.ledger().pending_failure = Some((code, message.into()));
    }

    /// Receipts of all successful calls, oldest first.
    pub fn history(&self) -> Vec<TxReceipt> {
        self.ledger().history.clone()
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_contract(&self) -> Result<(), WalletError> {
        match self.info.address {
            Some(address) if !address.is_zero() => Ok(()),
            _ => Err(WalletError::ContractNotConfigured),
        }
    }

    /// Runs `apply` against the caller's stats and records a receipt.
    fn transact<F>(&self, kind: TxKind, apply: F) -> Result<TxReceipt, WalletError>
    where
        F: FnOnce(&mut Ledger) -> Result<(), WalletError>,
    {
        self.require_contract()?;
        let mut ledger = self.ledger();
        if let Some((code, message)) = ledger.pending_failure.take() {
            return Err(WalletError::from_rpc(code, message));
        }
        apply(&mut ledger)?;

        ledger.tx_counter += 1;
        let mut hash = [0u8; 32];
        hash[..20].copy_from_slice(&self.account.0);
        hash[24..].copy_from_slice(&ledger.tx_counter.to_be_bytes());
        let receipt = TxReceipt {
            tx_hash: TxHash(hash),
            kind,
            from: self.account,
            confirmed_at: Utc::now(),
        };
        debug!(tx = %receipt.tx_hash, ?kind, "Simulated transaction confirmed");
        ledger.history.push(receipt.clone());
        Ok(receipt)
    }
}

#[async_trait]
impl WalletBridge for SimulatedContract {
    fn name(&self) -> &str {
        "simulated"
    }

    fn account(&self) -> Option<Address> {
        Some(self.account)
    }

    fn contract_info(&self) -> ContractInfo {
        self.info.clone()
    }

    async fn update_taps(&self, count: u64) -> Result<TxReceipt, WalletError> {
        let account = self.account;
        self.transact(TxKind::UpdateTaps { count }, |ledger| {
            let stats = ledger.players.entry(account).or_default();
            stats.total_taps = stats.total_taps.max(count);
            Ok(())
        })
    }

    async fn update_level(&self, level: u32) -> Result<TxReceipt, WalletError> {
        let account = self.account;
        self.transact(TxKind::UpdateLevel { level }, |ledger| {
            let stats = ledger.players.entry(account).or_default();
            if level <= stats.current_level {
                return Err(WalletError::TransactionFailed(format!(
                    "level {level} does not exceed current level {}",
                    stats.current_level
                )));
            }
            stats.current_level = level;
            stats.last_level_up_timestamp = Some(Utc::now());
            Ok(())
        })
    }

    async fn mint_milestone_nft(&self, milestone: u64) -> Result<TxReceipt, WalletError> {
        let account = self.account;
        let known = self.info.is_milestone(milestone);
        self.transact(TxKind::MintNft { milestone }, |ledger| {
            if !known {
                return Err(WalletError::TransactionFailed(format!(
                    "{milestone} is not a milestone"
                )));
            }
            if ledger.minted.contains(&(account, milestone)) {
                return Err(WalletError::TransactionFailed(format!(
                    "milestone {milestone} already minted"
                )));
            }
            let stats = ledger.players.entry(account).or_default();
            if stats.total_taps < milestone {
                return Err(WalletError::TransactionFailed(format!(
                    "milestone {milestone} not achieved"
                )));
            }
            stats.nfts_minted += 1;
            stats.last_mint_timestamp = Some(Utc::now());
            ledger.minted.insert((account, milestone));
            Ok(())
        })
    }

    async fn get_player_stats(&self, address: Option<Address>) -> Result<PlayerStats, WalletError> {
        self.require_contract()?;
        let address = address.unwrap_or(self.account);
        Ok(self
            .ledger()
            .players
            .get(&address)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Address {
        "0x1111111111111111111111111111111111111111".parse().unwrap()
    }

    fn contract() -> SimulatedContract {
        let address = "0x2222222222222222222222222222222222222222".parse().unwrap();
        SimulatedContract::new(account(), Some(address), 42161)
    }

    #[tokio::test]
    async fn taps_never_decrease() {
        let wallet = contract();
        wallet.update_taps(100).await.unwrap();
        wallet.update_taps(40).await.unwrap();

        let stats = wallet.get_player_stats(None).await.unwrap();
        assert_eq!(stats.total_taps, 100);
        assert_eq!(wallet.history().len(), 2);
    }

    #[tokio::test]
    async fn mint_requires_achieved_milestone_once() {
        let wallet = contract();
        assert!(matches!(
            wallet.mint_milestone_nft(100).await,
            Err(WalletError::TransactionFailed(_))
        ));

        wallet.update_taps(120).await.unwrap();
        assert!(wallet.is_milestone_achieved(100, None).await.unwrap());
        let receipt = wallet.mint_milestone_nft(100).await.unwrap();
        assert_eq!(receipt.kind, TxKind::MintNft { milestone: 100 });
        assert_eq!(receipt.from, account());

        assert!(wallet.mint_milestone_nft(100).await.is_err());
        let stats = wallet.get_player_stats(None).await.unwrap();
        assert_eq!(stats.nfts_minted, 1);
        assert!(stats.last_mint_timestamp.is_some());
    }

    #[tokio::test]
    async fn unknown_milestones_are_rejected() {
        let wallet = contract();
        wallet.update_taps(1_000_000).await.unwrap();
        assert!(wallet.mint_milestone_nft(123).await.is_err());
    }

    #[tokio::test]
    async fn levels_must_increase() {
        let wallet = contract();
        wallet.update_level(2).await.unwrap();
        assert!(wallet.update_level(2).await.is_err());
        wallet.update_level(3).await.unwrap();

        let stats = wallet.get_player_stats(None).await.unwrap();
        assert_eq!(stats.current_level, 3);
        assert!(stats.last_level_up_timestamp.is_some());
    }

    #[tokio::test]
    async fn next_milestone_tracks_progress() {
        let wallet = contract();
        assert_eq!(wallet.next_milestone(None).await.unwrap(), Some(100));
        wallet.update_taps(750).await.unwrap();
        assert_eq!(wallet.next_milestone(None).await.unwrap(), Some(1000));
        wallet.update_taps(10_000).await.unwrap();
        assert_eq!(wallet.next_milestone(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn injected_provider_errors_are_mapped_once() {
        let wallet = contract();
        wallet.fail_next(4001, "User denied");
        assert_eq!(
            wallet.update_taps(10).await,
            Err(WalletError::TransactionRejected)
        );
        wallet.fail_next(-32603, "gas");
        assert_eq!(
            wallet.update_level(1).await,
            Err(WalletError::InsufficientFunds)
        );
        assert!(wallet.update_taps(10).await.is_ok());
    }

    #[tokio::test]
    async fn missing_contract_address_is_reported() {
        let wallet = SimulatedContract::new(account(), None, 42161);
        assert_eq!(
            wallet.update_level(1).await,
            Err(WalletError::ContractNotConfigured)
        );
        assert_eq!(
            wallet.get_player_stats(None).await,
            Err(WalletError::ContractNotConfigured)
        );
    }

    #[tokio::test]
    async fn other_players_start_empty() {
        let wallet = contract();
        wallet.update_taps(500).await.unwrap();
        let other: Address = "0x3333333333333333333333333333333333333333".parse().unwrap();
        assert_eq!(
            wallet.get_player_stats(Some(other)).await.unwrap(),
            PlayerStats::default()
        );
    }
}
