//! Background worker recording run progress through a [`WalletBridge`].
//!
//! Milestones mint NFTs; finished runs raise the progress counter and the
//! player level. Wallet failures are logged and never reach the simulation.

use std::sync::Arc;

use client_blockchain_core::{TxReceipt, WalletBridge, WalletError};
use runner_runtime::{Event, MilestoneEvent, RunEvent, RunSummary, RuntimeHandle, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

/// Translates runtime events into contract calls.
///
/// Tracks what was already recorded so repeated runs only send calls that
/// the contract would accept (counters and levels never go down).
pub struct ProgressRecorder {
    wallet: Arc<dyn WalletBridge>,
    best_recorded: u64,
    level: u32,
}

impl ProgressRecorder {
    pub fn new(wallet: Arc<dyn WalletBridge>) -> Self {
        Self {
            wallet,
            best_recorded: 0,
            level: 0,
        }
    }

    /// Seeds the recorded values from the contract; keeps zeros on failure.
    pub async fn sync(&mut self) {
        match self.wallet.get_player_stats(None).await {
            Ok(stats) => {
                self.best_recorded = stats.total_taps;
                self.level = stats.current_level;
                debug!(taps = stats.total_taps, level = stats.current_level, "Wallet progress loaded");
            }
            Err(e) => debug!(error = %e, "Wallet progress unavailable"),
        }
    }

    pub async fn on_milestone(&mut self, event: &MilestoneEvent) {
        if !self.wallet.contract_info().is_milestone(event.milestone) {
            debug!(milestone = event.milestone, "Milestone has no NFT");
            return;
        }
        self.record_progress(event.score).await;
        let result = self.wallet.mint_milestone_nft(event.milestone).await;
        log_result("mint_milestone_nft", &result);
    }

    pub async fn on_run_ended(&mut self, summary: &RunSummary) {
        self.record_progress(summary.score).await;

        let level = summary.milestones_reached + 1;
        if level > self.level {
            let result = self.wallet.update_level(level).await;
            if result.is_ok() {
                self.level = level;
            }
            log_result("update_level", &result);
        }
    }

    async fn record_progress(&mut self, score: u64) {
        if score <= self.best_recorded {
            return;
        }
        let result = self.wallet.update_taps(score).await;
        if result.is_ok() {
            self.best_recorded = score;
        }
        log_result("update_taps", &result);
    }
}

fn log_result(call: &str, result: &Result<TxReceipt, WalletError>) {
    match result {
        Ok(receipt) => info!(call, tx = %receipt.tx_hash, "Wallet transaction confirmed"),
        Err(e) => warn!(call, error = %e, "Wallet transaction failed"),
    }
}

/// Worker owning the event subscriptions; construct before ticking so no
/// event is missed.
pub struct WalletWorker {
    recorder: ProgressRecorder,
    runs: broadcast::Receiver<Event>,
    milestones: broadcast::Receiver<Event>,
}

impl WalletWorker {
    pub fn new(handle: &RuntimeHandle, wallet: Arc<dyn WalletBridge>) -> Self {
        Self {
            recorder: ProgressRecorder::new(wallet),
            runs: handle.subscribe(Topic::Run),
            milestones: handle.subscribe(Topic::Milestone),
        }
    }

    /// Processes events until the runtime shuts down.
    pub async fn run(mut self) {
        info!(wallet = self.recorder.wallet.name(), "Wallet worker started");
        self.recorder.sync().await;

        loop {
            tokio::select! {
                result = self.milestones.recv() => match result {
                    Ok(Event::Milestone(event)) => self.recorder.on_milestone(&event).await,
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "Wallet worker missed milestones"),
                    Err(RecvError::Closed) => break,
                },
                result = self.runs.recv() => match result {
                    Ok(Event::Run(RunEvent::Ended(summary))) => self.recorder.on_run_ended(&summary).await,
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "Wallet worker lagged behind run events"),
                    Err(RecvError::Closed) => break,
                },
            }
        }

        info!("Wallet worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use client_blockchain_core::{Address, SimulatedContract, TxKind};
    use runner_core::{Lane, ObstacleKind, RunnerConfig, Tick};
    use runner_runtime::{Injection, Runtime, RuntimeConfig};

    use super::*;

    const OVERLAP_Y: f32 = 480.0;

    fn contract() -> SimulatedContract {
        let account: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
        let address: Address = "0x2222222222222222222222222222222222222222".parse().unwrap();
        SimulatedContract::new(account, Some(address), 42161)
    }

    fn kinds(contract: &SimulatedContract) -> Vec<TxKind> {
        contract.history().into_iter().map(|r| r.kind).collect()
    }

    fn summary(score: u64, milestones_reached: u32) -> RunSummary {
        RunSummary {
            score,
            coins: 0,
            distance: score / 10,
            max_combo: 0,
            milestones_reached,
            ticks: 100,
        }
    }

    #[tokio::test]
    async fn milestone_records_progress_then_mints() {
        let contract = contract();
        let mut recorder = ProgressRecorder::new(Arc::new(contract.clone()));

        recorder
            .on_milestone(&MilestoneEvent {
                milestone: 100,
                score: 104,
                tick: Tick(500),
            })
            .await;

        assert_eq!(
            kinds(&contract),
            [
                TxKind::UpdateTaps { count: 104 },
                TxKind::MintNft { milestone: 100 }
            ]
        );
    }

    #[tokio::test]
    async fn milestones_without_nft_are_skipped() {
        let contract = contract();
        let mut recorder = ProgressRecorder::new(Arc::new(contract.clone()));
        recorder
            .on_milestone(&MilestoneEvent {
                milestone: 50_000,
                score: 50_010,
                tick: Tick(9000),
            })
            .await;
        assert!(contract.history().is_empty());
    }

    #[tokio::test]
    async fn levels_and_counters_only_move_up() {
        let contract = contract();
        let mut recorder = ProgressRecorder::new(Arc::new(contract.clone()));

        recorder.on_run_ended(&summary(600, 2)).await;
        recorder.on_run_ended(&summary(90, 0)).await;

        assert_eq!(
            kinds(&contract),
            [
                TxKind::UpdateTaps { count: 600 },
                TxKind::UpdateLevel { level: 3 }
            ]
        );
    }

    #[tokio::test]
    async fn failures_are_retried_on_the_next_run() {
        let contract = contract();
        let mut recorder = ProgressRecorder::new(Arc::new(contract.clone()));

        contract.fail_next(4001, "User rejected");
        recorder.on_run_ended(&summary(30, 0)).await;
        // Only the level went through.
        assert_eq!(kinds(&contract), [TxKind::UpdateLevel { level: 1 }]);

        recorder.on_run_ended(&summary(30, 0)).await;
        assert_eq!(contract.history().last().map(|r| r.kind), Some(TxKind::UpdateTaps { count: 30 }));
    }

    #[tokio::test]
    async fn sync_picks_up_existing_progress() {
        let contract = contract();
        contract.update_taps(500).await.unwrap();
        contract.update_level(2).await.unwrap();

        let mut recorder = ProgressRecorder::new(Arc::new(contract.clone()));
        recorder.sync().await;
        recorder.on_run_ended(&summary(200, 1)).await;

        assert_eq!(contract.history().len(), 2);
    }

    #[tokio::test]
    async fn worker_records_a_crashed_run() {
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                runner: RunnerConfig::manual_spawns(),
                seed: Some(11),
                ..RuntimeConfig::default()
            })
            .build()
            .await
            .unwrap();
        let handle = runtime.handle();
        let contract = contract();

        let worker = WalletWorker::new(&handle, Arc::new(contract.clone()));
        let task = tokio::spawn(worker.run());

        handle.start().await.unwrap();
        handle
            .inject(Injection::Coin {
                lane: Lane::Center,
                y: OVERLAP_Y,
            })
            .await
            .unwrap();
        handle.advance(1).await.unwrap();
        handle
            .inject(Injection::Obstacle {
                lane: Lane::Center,
                y: OVERLAP_Y,
                kind: ObstacleKind::Train,
            })
            .await
            .unwrap();
        handle.advance(1).await.unwrap();

        tokio::time::timeout(Duration::from_secs(2), async {
            while contract.history().len() < 2 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("wallet calls within timeout");

        assert_eq!(
            kinds(&contract),
            [
                TxKind::UpdateTaps { count: 10 },
                TxKind::UpdateLevel { level: 1 }
            ]
        );
        task.abort();
    }
}
