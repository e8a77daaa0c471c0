//! Score display sinks fed from the `Score` topic.

use tokio::sync::{broadcast::error::RecvError, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use runner_core::ScoreBoard;

use crate::api::RuntimeHandle;
use crate::events::{Event, Topic};

/// Receives scoreboard values whenever they change.
pub trait ScoreBoardSink: Send + 'static {
    fn update(&mut self, board: &ScoreBoard);
}

impl ScoreBoardSink for watch::Sender<ScoreBoard> {
    fn update(&mut self, board: &ScoreBoard) {
        self.send_replace(*board);
    }
}

/// Writes every update to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ScoreBoardSink for LogSink {
    fn update(&mut self, board: &ScoreBoard) {
        debug!(
            score = board.score,
            coins = board.coins,
            distance = board.distance,
            combo = board.combo,
            "Scoreboard"
        );
    }
}

/// Forwards `Score` events to `sink` until the runtime shuts down.
pub fn spawn_scoreboard_sink<S: ScoreBoardSink>(handle: &RuntimeHandle, mut sink: S) -> JoinHandle<()> {
    let mut scores = handle.subscribe(Topic::Score);
    tokio::spawn(async move {
        loop {
            match scores.recv().await {
                Ok(Event::Score(event)) => sink.update(&event.board),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Scoreboard sink lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
