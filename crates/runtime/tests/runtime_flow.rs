use std::time::Duration;

use runner_core::{
    CommandOutcome, InputCommand, Lane, ObstacleKind, Phase, PowerUpKind, RestartPolicy,
    RunnerConfig, ScoreBoard, SimEvent,
};
use runner_runtime::{
    Event, Injection, RunEvent, Runtime, RuntimeConfig, RuntimeError, Topic, spawn_scoreboard_sink,
};
use tokio::sync::{broadcast, watch};
use tokio::time::timeout;

/// Top edge at which an injected body overlaps the grounded player after
/// one scroll step with default constants.
const OVERLAP_Y: f32 = 480.0;

fn manual_config() -> RuntimeConfig {
    RuntimeConfig {
        runner: RunnerConfig::manual_spawns(),
        seed: Some(7),
        ..RuntimeConfig::default()
    }
}

async fn build(config: RuntimeConfig) -> Runtime {
    Runtime::builder()
        .config(config)
        .build()
        .await
        .expect("runtime should build")
}

async fn next_event(rx: &mut broadcast::Receiver<Event>) -> Event {
    timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn coin_pickup_flows_through_worker_and_bus() {
    let runtime = build(manual_config()).await;
    let handle = runtime.handle();
    let mut scores = handle.subscribe(Topic::Score);
    let mut run_events = handle.subscribe(Topic::Run);

    let outcome = handle.start().await.expect("start");
    assert_eq!(
        outcome,
        CommandOutcome::Reset {
            from: Phase::Start,
            to: Phase::Playing
        }
    );
    assert_eq!(
        next_event(&mut run_events).await,
        Event::Run(RunEvent::Reset {
            from: Phase::Start,
            to: Phase::Playing
        })
    );

    handle
        .inject(Injection::Coin {
            lane: Lane::Center,
            y: OVERLAP_Y,
        })
        .await
        .expect("inject");
    let advanced = handle.advance(1).await.expect("advance");
    assert_eq!(advanced.ticks_run, 1);
    assert_eq!(advanced.scoreboard.score, 10);

    match next_event(&mut run_events).await {
        Event::Run(RunEvent::Sim {
            event: SimEvent::CoinCollected { value, combo, .. },
            ..
        }) => {
            assert_eq!(value, 10);
            assert_eq!(combo, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }

    match next_event(&mut scores).await {
        Event::Score(score) => {
            assert_eq!(
                score.board,
                ScoreBoard {
                    score: 10,
                    coins: 1,
                    distance: 1,
                    combo: 1,
                    max_combo: 1,
                }
            );
        }
        other => panic!("unexpected event {other:?}"),
    }

    let snapshot = handle.snapshot().await.expect("snapshot");
    assert!(snapshot.coins.is_empty());
    assert_eq!(snapshot.stats.coins_collected, 1);
}

#[tokio::test]
async fn crash_publishes_phase_change_and_summary() {
    let runtime = build(manual_config()).await;
    let handle = runtime.handle();
    let mut run_events = handle.subscribe(Topic::Run);

    handle.start().await.expect("start");
    handle
        .inject(Injection::Obstacle {
            lane: Lane::Center,
            y: OVERLAP_Y,
            kind: ObstacleKind::Train,
        })
        .await
        .expect("inject");

    let advanced = handle.advance(10).await.expect("advance");
    assert_eq!(advanced.ticks_run, 1);
    assert_eq!(advanced.phase, Phase::GameOver);

    let mut saw_phase_change = false;
    loop {
        match next_event(&mut run_events).await {
            Event::Run(RunEvent::PhaseChanged { from, to, .. }) => {
                assert_eq!((from, to), (Phase::Playing, Phase::GameOver));
                saw_phase_change = true;
            }
            Event::Run(RunEvent::Ended(summary)) => {
                assert!(saw_phase_change);
                assert_eq!(summary.ticks, 1);
                assert_eq!(summary.score, 0);
                break;
            }
            _ => {}
        }
    }

    // Halted until a lifecycle command.
    let advanced = handle.advance(5).await.expect("advance");
    assert_eq!(advanced.ticks_run, 0);
}

#[tokio::test]
async fn milestones_are_published_on_their_topic() {
    let config = RuntimeConfig {
        runner: RunnerConfig {
            milestones: vec![10, 20],
            ..RunnerConfig::manual_spawns()
        },
        ..manual_config()
    };
    let runtime = build(config).await;
    let handle = runtime.handle();
    let mut milestones = handle.subscribe(Topic::Milestone);

    handle.start().await.expect("start");
    handle
        .inject(Injection::Coin {
            lane: Lane::Center,
            y: OVERLAP_Y,
        })
        .await
        .expect("inject");
    handle.advance(1).await.expect("advance");

    match next_event(&mut milestones).await {
        Event::Milestone(event) => {
            assert_eq!(event.milestone, 10);
            assert_eq!(event.score, 10);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(milestones.try_recv().is_err());
}

#[tokio::test]
async fn input_is_ignored_until_started() {
    let runtime = build(manual_config()).await;
    let handle = runtime.handle();

    let outcome = handle.input(InputCommand::MoveLeft).await.expect("input");
    assert!(outcome.is_ignored());
    assert_eq!(handle.advance(3).await.expect("advance").ticks_run, 0);

    handle.start().await.expect("start");
    let outcome = handle.input(InputCommand::MoveLeft).await.expect("input");
    assert_eq!(outcome, CommandOutcome::Applied);
    let snapshot = handle.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.player.lane, Lane::Left);
}

#[tokio::test]
async fn shield_grant_survives_obstacle() {
    let runtime = build(manual_config()).await;
    let handle = runtime.handle();
    handle.start().await.expect("start");

    let granted = handle
        .inject(Injection::Grant(PowerUpKind::Shield))
        .await
        .expect("grant");
    assert_eq!(granted, None);
    handle
        .inject(Injection::Obstacle {
            lane: Lane::Center,
            y: OVERLAP_Y,
            kind: ObstacleKind::Train,
        })
        .await
        .expect("inject");

    let advanced = handle.advance(1).await.expect("advance");
    assert_eq!(advanced.phase, Phase::Playing);
}

#[tokio::test]
async fn restart_policy_is_honoured() {
    let config = RuntimeConfig {
        runner: RunnerConfig::manual_spawns().with_restart_policy(RestartPolicy::Resume),
        ..manual_config()
    };
    let runtime = build(config).await;
    let handle = runtime.handle();

    handle.start().await.expect("start");
    let outcome = handle.restart().await.expect("restart");
    assert_eq!(
        outcome,
        CommandOutcome::Reset {
            from: Phase::Playing,
            to: Phase::Playing
        }
    );
}

#[tokio::test]
async fn scoreboard_sink_receives_updates() {
    let runtime = build(manual_config()).await;
    let handle = runtime.handle();
    let (tx, mut rx) = watch::channel(ScoreBoard::default());
    let sink = spawn_scoreboard_sink(&handle, tx);

    handle.start().await.expect("start");
    handle
        .inject(Injection::Coin {
            lane: Lane::Center,
            y: OVERLAP_Y,
        })
        .await
        .expect("inject");
    handle.advance(1).await.expect("advance");

    timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("update within timeout")
        .expect("sender alive");
    assert_eq!(rx.borrow().coins, 1);

    sink.abort();
}

#[tokio::test]
async fn seeded_runtimes_replay_identically() {
    let config = RuntimeConfig {
        runner: RunnerConfig::default().with_restart_policy(RestartPolicy::Resume),
        seed: Some(1234),
        ..RuntimeConfig::default()
    };
    let a = build(config.clone()).await;
    let b = build(config).await;
    assert_eq!(a.seed(), 1234);

    for runtime in [&a, &b] {
        runtime.handle().start().await.expect("start");
        runtime.handle().advance(300).await.expect("advance");
    }
    let left = a.handle().snapshot().await.expect("snapshot");
    let right = b.handle().snapshot().await.expect("snapshot");
    assert_eq!(left, right);
}

#[tokio::test]
async fn invalid_configuration_is_rejected() {
    let config = RuntimeConfig {
        runner: RunnerConfig {
            max_speed: 1.0,
            ..RunnerConfig::default()
        },
        ..RuntimeConfig::default()
    };
    let result = Runtime::builder().config(config).build().await;
    assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));

    let config = RuntimeConfig {
        tick_rate_hz: 0,
        ..RuntimeConfig::default()
    };
    let result = Runtime::builder().config(config).build().await;
    assert!(matches!(result, Err(RuntimeError::ZeroTickRate)));

    let config = RuntimeConfig {
        tick_rate_hz: 2_000_000_000,
        ..RuntimeConfig::default()
    };
    let result = Runtime::builder().config(config).build().await;
    assert!(matches!(result, Err(RuntimeError::TickRateTooHigh(2_000_000_000))));
}

#[tokio::test]
async fn shutdown_joins_worker() {
    let runtime = build(manual_config()).await;
    runtime.shutdown().await.expect("clean shutdown");
}
