//! Utilities for reacting to runtime events inside UI layers.
use runner_core::{ClearedBy, Phase, SimEvent, Tick};
use runner_runtime::{Event, MilestoneEvent, RunEvent, RunSummary};

use crate::config::MessageVisibility;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Turns bus events into player-facing messages.
#[derive(Clone, Debug)]
pub struct RunMessages {
    log: MessageLog,
    visibility: MessageVisibility,
}

impl RunMessages {
    pub fn new(capacity: usize, visibility: MessageVisibility) -> Self {
        Self {
            log: MessageLog::new(capacity),
            visibility,
        }
    }

    fn push(&mut self, text: String, tick: Option<Tick>, level: MessageLevel) {
        self.log.push(MessageEntry::new(text, tick, level));
    }

    fn on_run_event(&mut self, event: &RunEvent) {
        match event {
            RunEvent::Reset { to, .. } => {
                let text = match to {
                    Phase::Playing => "Run started. Good luck!",
                    _ => "Back at the start line. Press Enter to run.",
                };
                self.push(text.to_string(), None, MessageLevel::Info);
            }
            RunEvent::PhaseChanged { .. } => {}
            RunEvent::Sim { tick, event } => self.on_sim_event(*tick, event),
            RunEvent::Ended(summary) => {
                self.push(describe_summary(summary), None, MessageLevel::Warning);
            }
        }
    }

    fn on_sim_event(&mut self, tick: Tick, event: &SimEvent) {
        let tick = Some(tick);
        match event {
            SimEvent::CoinCollected { value, combo, .. } if self.visibility.show_coins => {
                self.push(format!("+{value} coin (combo x{combo})"), tick, MessageLevel::Success);
            }
            SimEvent::PowerUpCollected { kind, .. } if self.visibility.show_power_ups => {
                self.push(format!("{} active!", capitalize(&kind.to_string())), tick, MessageLevel::Success);
            }
            SimEvent::PowerUpExpired { kind } if self.visibility.show_power_ups => {
                self.push(format!("{} wore off", capitalize(&kind.to_string())), tick, MessageLevel::Info);
            }
            SimEvent::ObstacleCleared { by, .. } if self.visibility.show_clears => {
                let text = match by {
                    ClearedBy::Jump => "Jumped clear",
                    ClearedBy::Slide => "Slid under",
                };
                self.push(text.to_string(), tick, MessageLevel::Info);
            }
            SimEvent::Crashed { kind, .. } => {
                self.push(format!("Crashed into a {kind}!"), tick, MessageLevel::Error);
            }
            _ => {}
        }
    }

    fn on_milestone(&mut self, event: &MilestoneEvent) {
        self.push(
            format!("Milestone {} reached!", event.milestone),
            Some(event.tick),
            MessageLevel::Success,
        );
    }
}

impl EventConsumer for RunMessages {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Run(run) => self.on_run_event(run),
            Event::Milestone(milestone) => self.on_milestone(milestone),
            Event::Score(_) => {}
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

fn describe_summary(summary: &RunSummary) -> String {
    format!(
        "Game over: score {}, {} coins, {}m, best combo x{}",
        summary.score, summary.coins, summary.distance, summary.max_combo
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use runner_core::{EntityId, Lane, ObstacleKind, PowerUpKind};

    use super::*;

    fn consumer() -> RunMessages {
        RunMessages::new(16, MessageVisibility::default())
    }

    fn texts(consumer: &RunMessages) -> Vec<String> {
        consumer
            .message_log()
            .recent(16)
            .map(|entry| entry.text.clone())
            .collect()
    }

    #[test]
    fn crash_and_summary_are_always_logged() {
        let mut messages = consumer();
        messages.on_event(&Event::Run(RunEvent::Sim {
            tick: Tick(90),
            event: SimEvent::Crashed {
                id: EntityId(3),
                kind: ObstacleKind::Train,
            },
        }));
        messages.on_event(&Event::Run(RunEvent::Ended(RunSummary {
            score: 40,
            coins: 4,
            distance: 4,
            max_combo: 2,
            milestones_reached: 0,
            ticks: 90,
        })));

        assert_eq!(
            texts(&messages),
            [
                "Game over: score 40, 4 coins, 4m, best combo x2",
                "Crashed into a train!",
            ]
        );
        let newest = messages.message_log().recent(1).next().unwrap();
        assert_eq!(newest.level, MessageLevel::Warning);
    }

    #[test]
    fn coin_messages_follow_visibility() {
        let coin = Event::Run(RunEvent::Sim {
            tick: Tick(5),
            event: SimEvent::CoinCollected {
                id: EntityId(1),
                lane: Lane::Center,
                value: 12,
                combo: 2,
            },
        });

        let mut hidden = consumer();
        assert!(hidden.on_event(&coin).requires_redraw);
        assert!(hidden.message_log().is_empty());

        let mut shown = RunMessages::new(
            16,
            MessageVisibility {
                show_coins: true,
                ..MessageVisibility::default()
            },
        );
        shown.on_event(&coin);
        assert_eq!(texts(&shown), ["+12 coin (combo x2)"]);
    }

    #[test]
    fn power_up_lifecycle_reads_naturally() {
        let mut messages = consumer();
        messages.on_event(&Event::Run(RunEvent::Sim {
            tick: Tick(1),
            event: SimEvent::PowerUpCollected {
                id: EntityId(9),
                kind: PowerUpKind::Magnet,
            },
        }));
        messages.on_event(&Event::Run(RunEvent::Sim {
            tick: Tick(301),
            event: SimEvent::PowerUpExpired {
                kind: PowerUpKind::Magnet,
            },
        }));
        assert_eq!(texts(&messages), ["Magnet wore off", "Magnet active!"]);
    }

    #[test]
    fn milestones_and_resets_are_logged() {
        let mut messages = consumer();
        messages.on_event(&Event::Run(RunEvent::Reset {
            from: Phase::Start,
            to: Phase::Playing,
        }));
        messages.on_event(&Event::Milestone(MilestoneEvent {
            milestone: 100,
            score: 104,
            tick: Tick(400),
        }));
        assert_eq!(
            texts(&messages),
            ["Milestone 100 reached!", "Run started. Good luck!"]
        );
    }
}
