//! Per-player, per-rule cooldown tracking
//!
//! Last-trigger times are keyed by (player, rule index) and live in memory
//! for the life of the handler; nothing is persisted and nothing is pruned.
//! The tracker never samples a clock; callers pass the event timestamp in,
//! which keeps the window math deterministic under test.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::events::PlayerId;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    /// The trigger may proceed.
    Ready,
    /// Still inside the window from the previous successful trigger.
    Blocked { remaining: Duration },
}

/// Tracks the last successful trigger time for every (player, rule) pair.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    last_trigger: HashMap<(PlayerId, usize), Instant>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a trigger is allowed at `now`.
    ///
    /// A non-positive `cooldown_seconds` disables the cooldown entirely.
    /// Checking never mutates state: a blocked attempt must not push the
    /// window out, so recording is a separate call the dispatcher makes
    /// only on a non-blocked outcome.
    pub fn check(
        &self,
        player: PlayerId,
        rule_index: usize,
        cooldown_seconds: f32,
        now: Instant,
    ) -> CooldownStatus {
        if cooldown_seconds <= 0.0 {
            return CooldownStatus::Ready;
        }
        let Some(last) = self.last_trigger.get(&(player, rule_index)) else {
            return CooldownStatus::Ready;
        };
        let ready_at = *last + Duration::from_secs_f32(cooldown_seconds);
        if now < ready_at {
            CooldownStatus::Blocked {
                remaining: ready_at - now,
            }
        } else {
            CooldownStatus::Ready
        }
    }

    /// Record a successful trigger at `now`, overwriting any previous entry.
    pub fn record(&mut self, player: PlayerId, rule_index: usize, now: Instant) {
        self.last_trigger.insert((player, rule_index), now);
    }
}
