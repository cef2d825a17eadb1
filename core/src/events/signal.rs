//! Inbound event model
//!
//! The host raises one event for this plugin: a player threw a supply
//! signal. The event is a flat snapshot taken at delivery time: handlers
//! never reach back into the game world, everything they need (including
//! the timestamp used for cooldown math) rides on the event itself.

use std::time::Instant;

/// Stable player identity (steam id).
pub type PlayerId = u64;

/// Network id of a spawned world entity.
pub type EntityId = u64;

/// World position at the time of the throw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The item resolved from the thrown weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrownItem {
    /// Workshop skin id (0 = vanilla signal).
    pub skin_id: u64,
    /// Custom display name, empty when the item is unnamed.
    pub name: String,
}

/// Identity and location of the throwing player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub display_name: String,
    pub position: Position,
}

/// A supply signal left a player's hand.
#[derive(Debug, Clone)]
pub struct SignalThrown {
    /// Monotonic time the host delivered the event.
    pub timestamp: Instant,
    pub player: PlayerSnapshot,
    /// The spawned signal entity, target of explosion suppression.
    pub entity_id: EntityId,
    /// Item read from the thrown weapon. `None` when the host could not
    /// resolve it, which makes the whole event a no-op.
    pub item: Option<ThrownItem>,
}
