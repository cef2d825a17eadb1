//! Host process abstraction
//!
//! Everything the plugin asks of the game server goes through this trait:
//! command execution, chat replies, grid naming, and localized message
//! lookup. Handlers stay testable against a recording fake, and the real
//! implementation is a thin adapter over the host API.

use crate::events::{EntityId, PlayerId, Position};

/// Localization key for the cooldown reply. The template carries one
/// positional `{0}` slot for the formatted remaining time.
pub const MSG_COOLDOWN_ACTIVE: &str = "CooldownActive";

/// English defaults for every message key, for the host to register with
/// its localization registry at plugin load.
pub fn default_messages() -> Vec<(&'static str, &'static str)> {
    vec![(
        MSG_COOLDOWN_ACTIVE,
        "You must wait {0} before throwing another supply signal.",
    )]
}

/// Outbound capabilities of the game server.
pub trait Host {
    /// Cancel the pending detonation of a thrown signal entity.
    fn cancel_detonation(&mut self, entity: EntityId);

    /// Execute a command in a player's client context.
    fn run_client_command(&mut self, player: PlayerId, command: &str);

    /// Execute a command in the server console context.
    fn run_server_command(&mut self, command: &str);

    /// Send a chat reply to a single player.
    fn send_reply(&mut self, player: PlayerId, message: &str);

    /// Send a chat message to every connected player.
    fn broadcast(&mut self, message: &str);

    /// Human-readable map grid label for a world position (e.g. `D12`).
    fn grid_label(&self, position: Position) -> String;

    /// Look up a registered message template in the player's locale.
    fn message(&self, key: &str, player: PlayerId) -> String;
}
