pub mod config;
pub mod cooldown;
pub mod events;
pub mod handlers;
pub mod host;
pub mod template;

// Re-exports for convenience
pub use config::{ConfigError, CURRENT_VERSION};
pub use cooldown::{CooldownStatus, CooldownTracker};
pub use events::{EntityId, PlayerId, PlayerSnapshot, Position, SignalThrown, ThrownItem};
pub use handlers::SignalCommands;
pub use host::Host;
