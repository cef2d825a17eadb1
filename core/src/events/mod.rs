pub mod signal;

pub use signal::{EntityId, PlayerId, PlayerSnapshot, Position, SignalThrown, ThrownItem};
