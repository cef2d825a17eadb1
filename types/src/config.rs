//! Configuration schema for supply signal rules
//!
//! These types map 1:1 onto the persisted JSON document. Field names are
//! human-facing keys (`"Supply Signals"`, `"Item Skin Id"`, ...) since the
//! document is edited by server operators; unknown keys are ignored on load
//! and missing keys fall back to their defaults so documents written by
//! older plugin versions still parse.

use serde::{Deserialize, Serialize};

/// Root configuration document.
///
/// Rule order matters: the first rule matching a thrown item wins, so more
/// specific rules (with an item-name filter) belong before catch-alls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Dotted plugin version the document was written by. Compared
    /// lexicographically against the running version to decide migration.
    #[serde(rename = "Version")]
    pub version: String,

    /// Ordered rule list, one entry per signal skin variant.
    #[serde(rename = "Supply Signals", default)]
    pub supply_signals: Vec<SignalRule>,
}

impl Configuration {
    /// Find the first rule matching a thrown item, along with its index.
    ///
    /// The index identifies the rule for cooldown bookkeeping and stays
    /// stable for the lifetime of a loaded configuration.
    pub fn find_rule(&self, skin_id: u64, item_name: &str) -> Option<(usize, &SignalRule)> {
        self.supply_signals
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(skin_id, item_name))
    }
}

/// One configured signal variant: what to match and what to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRule {
    /// Display-name filter. Empty matches any name for the skin.
    #[serde(rename = "Item Name", default)]
    pub item_name: String,

    /// Workshop skin id of the signal item.
    #[serde(rename = "Item Skin Id", default)]
    pub item_skin_id: u64,

    /// When false the pending detonation is cancelled and the signal
    /// becomes a pure trigger.
    #[serde(rename = "Should Explode", default)]
    pub should_explode: bool,

    /// Minimum seconds between two successful triggers of this rule by the
    /// same player. Zero disables the cooldown.
    #[serde(rename = "Cooldown Seconds", default)]
    pub cooldown_seconds: f32,

    /// Execute one randomly chosen command instead of all of them.
    #[serde(rename = "Run Random Command", default)]
    pub run_random_command: bool,

    /// Commands executed on a successful trigger, in order.
    #[serde(rename = "Commands To Run", default)]
    pub commands_to_run: Vec<CommandSpec>,

    /// Template broadcast to every connected player. Empty = none.
    #[serde(rename = "Message Sent To All Players", default)]
    pub global_message: String,

    /// Template sent only to the thrower. Empty = none.
    #[serde(rename = "Message Sent To Player", default)]
    pub personal_message: String,
}

impl SignalRule {
    /// Check whether a thrown item matches this rule.
    ///
    /// Skin ids must be equal; the name filter, when set, must match the
    /// item name exactly (case-sensitive).
    pub fn matches(&self, skin_id: u64, item_name: &str) -> bool {
        self.item_skin_id == skin_id && (self.item_name.is_empty() || self.item_name == item_name)
    }
}

/// A single command entry in a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Execution context for the command.
    #[serde(rename = "Type")]
    pub kind: CommandKind,

    /// Command template; placeholders are resolved against the thrower at
    /// dispatch time.
    #[serde(rename = "Command")]
    pub command: String,
}

/// Where a command is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    /// Sent through the thrower's chat channel as a say-style message.
    Chat,
    /// Executed in the thrower's client context.
    Client,
    /// Executed in the server console context.
    Server,
}
