//! Forward migration of stored configuration documents
//!
//! Each step is gated on the document version being below a threshold and
//! mutates the fields that changed at that boundary. Steps are cumulative:
//! a sufficiently old document runs every applicable step in ascending
//! order, even where a later step resets a field an earlier one already
//! touched. The one exception falls out of the full pre-1.0.0 reset, which
//! replaces the document (version included) with the current defaults, so
//! no later step applies.

use supply_signal_types::{CommandKind, CommandSpec, Configuration, SignalRule};

/// Version stamped onto every document this build writes.
pub const CURRENT_VERSION: &str = "1.4.0";

/// Personal message installed by the 1.4.0 migration and the default config.
pub const DEFAULT_PERSONAL_MESSAGE: &str =
    "You just threw a supply signal at {grid}. Get ready for the airdrop!";

struct Migration {
    /// Documents with a version lexicographically below this run `apply`.
    below: &'static str,
    apply: fn(&mut Configuration),
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        below: "1.0.0",
        apply: reset_to_default,
    },
    Migration {
        below: "1.1.0",
        apply: clear_item_names,
    },
    Migration {
        below: "1.1.1",
        apply: clear_item_names_and_skins,
    },
    Migration {
        below: "1.3.0",
        apply: disable_random_command,
    },
    Migration {
        below: "1.4.0",
        apply: add_cooldown_and_messages,
    },
];

/// Run every applicable migration step and stamp the current version.
///
/// Rules are only ever mutated in place; no step drops a rule.
pub fn migrate(config: &mut Configuration) {
    for migration in MIGRATIONS {
        if config.version.as_str() < migration.below {
            (migration.apply)(config);
        }
    }
    config.version = CURRENT_VERSION.to_string();
}

// Pre-1.0.0 layouts are incompatible, treat as a first install.
fn reset_to_default(config: &mut Configuration) {
    *config = default_config();
}

// 1.1.0 introduced the item-name filter.
fn clear_item_names(config: &mut Configuration) {
    for rule in &mut config.supply_signals {
        rule.item_name.clear();
    }
}

// 1.1.1 retyped the skin id field.
fn clear_item_names_and_skins(config: &mut Configuration) {
    for rule in &mut config.supply_signals {
        rule.item_name.clear();
        rule.item_skin_id = 0;
    }
}

// 1.3.0 introduced the run-random flag.
fn disable_random_command(config: &mut Configuration) {
    for rule in &mut config.supply_signals {
        rule.run_random_command = false;
    }
}

// 1.4.0 added cooldowns and messaging and reset the matching fields.
fn add_cooldown_and_messages(config: &mut Configuration) {
    for rule in &mut config.supply_signals {
        rule.item_name.clear();
        rule.item_skin_id = 0;
        rule.cooldown_seconds = 60.0;
        rule.global_message.clear();
        rule.personal_message = DEFAULT_PERSONAL_MESSAGE.to_string();
    }
}

/// The generated configuration: one example rule showing all three command
/// kinds against the vanilla (skin 0) supply signal.
pub fn default_config() -> Configuration {
    Configuration {
        version: CURRENT_VERSION.to_string(),
        supply_signals: vec![SignalRule {
            item_name: String::new(),
            item_skin_id: 0,
            should_explode: false,
            cooldown_seconds: 60.0,
            run_random_command: false,
            commands_to_run: vec![
                CommandSpec {
                    kind: CommandKind::Chat,
                    command: "Hello, my name is {playerName} and you can find me in grid {grid}."
                        .to_string(),
                },
                CommandSpec {
                    kind: CommandKind::Client,
                    command: "heli.calltome".to_string(),
                },
                CommandSpec {
                    kind: CommandKind::Server,
                    command: "inventory.giveto {playerId} scrap 50".to_string(),
                },
            ],
            global_message: String::new(),
            personal_message: DEFAULT_PERSONAL_MESSAGE.to_string(),
        }],
    }
}
