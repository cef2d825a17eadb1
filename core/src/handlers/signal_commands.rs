//! Supply signal command dispatch
//!
//! Matches a thrown signal against the configured rules and carries out the
//! matched rule's effects against the host. Side effects run in a fixed
//! order: cooldown gate, explosion suppression, commands, global message,
//! personal message. A blocked cooldown short-circuits everything after it.

use rand::Rng;

use supply_signal_types::formatting::format_wait;
use supply_signal_types::{CommandKind, CommandSpec, Configuration};

use crate::cooldown::{CooldownStatus, CooldownTracker};
use crate::events::SignalThrown;
use crate::host::{Host, MSG_COOLDOWN_ACTIVE};
use crate::template::{PlayerContext, render};

/// Stateful handler for supply signal throws.
///
/// Owns the loaded configuration and the per-player cooldown map. The host
/// delivers throw events serially; a multi-threaded embedding must wrap the
/// whole value in its own lock.
#[derive(Debug)]
pub struct SignalCommands {
    config: Configuration,
    cooldowns: CooldownTracker,
}

impl SignalCommands {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            cooldowns: CooldownTracker::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Swap in a reloaded configuration wholesale.
    ///
    /// Cooldown state is keyed by rule index and intentionally survives the
    /// swap, matching the in-memory lifetime of the map.
    pub fn replace_config(&mut self, config: Configuration) {
        self.config = config;
    }

    /// Handle one throw event.
    pub fn handle_throw(&mut self, event: &SignalThrown, host: &mut dyn Host) {
        let Some(item) = &event.item else {
            return;
        };
        let Some((rule_index, rule)) = self.config.find_rule(item.skin_id, &item.name) else {
            return;
        };
        let player = &event.player;

        if rule.cooldown_seconds > 0.0 {
            match self.cooldowns.check(
                player.id,
                rule_index,
                rule.cooldown_seconds,
                event.timestamp,
            ) {
                CooldownStatus::Blocked { remaining } => {
                    let reply = host
                        .message(MSG_COOLDOWN_ACTIVE, player.id)
                        .replace("{0}", &format_wait(remaining));
                    host.send_reply(player.id, &reply);
                    return;
                }
                CooldownStatus::Ready => {
                    self.cooldowns.record(player.id, rule_index, event.timestamp);
                }
            }
        }

        tracing::debug!(
            skin_id = item.skin_id,
            rule = rule_index,
            player = player.id,
            "supply signal rule triggered"
        );

        if !rule.should_explode {
            host.cancel_detonation(event.entity_id);
        }

        let grid = host.grid_label(player.position);
        let ctx = PlayerContext {
            id: player.id,
            name: &player.display_name,
            position: player.position,
            grid: &grid,
        };

        if rule.run_random_command && !rule.commands_to_run.is_empty() {
            let pick = rand::rng().random_range(0..rule.commands_to_run.len());
            run_command(&rule.commands_to_run[pick], &ctx, host);
        } else {
            for command in &rule.commands_to_run {
                run_command(command, &ctx, host);
            }
        }

        if !rule.global_message.is_empty() {
            host.broadcast(&render(&rule.global_message, &ctx));
        }
        if !rule.personal_message.is_empty() {
            host.send_reply(player.id, &render(&rule.personal_message, &ctx));
        }
    }
}

/// Render one command template and dispatch it by kind.
fn run_command(spec: &CommandSpec, ctx: &PlayerContext<'_>, host: &mut dyn Host) {
    let rendered = render(&spec.command, ctx);
    match spec.kind {
        CommandKind::Chat => {
            host.run_client_command(ctx.id, &format!("chat.say \"{rendered}\""));
        }
        CommandKind::Client => host.run_client_command(ctx.id, &rendered),
        CommandKind::Server => host.run_server_command(&rendered),
    }
}
