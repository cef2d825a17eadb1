//! Placeholder substitution for command and message templates
//!
//! Templates carry named tokens (`{playerName}`, `{grid}`, ...) that are
//! resolved against the throwing player at dispatch time. Substitution is
//! literal find/replace over a fixed token table; tokens never overlap or
//! nest, and anything unrecognized passes through verbatim so operator
//! typos stay visible in the output instead of vanishing.

use crate::events::{PlayerId, Position};

/// Resolved facts about the thrower, shared by every template rendered for
/// one event.
#[derive(Debug, Clone)]
pub struct PlayerContext<'a> {
    pub id: PlayerId,
    pub name: &'a str,
    pub position: Position,
    /// Grid label precomputed by the host for `position`.
    pub grid: &'a str,
}

/// Render a template against a player context.
///
/// Position axes are formatted to one decimal place.
pub fn render(template: &str, ctx: &PlayerContext<'_>) -> String {
    let substitutions = [
        ("{playerId}", ctx.id.to_string()),
        ("{playerName}", ctx.name.to_string()),
        ("{positionX}", format!("{:.1}", ctx.position.x)),
        ("{positionY}", format!("{:.1}", ctx.position.y)),
        ("{positionZ}", format!("{:.1}", ctx.position.z)),
        ("{grid}", ctx.grid.to_string()),
    ];

    let mut rendered = template.to_string();
    for (token, value) in &substitutions {
        rendered = rendered.replace(token, value);
    }
    rendered
}
