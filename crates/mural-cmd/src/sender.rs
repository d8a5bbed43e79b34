//! Capability seam for the actor issuing a command.
//!
//! The engine never talks to the host's own sender types directly; the
//! embedding layer implements these traits over whatever the host provides.
//! Gating evaluates [`Sender::has_permission`] and [`Sender::as_player`]
//! before any argument parsing happens.

/// A capability-bearing actor issuing a command. May or may not be an
/// in-world player.
pub trait Sender: Send + Sync {
    /// Display name of the sender (player name, "CONSOLE", ...).
    fn name(&self) -> &str;

    /// Whether the sender holds the given permission node.
    fn has_permission(&self, node: &str) -> bool;

    /// The sender as an in-world player, if it is one.
    fn as_player(&self) -> Option<&dyn Player>;

    /// Deliver a chat/console line to the sender.
    fn send_message(&self, text: &str);
}

/// An in-world actor. Handlers finalized with `executes_player` receive
/// this instead of the plain [`Sender`].
pub trait Player: Sender {}
