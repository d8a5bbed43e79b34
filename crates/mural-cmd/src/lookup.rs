//! Lookup seam for arguments that resolve against host registries.
//!
//! World, player and image arguments don't parse tokens in isolation; they
//! resolve names against registries the host owns. The dispatcher holds one
//! [`Lookups`] implementation and threads it through every parse.

/// Opaque handle to a world known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldRef {
    /// Registry name of the world.
    pub name: String,
}

/// Opaque handle to a player identity known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    /// The player's name.
    pub name: String,
    /// Whether the player is currently connected.
    pub online: bool,
}

/// Opaque handle to a stored image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Filename in the image registry.
    pub filename: String,
}

/// Name-based lookups against the registries the host owns.
pub trait Lookups: Send + Sync {
    /// Resolve a world by name.
    fn world(&self, name: &str) -> Option<WorldRef>;

    /// Resolve a currently connected player by name.
    fn online_player(&self, name: &str) -> Option<PlayerRef>;

    /// Resolve a player with a known identity by name; the player may be
    /// disconnected.
    fn known_player(&self, name: &str) -> Option<PlayerRef>;

    /// Resolve a stored image file by name.
    fn image(&self, filename: &str) -> Option<ImageRef>;
}
