//! Shared stubs for unit tests.

use crate::lookup::{ImageRef, Lookups, PlayerRef, WorldRef};
use crate::sender::{Player, Sender};

/// Scriptable sender with a fixed permission list. Delivered messages
/// are dropped; the integration suites assert on message contents.
pub(crate) struct StubSender {
    name: String,
    player: bool,
    permissions: Vec<String>,
}

impl StubSender {
    pub(crate) fn console(permissions: &[&str]) -> Self {
        Self {
            name: "CONSOLE".to_string(),
            player: false,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub(crate) fn player(name: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            player: true,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Sender for StubSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|held| held == node)
    }

    fn as_player(&self) -> Option<&dyn Player> {
        if self.player {
            Some(self)
        } else {
            None
        }
    }

    fn send_message(&self, _text: &str) {}
}

impl Player for StubSender {}

/// Fixed registries: one world, alice online, bob known but offline, two
/// stored images.
pub(crate) struct StubLookups {
    worlds: Vec<String>,
    online: Vec<String>,
    known: Vec<String>,
    images: Vec<String>,
}

impl Default for StubLookups {
    fn default() -> Self {
        Self {
            worlds: vec!["world".into()],
            online: vec!["alice".into()],
            known: vec!["alice".into(), "bob".into()],
            images: vec!["cat.png".into(), "logo.png".into()],
        }
    }
}

impl Lookups for StubLookups {
    fn world(&self, name: &str) -> Option<WorldRef> {
        self.worlds
            .iter()
            .find(|world| *world == name)
            .map(|world| WorldRef { name: world.clone() })
    }

    fn online_player(&self, name: &str) -> Option<PlayerRef> {
        self.online
            .iter()
            .find(|player| *player == name)
            .map(|player| PlayerRef { name: player.clone(), online: true })
    }

    fn known_player(&self, name: &str) -> Option<PlayerRef> {
        self.known.iter().find(|player| *player == name).map(|player| PlayerRef {
            name: player.clone(),
            online: self.online.contains(player),
        })
    }

    fn image(&self, filename: &str) -> Option<ImageRef> {
        self.images
            .iter()
            .find(|image| *image == filename)
            .map(|image| ImageRef { filename: image.clone() })
    }
}
