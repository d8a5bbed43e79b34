//! Integration test common infrastructure.
//!
//! Provides a registered bridge over fixed registries, a scriptable
//! sender and a service that records every invocation instead of
//! touching a world.

#![allow(dead_code)]

use std::sync::Arc;

use mural::{BridgeConfig, ClearArea, ImageService};
use mural_cmd::{
    Dispatcher, ImageFlags, ImageRef, Lookups, Player, PlayerRef, Sender, TickQueue, WorldRef,
};
use parking_lot::Mutex;

/// Every permission node the bridge surface uses.
pub const ALL_PERMS: [&str; 16] = [
    "mural.command.clear",
    "mural.clear",
    "mural.command.describe",
    "mural.describe",
    "mural.command.download",
    "mural.download",
    "mural.command.give",
    "mural.give",
    "mural.command.list",
    "mural.list",
    "mural.command.place",
    "mural.place",
    "mural.command.remove.own",
    "mural.remove",
    "mural.command.top",
    "mural.top",
];

/// One recorded service invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear { x: i64, z: i64, world: String, radius: i64, placed_by: Option<String> },
    Describe { player: String },
    Download { url: String, filename: String },
    Give { recipient: String, image: String, amount: i64, width: u32, height: u32, flags: ImageFlags },
    List { page: i64 },
    Place { player: String, image: String, width: u32, height: u32, flags: ImageFlags },
    Remove { player: String },
    Top,
}

/// Records calls in order instead of performing them.
#[derive(Default)]
pub struct RecordingService {
    calls: Mutex<Vec<Call>>,
}

impl RecordingService {
    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Call> {
        self.calls.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl ImageService for RecordingService {
    fn clear_images(&self, _sender: &dyn Sender, area: ClearArea, placed_by: Option<PlayerRef>) {
        self.calls.lock().push(Call::Clear {
            x: area.x,
            z: area.z,
            world: area.world.name,
            radius: area.radius,
            placed_by: placed_by.map(|p| p.name),
        });
    }

    fn describe_image(&self, player: &dyn Player) {
        self.calls.lock().push(Call::Describe { player: player.name().to_string() });
    }

    fn download_image(&self, _sender: &dyn Sender, url: &str, filename: &str) {
        self.calls
            .lock()
            .push(Call::Download { url: url.to_string(), filename: filename.to_string() });
    }

    fn give_image_items(
        &self,
        _sender: &dyn Sender,
        recipient: &PlayerRef,
        image: &ImageRef,
        amount: i64,
        width: u32,
        height: u32,
        flags: ImageFlags,
    ) {
        self.calls.lock().push(Call::Give {
            recipient: recipient.name.clone(),
            image: image.filename.clone(),
            amount,
            width,
            height,
            flags,
        });
    }

    fn list_images(&self, _sender: &dyn Sender, page: i64) {
        self.calls.lock().push(Call::List { page });
    }

    fn place_image(
        &self,
        player: &dyn Player,
        image: &ImageRef,
        width: u32,
        height: u32,
        flags: ImageFlags,
    ) {
        self.calls.lock().push(Call::Place {
            player: player.name().to_string(),
            image: image.filename.clone(),
            width,
            height,
            flags,
        });
    }

    fn remove_image(&self, player: &dyn Player) {
        self.calls.lock().push(Call::Remove { player: player.name().to_string() });
    }

    fn show_top_players(&self, _sender: &dyn Sender) {
        self.calls.lock().push(Call::Top);
    }
}

/// Scriptable sender with a fixed permission list.
pub struct TestSender {
    name: String,
    player: bool,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl TestSender {
    pub fn console(permissions: &[&str]) -> Self {
        Self {
            name: "CONSOLE".to_string(),
            player: false,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn player(name: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            player: true,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Messages delivered to this sender so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Sender for TestSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|held| held == node)
    }

    fn as_player(&self) -> Option<&dyn Player> {
        if self.player { Some(self) } else { None }
    }

    fn send_message(&self, text: &str) {
        self.messages.lock().push(text.to_string());
    }
}

impl Player for TestSender {}

/// Fixed registries: one world, alice online, bob known but offline, two
/// stored images.
pub struct StaticLookups;

impl Lookups for StaticLookups {
    fn world(&self, name: &str) -> Option<WorldRef> {
        (name == "world").then(|| WorldRef { name: name.to_string() })
    }

    fn online_player(&self, name: &str) -> Option<PlayerRef> {
        (name == "alice").then(|| PlayerRef { name: name.to_string(), online: true })
    }

    fn known_player(&self, name: &str) -> Option<PlayerRef> {
        matches!(name, "alice" | "bob")
            .then(|| PlayerRef { name: name.to_string(), online: name == "alice" })
    }

    fn image(&self, filename: &str) -> Option<ImageRef> {
        matches!(filename, "cat.png" | "logo.png")
            .then(|| ImageRef { filename: filename.to_string() })
    }
}

/// A registered bridge over the fixed registries.
pub struct Bridge {
    pub dispatcher: Dispatcher,
    pub scheduler: TickQueue,
    pub service: Arc<RecordingService>,
}

/// Register the default surface but do not tick: the host-assigned
/// permissions are still in place.
pub fn bridge_before_fixup() -> Bridge {
    let dispatcher = Dispatcher::new(Arc::new(StaticLookups));
    let scheduler = TickQueue::new();
    let service = Arc::new(RecordingService::default());
    mural::commands::register(
        &dispatcher,
        &scheduler,
        Arc::clone(&service) as Arc<dyn ImageService>,
        &BridgeConfig::default(),
    )
    .expect("default config registers");
    Bridge { dispatcher, scheduler, service }
}

/// Register the default surface and run one scheduling cycle, leaving
/// the bridge in its steady state.
pub fn bridge() -> Bridge {
    let fixture = bridge_before_fixup();
    fixture.scheduler.tick();
    fixture
}
