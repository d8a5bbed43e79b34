//! Interactive console for exercising the bridge without a real host.
//!
//! Wires an in-memory directory and a logging [`ImageService`] into the
//! dispatcher, then reads command lines from stdin. Each line is
//! dispatched as the console sender; the scheduler ticks after every
//! line, so the permission fixup runs right after startup.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;
use mural::{BridgeConfig, ClearArea, ImageService};
use mural_cmd::{
    Dispatcher, ImageFlags, ImageRef, Lookups, Player, PlayerRef, Sender, TickQueue, WorldRef,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fixed demo registries.
struct Directory {
    worlds: Vec<String>,
    online: Vec<String>,
    known: Vec<String>,
    images: Vec<String>,
}

impl Directory {
    fn demo() -> Self {
        Self {
            worlds: vec!["world".into(), "world_nether".into()],
            online: vec!["alice".into()],
            known: vec!["alice".into(), "bob".into()],
            images: vec!["cat.png".into(), "logo.png".into()],
        }
    }
}

impl Lookups for Directory {
    fn world(&self, name: &str) -> Option<WorldRef> {
        self.worlds.iter().find(|w| *w == name).map(|w| WorldRef { name: w.clone() })
    }

    fn online_player(&self, name: &str) -> Option<PlayerRef> {
        self.online
            .iter()
            .find(|p| *p == name)
            .map(|p| PlayerRef { name: p.clone(), online: true })
    }

    fn known_player(&self, name: &str) -> Option<PlayerRef> {
        self.known
            .iter()
            .find(|p| *p == name)
            .map(|p| PlayerRef { name: p.clone(), online: self.online.contains(p) })
    }

    fn image(&self, filename: &str) -> Option<ImageRef> {
        self.images.iter().find(|i| *i == filename).map(|i| ImageRef { filename: i.clone() })
    }
}

/// The console holds every permission and is not an in-world player.
struct ConsoleSender;

impl Sender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn as_player(&self) -> Option<&dyn Player> {
        None
    }

    fn send_message(&self, text: &str) {
        println!("{text}");
    }
}

/// Service stub that logs every operation instead of touching a world.
struct EchoService;

impl ImageService for EchoService {
    fn clear_images(&self, sender: &dyn Sender, area: ClearArea, placed_by: Option<PlayerRef>) {
        info!(
            x = area.x,
            z = area.z,
            world = %area.world.name,
            radius = area.radius,
            placed_by = placed_by.as_ref().map(|p| p.name.as_str()),
            "clear requested"
        );
        sender.send_message("Clearing images...");
    }

    fn describe_image(&self, player: &dyn Player) {
        info!(player = player.name(), "describe requested");
    }

    fn download_image(&self, sender: &dyn Sender, url: &str, filename: &str) {
        info!(url, filename, "download requested");
        sender.send_message(&format!("Downloading {filename}..."));
    }

    fn give_image_items(
        &self,
        sender: &dyn Sender,
        recipient: &PlayerRef,
        image: &ImageRef,
        amount: i64,
        width: u32,
        height: u32,
        flags: ImageFlags,
    ) {
        info!(
            recipient = %recipient.name,
            image = %image.filename,
            amount,
            width,
            height,
            flags = %flags.letters(),
            "give requested"
        );
        sender.send_message(&format!("Gave {amount} items to {}", recipient.name));
    }

    fn list_images(&self, sender: &dyn Sender, page: i64) {
        info!(page, "list requested");
        sender.send_message(&format!("Image listing, page {page}"));
    }

    fn place_image(
        &self,
        player: &dyn Player,
        image: &ImageRef,
        width: u32,
        height: u32,
        flags: ImageFlags,
    ) {
        info!(
            player = player.name(),
            image = %image.filename,
            width,
            height,
            flags = %flags.letters(),
            "place requested"
        );
    }

    fn remove_image(&self, player: &dyn Player) {
        info!(player = player.name(), "remove requested");
    }

    fn show_top_players(&self, sender: &dyn Sender) {
        info!("top requested");
        sender.send_message("Top players: (none yet)");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            BridgeConfig::load(&path).with_context(|| format!("failed to load {path}"))?
        }
        None => BridgeConfig::default(),
    };

    let dispatcher = Dispatcher::new(Arc::new(Directory::demo()));
    let scheduler = TickQueue::new();
    mural::commands::register(&dispatcher, &scheduler, Arc::new(EchoService), &config)?;

    // Next scheduling cycle: the permission fixup runs here.
    scheduler.tick();

    info!(command = %config.command.name, "bridge ready - type /<command>, Ctrl-D quits");

    let sender = ConsoleSender;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = dispatcher.execute(&sender, &line) {
            match err.cause() {
                Some(cause) => sender.send_message(&format!("{err}: {cause}")),
                None => sender.send_message(&err.to_string()),
            }
        }
        scheduler.tick();
    }

    Ok(())
}
