//! Declarative registration of the image-command surface.
//!
//! Builds the full subcommand tree, registers it with the host
//! dispatcher under the canonical name and every alias, and schedules
//! the permission fixup pass for the next scheduling cycle.

mod help;

use std::sync::Arc;

use mural_cmd::{
    bind_aliases, ArgValue, ArgumentSpec, CommandBuilder, Dispatcher, ImageFlags,
    PermissionFixupPass, Scheduler,
};
use tracing::debug;

use crate::config::{BridgeConfig, ConfigError};
use crate::service::{ClearArea, ImageService};

pub(crate) const PERM_CLEAR: [&str; 2] = ["mural.command.clear", "mural.clear"];
pub(crate) const PERM_DESCRIBE: [&str; 2] = ["mural.command.describe", "mural.describe"];
pub(crate) const PERM_DOWNLOAD: [&str; 2] = ["mural.command.download", "mural.download"];
pub(crate) const PERM_GIVE: [&str; 2] = ["mural.command.give", "mural.give"];
pub(crate) const PERM_LIST: [&str; 2] = ["mural.command.list", "mural.list"];
pub(crate) const PERM_PLACE: [&str; 2] = ["mural.command.place", "mural.place"];
pub(crate) const PERM_REMOVE: [&str; 2] = ["mural.command.remove.own", "mural.remove"];
pub(crate) const PERM_TOP: [&str; 2] = ["mural.command.top", "mural.top"];

/// Every node that grants access to the root help listing.
const PERM_HELP: [&str; 16] = [
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

/// Build the command tree, register it and its aliases, and schedule the
/// permission fixup for the next scheduling cycle.
pub fn register(
    dispatcher: &Dispatcher,
    scheduler: &dyn Scheduler,
    service: Arc<dyn ImageService>,
    config: &BridgeConfig,
) -> Result<(), ConfigError> {
    let give_flags = config.flags.give_flags()?;
    let place_flags = config.flags.place_flags()?;

    let built = root_command(service, config, give_flags, place_flags).build();
    dispatcher.register_all(bind_aliases(&built));
    debug!(command = built.spec().name(), "registered bridge command and aliases");

    // The host stamps its own permission on every registered name; undo
    // that once its registration bookkeeping has settled.
    PermissionFixupPass::for_command(built.spec()).schedule(scheduler, dispatcher.commands());
    Ok(())
}

fn root_command(
    service: Arc<dyn ImageService>,
    config: &BridgeConfig,
    give_flags: ImageFlags,
    place_flags: ImageFlags,
) -> CommandBuilder {
    let label = config.command.name.clone();

    // Help command
    let mut root = CommandBuilder::root(&config.command.name)
        .aliases(config.command.aliases.iter().cloned())
        .permission(PERM_HELP)
        .executes(move |sender, _| help::show(sender, &label));

    // Clear command
    let svc = Arc::clone(&service);
    root.subcommand("clear")
        .permission(PERM_CLEAR)
        .arg(ArgumentSpec::integer("x"))
        .arg(ArgumentSpec::integer("z"))
        .arg(ArgumentSpec::world("world"))
        .arg(ArgumentSpec::integer_min("radius", 1))
        .arg(ArgumentSpec::known_player("placedBy"))
        .executes(move |sender, args| {
            let area = ClearArea {
                x: args.integer(0),
                z: args.integer(1),
                world: args.world(2).clone(),
                radius: args.integer(3),
            };
            svc.clear_images(sender, area, Some(args.known_player(4).clone()));
        });
    let svc = Arc::clone(&service);
    root.subcommand("clear")
        .permission(PERM_CLEAR)
        .arg(ArgumentSpec::integer("x"))
        .arg(ArgumentSpec::integer("z"))
        .arg(ArgumentSpec::world("world"))
        .arg(ArgumentSpec::integer_min("radius", 1))
        .executes(move |sender, args| {
            let area = ClearArea {
                x: args.integer(0),
                z: args.integer(1),
                world: args.world(2).clone(),
                radius: args.integer(3),
            };
            svc.clear_images(sender, area, None);
        });

    // Describe command
    let svc = Arc::clone(&service);
    root.subcommand("describe")
        .permission(PERM_DESCRIBE)
        .executes_player(move |player, _| svc.describe_image(player));

    // Download command
    let svc = Arc::clone(&service);
    root.subcommand("download")
        .permission(PERM_DOWNLOAD)
        .arg(ArgumentSpec::string("url"))
        .arg(ArgumentSpec::string("filename"))
        .executes(move |sender, args| {
            svc.download_image(sender, args.string(0), args.string(1));
        });

    // Give subcommand
    let svc = Arc::clone(&service);
    root.subcommand("give")
        .permission(PERM_GIVE)
        .arg(ArgumentSpec::online_player("player"))
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::integer_range("amount", 1, 64))
        .arg(ArgumentSpec::dimension("width"))
        .arg(ArgumentSpec::dimension("height"))
        .arg(ArgumentSpec::flags("flags", give_flags))
        .executes(move |sender, args| {
            svc.give_image_items(
                sender,
                args.online_player(0),
                args.image(1),
                args.integer(2),
                args.dimension(3),
                args.dimension(4),
                args.flags(5),
            );
        });
    let svc = Arc::clone(&service);
    root.subcommand("give")
        .permission(PERM_GIVE)
        .arg(ArgumentSpec::online_player("player"))
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::integer_range("amount", 1, 64))
        .arg(ArgumentSpec::dimension("width"))
        .arg(ArgumentSpec::dimension("height"))
        .executes(move |sender, args| {
            svc.give_image_items(
                sender,
                args.online_player(0),
                args.image(1),
                args.integer(2),
                args.dimension(3),
                args.dimension(4),
                give_flags,
            );
        });
    let svc = Arc::clone(&service);
    root.subcommand("give")
        .permission(PERM_GIVE)
        .arg(ArgumentSpec::online_player("player"))
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::integer_range("amount", 1, 64))
        .arg(ArgumentSpec::dimension("width"))
        .executes(move |sender, args| {
            svc.give_image_items(
                sender,
                args.online_player(0),
                args.image(1),
                args.integer(2),
                args.dimension(3),
                0,
                give_flags,
            );
        });

    // List subcommand
    let svc = Arc::clone(&service);
    root.subcommand("list")
        .permission(PERM_LIST)
        .arg(ArgumentSpec::integer_min("page", 1))
        .executes(move |sender, args| svc.list_images(sender, args.integer(0)));
    let svc = Arc::clone(&service);
    root.subcommand("list").permission(PERM_LIST).executes(move |sender, _| {
        // Players get a paginated view starting at 1; the console gets
        // the whole listing.
        let page = if sender.as_player().is_some() { 1 } else { 0 };
        svc.list_images(sender, page);
    });

    // Place subcommand
    let svc = Arc::clone(&service);
    root.subcommand("place")
        .permission(PERM_PLACE)
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::dimension("width"))
        .arg(ArgumentSpec::dimension("height"))
        .arg(ArgumentSpec::flags("flags", place_flags))
        .executes_player(move |player, args| {
            svc.place_image(
                player,
                args.image(0),
                args.dimension(1),
                args.dimension(2),
                args.flags(3),
            );
        });
    let svc = Arc::clone(&service);
    root.subcommand("place")
        .permission(PERM_PLACE)
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::dimension("width"))
        .arg(ArgumentSpec::dimension("height"))
        .executes_player(move |player, args| {
            svc.place_image(player, args.image(0), args.dimension(1), args.dimension(2), place_flags);
        });
    let svc = Arc::clone(&service);
    root.subcommand("place")
        .permission(PERM_PLACE)
        .arg(ArgumentSpec::image("filename"))
        .arg(ArgumentSpec::dimension("width").with_default(ArgValue::Dimension(0)))
        .executes_player(move |player, args| {
            svc.place_image(player, args.image(0), args.dimension(1), 0, place_flags);
        });

    // Remove subcommand
    let svc = Arc::clone(&service);
    root.subcommand("remove")
        .permission(PERM_REMOVE)
        .executes_player(move |player, _| svc.remove_image(player));

    // Top subcommand
    let svc = Arc::clone(&service);
    root.subcommand("top")
        .permission(PERM_TOP)
        .executes(move |sender, _| svc.show_top_players(sender));

    root
}
