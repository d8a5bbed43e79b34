//! Permission-filtered contextual help for the root pseudo-command.

use mural_cmd::Sender;

use super::{
    PERM_CLEAR, PERM_DESCRIBE, PERM_DOWNLOAD, PERM_GIVE, PERM_LIST, PERM_PLACE, PERM_REMOVE,
    PERM_TOP,
};

struct HelpEntry {
    usage: &'static str,
    nodes: &'static [&'static str],
}

const ENTRIES: &[HelpEntry] = &[
    HelpEntry { usage: "clear <x> <z> <world> <radius> [placedBy]", nodes: &PERM_CLEAR },
    HelpEntry { usage: "describe", nodes: &PERM_DESCRIBE },
    HelpEntry { usage: "download <url> <filename>", nodes: &PERM_DOWNLOAD },
    HelpEntry { usage: "give <player> <filename> <amount> [width] [height] [flags]", nodes: &PERM_GIVE },
    HelpEntry { usage: "list [page]", nodes: &PERM_LIST },
    HelpEntry { usage: "place <filename> [width] [height] [flags]", nodes: &PERM_PLACE },
    HelpEntry { usage: "remove", nodes: &PERM_REMOVE },
    HelpEntry { usage: "top", nodes: &PERM_TOP },
];

/// Send the sender a listing of the subcommands they are allowed to use.
/// `label` is the name the command was invoked under.
pub(crate) fn show(sender: &dyn Sender, label: &str) {
    sender.send_message(&format!("=== {label} commands ==="));
    for entry in ENTRIES {
        if entry.nodes.iter().any(|node| sender.has_permission(node)) {
            sender.send_message(&format!("/{label} {}", entry.usage));
        }
    }
}
