//! Raw input matching and the registered-command map.
//!
//! The dispatcher owns the root of the host tree and the registries
//! arguments resolve against. Matching stays deliberately low-level:
//! split on whitespace, find the root literal, descend one level if the
//! first token names a child, and hand the remaining raw tokens to the
//! node's executor. Everything typed happens inside the executor.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{CommandError, CommandResult};
use crate::host::tree::Node;
use crate::lookup::Lookups;
use crate::sender::Sender;

struct CommandEntry {
    node: Arc<Node>,
    /// Permission node the host stamped on this name at registration.
    /// Cleared by the fixup pass.
    permission: RwLock<Option<String>>,
}

/// Name-keyed registry of registered command nodes.
///
/// Registration stamps every name with the host's own wildcard-style
/// permission node (`host.command.<name>`), overriding the engine's
/// gating until the fixup pass clears it.
#[derive(Default)]
pub struct CommandMap {
    entries: DashMap<String, CommandEntry>,
}

impl CommandMap {
    fn insert(&self, node: Arc<Node>) {
        let name = node.name().to_string();
        let permission = format!("host.command.{name}");
        trace!(command = %name, permission = %permission, "host stamped command permission");
        self.entries
            .insert(name, CommandEntry { node, permission: RwLock::new(Some(permission)) });
    }

    fn resolve(&self, name: &str) -> Option<(Arc<Node>, Option<String>)> {
        let entry = self.entries.get(name)?;
        let result = Some((Arc::clone(&entry.node), entry.permission.read().clone()));
        result
    }

    /// The host-assigned permission currently attached to `name`.
    pub fn host_permission(&self, name: &str) -> Option<String> {
        self.entries.get(name).and_then(|entry| entry.permission.read().clone())
    }

    /// Clear the host-assigned permission on `name`. Returns false when
    /// no command is registered under that name (the host may have
    /// aliased it away).
    pub fn clear_permission(&self, name: &str) -> bool {
        match self.entries.get(name) {
            Some(entry) => {
                *entry.permission.write() = None;
                true
            }
            None => false,
        }
    }

    /// Whether a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// The host dispatcher: matches sender input against registered nodes
/// and invokes the matched node's executor with the resolved raw tokens.
pub struct Dispatcher {
    commands: Arc<CommandMap>,
    lookups: Arc<dyn Lookups>,
}

impl Dispatcher {
    /// Dispatcher over the host's registries.
    pub fn new(lookups: Arc<dyn Lookups>) -> Self {
        Self { commands: Arc::new(CommandMap::default()), lookups }
    }

    /// The registered-command map, shared with the fixup pass.
    pub fn commands(&self) -> Arc<CommandMap> {
        Arc::clone(&self.commands)
    }

    /// Register one built node under its own name. Registration is a
    /// host-side mutation, distinct from building the tree.
    pub fn register(&self, node: Arc<Node>) {
        debug!(command = node.name(), "registered command node");
        self.commands.insert(node);
    }

    /// Register several bindings (canonical node plus alias bindings).
    pub fn register_all<I>(&self, nodes: I)
    where
        I: IntoIterator<Item = Arc<Node>>,
    {
        for node in nodes {
            self.register(node);
        }
    }

    /// Match one line of sender input and run the matched executor.
    ///
    /// Accepts input with or without the leading slash. Empty input is
    /// ignored. The caller decides how to surface the returned error to
    /// the sender.
    pub fn execute(&self, sender: &dyn Sender, line: &str) -> CommandResult<()> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(());
        };

        let Some((node, host_permission)) = self.commands.resolve(name) else {
            debug!(command = %name, "unknown command");
            return Err(CommandError::NoMatchingOverload { cause: None });
        };

        // The host's own stamped permission is checked ahead of the tree;
        // this is exactly what the fixup pass exists to clear.
        if let Some(permission) = host_permission {
            if !sender.has_permission(&permission) {
                debug!(command = %name, sender = sender.name(), "blocked by host permission");
                return Err(CommandError::PermissionDenied);
            }
        }

        if !node.allows(sender) {
            return Err(CommandError::PermissionDenied);
        }

        let tokens: Vec<&str> = parts.collect();
        let result = match tokens.split_first() {
            Some((first, rest)) => match node.child(first) {
                Some(child) => {
                    if !child.allows(sender) {
                        return Err(CommandError::PermissionDenied);
                    }
                    child.run(sender, &*self.lookups, rest)
                }
                None => node.run(sender, &*self.lookups, &tokens),
            },
            None => node.run(sender, &*self.lookups, &tokens),
        };

        if let Err(ref err) = result {
            debug!(command = %name, error = err.error_code(), "command failed");
        }
        result
    }
}
