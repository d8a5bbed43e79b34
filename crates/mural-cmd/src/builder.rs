//! Declarative assembly of a command tree.
//!
//! The builder collects subcommand overloads, converts the finished
//! [`CommandSpec`] into the host's native node tree and hands both back as
//! a [`BuiltCommand`]. Building does *not* register anything: registration
//! is a host-side mutation performed separately by the dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::argument::{ArgumentSpec, Args};
use crate::error::CommandError;
use crate::host::{Node, NodeExecutor, Requirement};
use crate::lookup::Lookups;
use crate::permission::PermissionSet;
use crate::resolve::dispatch_overloads;
use crate::sender::{Player, Sender};
use crate::spec::{CommandSpec, Exec, OverloadSpec, SubcommandSpec};

/// A built command: the immutable spec and the host-native root node
/// converted from it, ready for registration.
pub struct BuiltCommand {
    spec: Arc<CommandSpec>,
    node: Arc<Node>,
}

impl BuiltCommand {
    /// The immutable command description.
    pub fn spec(&self) -> &Arc<CommandSpec> {
        &self.spec
    }

    /// The host-native root node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

/// Builder for one command tree.
pub struct CommandBuilder {
    name: String,
    aliases: Vec<String>,
    root_permissions: PermissionSet,
    root: Option<OverloadSpec>,
    subcommands: Vec<SubcommandSpec>,
}

impl CommandBuilder {
    /// Start a tree under the canonical command name.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            root_permissions: PermissionSet::new(),
            root: None,
            subcommands: Vec::new(),
        }
    }

    /// Additional names to bind the command under.
    pub fn aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(names.into_iter().map(Into::into));
        self
    }

    /// Extend the root permission set. OR semantics: holding any listed
    /// node grants access to the root help pseudo-command.
    pub fn permission<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_permissions.extend(nodes);
        self
    }

    /// Finalize the zero-argument root pseudo-command (the contextual
    /// help entry point).
    pub fn executes<F>(mut self, handler: F) -> Self
    where
        F: Fn(&dyn Sender, &Args) + Send + Sync + 'static,
    {
        self.root = Some(OverloadSpec {
            args: Vec::new(),
            permissions: self.root_permissions.clone(),
            exec: Exec::Any(Arc::new(handler)),
        });
        self
    }

    /// Open a new overload under `name`. Each call appends one overload;
    /// calling repeatedly with the same name builds the overload ladder
    /// for that subcommand.
    pub fn subcommand(&mut self, name: impl Into<String>) -> OverloadBuilder<'_> {
        OverloadBuilder {
            command: self,
            name: name.into(),
            permissions: PermissionSet::new(),
            args: Vec::new(),
        }
    }

    fn push_overload(&mut self, name: String, overload: OverloadSpec) {
        match self.subcommands.iter_mut().find(|sub| sub.name == name) {
            Some(sub) => sub.insert(overload),
            None => {
                let mut sub = SubcommandSpec { name, overloads: Vec::new() };
                sub.insert(overload);
                self.subcommands.push(sub);
            }
        }
    }

    /// Convert the collected spec into the host's native tree. The result
    /// is not registered; pass its bindings to the dispatcher for that.
    pub fn build(self) -> BuiltCommand {
        let spec = Arc::new(CommandSpec {
            name: self.name,
            aliases: self.aliases,
            root: self.root,
            subcommands: self.subcommands.into_iter().map(Arc::new).collect(),
        });

        let mut children = HashMap::new();
        for sub in spec.subcommands() {
            let path = format!("{} {}", spec.name(), sub.name());
            let union = sub.permission_union();
            let requirement: Requirement = Arc::new(move |sender: &dyn Sender| union.allows(sender));
            let executor_sub = Arc::clone(sub);
            let executor: NodeExecutor = Arc::new(
                move |sender: &dyn Sender, lookups: &dyn Lookups, tokens: &[&str]| {
                    dispatch_overloads(&path, executor_sub.overloads(), sender, lookups, tokens)
                },
            );
            children.insert(
                sub.name().to_string(),
                Arc::new(Node::new(sub.name(), requirement, Some(executor), HashMap::new())),
            );
        }

        let root_permissions = spec
            .root()
            .map(|overload| overload.permissions().clone())
            .unwrap_or_default();
        let requirement: Requirement =
            Arc::new(move |sender: &dyn Sender| root_permissions.allows(sender));

        let executor_spec = Arc::clone(&spec);
        let executor: NodeExecutor = Arc::new(
            move |sender: &dyn Sender, lookups: &dyn Lookups, tokens: &[&str]| {
                if tokens.is_empty() {
                    if let Some(root) = executor_spec.root() {
                        return dispatch_overloads(
                            executor_spec.name(),
                            std::slice::from_ref(root),
                            sender,
                            lookups,
                            tokens,
                        );
                    }
                }
                // Tokens that name no registered subcommand have nowhere to
                // descend to.
                Err(CommandError::NoMatchingOverload { cause: None })
            },
        );

        debug!(
            command = spec.name(),
            aliases = spec.aliases().len(),
            subcommands = spec.subcommands().len(),
            "built command tree"
        );

        let node = Arc::new(Node::new(spec.name(), requirement, Some(executor), children));
        BuiltCommand { spec, node }
    }
}

/// Builder for one overload of one subcommand.
pub struct OverloadBuilder<'a> {
    command: &'a mut CommandBuilder,
    name: String,
    permissions: PermissionSet,
    args: Vec<ArgumentSpec>,
}

impl OverloadBuilder<'_> {
    /// Extend this overload's permission set (OR semantics).
    pub fn permission<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(nodes);
        self
    }

    /// Append one argument to the chain. Argument names must be unique
    /// within the overload.
    pub fn arg(mut self, spec: ArgumentSpec) -> Self {
        debug_assert!(
            self.args.iter().all(|existing| existing.name() != spec.name()),
            "duplicate argument name \"{}\" in overload of \"{}\"",
            spec.name(),
            self.name,
        );
        self.args.push(spec);
        self
    }

    /// Finalize with a handler accepting any sender.
    ///
    /// Registering two overloads with identical argument counts under one
    /// subcommand is undefined behavior: the later registration silently
    /// shadows the earlier one.
    pub fn executes<F>(self, handler: F)
    where
        F: Fn(&dyn Sender, &Args) + Send + Sync + 'static,
    {
        self.finish(Exec::Any(Arc::new(handler)));
    }

    /// Finalize with a handler restricted to in-world players. Same
    /// identical-count caveat as [`OverloadBuilder::executes`].
    pub fn executes_player<F>(self, handler: F)
    where
        F: Fn(&dyn Player, &Args) + Send + Sync + 'static,
    {
        self.finish(Exec::Player(Arc::new(handler)));
    }

    fn finish(self, exec: Exec) {
        let overload = OverloadSpec { args: self.args, permissions: self.permissions, exec };
        self.command.push_overload(self.name, overload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{StubLookups, StubSender};

    fn noop(_: &dyn Sender, _: &Args) {}

    #[test]
    fn test_overloads_are_stored_most_arguments_first() {
        let mut builder = CommandBuilder::root("mural");
        builder.subcommand("give").arg(ArgumentSpec::integer("a")).executes(noop);
        builder
            .subcommand("give")
            .arg(ArgumentSpec::integer("a"))
            .arg(ArgumentSpec::integer("b"))
            .arg(ArgumentSpec::integer("c"))
            .executes(noop);
        builder
            .subcommand("give")
            .arg(ArgumentSpec::integer("a"))
            .arg(ArgumentSpec::integer("b"))
            .executes(noop);

        let built = builder.build();
        let counts: Vec<usize> = built.spec().subcommand("give").unwrap()
            .overloads()
            .iter()
            .map(OverloadSpec::arg_count)
            .collect();
        assert_eq!(counts, [3, 2, 1]);
    }

    #[test]
    fn test_subcommands_keep_first_registration_order() {
        let mut builder = CommandBuilder::root("mural");
        builder.subcommand("clear").executes(noop);
        builder.subcommand("list").executes(noop);
        builder.subcommand("clear").arg(ArgumentSpec::integer("x")).executes(noop);

        let built = builder.build();
        let names: Vec<&str> =
            built.spec().subcommands().iter().map(|sub| sub.name()).collect();
        assert_eq!(names, ["clear", "list"]);
    }

    #[test]
    fn test_build_produces_child_nodes_without_registering() {
        let mut builder = CommandBuilder::root("mural").aliases(["image"]);
        builder.subcommand("top").executes(noop);
        let built = builder.build();

        assert!(built.node().child("top").is_some());
        assert!(built.node().child("bottom").is_none());
        assert_eq!(built.spec().names().collect::<Vec<_>>(), ["mural", "image"]);
    }

    #[test]
    fn test_root_requirement_reflects_permission_union() {
        let builder = CommandBuilder::root("mural")
            .permission(["mural.command.list", "mural.list"])
            .executes(noop);
        let built = builder.build();

        assert!(built.node().allows(&StubSender::console(&["mural.list"])));
        assert!(!built.node().allows(&StubSender::console(&["other.node"])));
    }

    #[test]
    fn test_root_with_tokens_but_no_child_is_no_match() {
        let builder = CommandBuilder::root("mural").executes(noop);
        let built = builder.build();
        let err = built
            .node()
            .run(&StubSender::console(&[]), &StubLookups::default(), &["bogus"])
            .unwrap_err();
        assert_eq!(err.error_code(), "no_matching_overload");
    }
}
