//! Immutable command descriptions.
//!
//! A [`CommandSpec`] is assembled once at startup by the builder, wrapped
//! in an `Arc` and read concurrently by dispatch without synchronization.

use std::sync::Arc;

use crate::argument::{ArgumentSpec, Args};
use crate::permission::{PermissionSet, SenderPolicy};
use crate::sender::{Player, Sender};

/// Handler taking any sender.
pub type AnyHandler = Arc<dyn Fn(&dyn Sender, &Args) + Send + Sync>;

/// Handler taking an in-world player.
pub type PlayerHandler = Arc<dyn Fn(&dyn Player, &Args) + Send + Sync>;

/// A finalized handler reference together with its sender restriction.
#[derive(Clone)]
pub enum Exec {
    /// Runs for any sender.
    Any(AnyHandler),
    /// Runs only for in-world players.
    Player(PlayerHandler),
}

impl Exec {
    /// The sender restriction this handler was finalized with.
    pub fn policy(&self) -> SenderPolicy {
        match self {
            Self::Any(_) => SenderPolicy::Any,
            Self::Player(_) => SenderPolicy::Player,
        }
    }
}

/// One ordered-argument variant of a subcommand.
pub struct OverloadSpec {
    pub(crate) args: Vec<ArgumentSpec>,
    pub(crate) permissions: PermissionSet,
    pub(crate) exec: Exec,
}

impl OverloadSpec {
    /// Declared argument count.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Minimum token count this overload accepts: the declared count minus
    /// the trailing run of defaulted arguments.
    pub fn required_count(&self) -> usize {
        let trailing_defaults = self
            .args
            .iter()
            .rev()
            .take_while(|arg| arg.default_value().is_some())
            .count();
        self.args.len() - trailing_defaults
    }

    /// The argument chain, in declaration order.
    pub fn args(&self) -> &[ArgumentSpec] {
        &self.args
    }

    /// The overload's permission gate.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// The sender restriction.
    pub fn policy(&self) -> SenderPolicy {
        self.exec.policy()
    }
}

/// All overloads registered under one subcommand name, stored
/// most-arguments-first.
pub struct SubcommandSpec {
    pub(crate) name: String,
    pub(crate) overloads: Vec<OverloadSpec>,
}

impl SubcommandSpec {
    /// Subcommand literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overloads in resolution order (most arguments first).
    pub fn overloads(&self) -> &[OverloadSpec] {
        &self.overloads
    }

    /// Union of the permission nodes across all overloads, used for the
    /// host node's requirement predicate.
    pub fn permission_union(&self) -> PermissionSet {
        let mut union = PermissionSet::new();
        for overload in &self.overloads {
            union.extend(overload.permissions.nodes().iter().cloned());
        }
        union
    }

    /// Insert keeping the most-arguments-first order. A later registration
    /// with the same declared count lands ahead of the earlier one, so it
    /// shadows it at resolution time.
    pub(crate) fn insert(&mut self, overload: OverloadSpec) {
        let at = self
            .overloads
            .iter()
            .position(|existing| existing.arg_count() <= overload.arg_count())
            .unwrap_or(self.overloads.len());
        self.overloads.insert(at, overload);
    }
}

/// A complete command: canonical name, alias names, the root help
/// pseudo-command and the subcommand table. Immutable after build.
pub struct CommandSpec {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) root: Option<OverloadSpec>,
    pub(crate) subcommands: Vec<Arc<SubcommandSpec>>,
}

impl CommandSpec {
    /// Canonical command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Additional names the command is bound under.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Every name the command resolves under: the canonical name followed
    /// by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// The root help pseudo-command, if one was finalized. Takes zero
    /// arguments.
    pub fn root(&self) -> Option<&OverloadSpec> {
        self.root.as_ref()
    }

    /// Subcommands in first-registration order.
    pub fn subcommands(&self) -> &[Arc<SubcommandSpec>] {
        &self.subcommands
    }

    /// Look up a subcommand by literal.
    pub fn subcommand(&self, name: &str) -> Option<&Arc<SubcommandSpec>> {
        self.subcommands.iter().find(|sub| sub.name == name)
    }
}
