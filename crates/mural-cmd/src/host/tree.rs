//! Literal command nodes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CommandError, CommandResult};
use crate::lookup::Lookups;
use crate::sender::Sender;

/// Predicate deciding whether a sender may traverse a node.
pub type Requirement = Arc<dyn Fn(&dyn Sender) -> bool + Send + Sync>;

/// Executor attached to a node, invoked with the remaining raw tokens.
pub type NodeExecutor =
    Arc<dyn Fn(&dyn Sender, &dyn Lookups, &[&str]) -> CommandResult<()> + Send + Sync>;

/// One literal node in the host tree. Immutable once built; aliases are
/// additional nodes sharing this node's content by reference.
pub struct Node {
    name: String,
    requirement: Requirement,
    executor: Option<NodeExecutor>,
    children: HashMap<String, Arc<Node>>,
    redirect: Option<Arc<Node>>,
    fork: bool,
}

impl Node {
    /// Build a literal node.
    pub fn new(
        name: impl Into<String>,
        requirement: Requirement,
        executor: Option<NodeExecutor>,
        children: HashMap<String, Arc<Node>>,
    ) -> Self {
        Self {
            name: name.into(),
            requirement,
            executor,
            children,
            redirect: None,
            fork: false,
        }
    }

    /// Build an alias binding: a node under a different name sharing the
    /// target's executor and requirement, redirecting child lookups to
    /// the target instead of copying its subtree.
    pub fn alias(name: impl Into<String>, target: &Arc<Node>) -> Self {
        Self {
            name: name.into(),
            requirement: Arc::clone(&target.requirement),
            executor: target.executor.clone(),
            children: HashMap::new(),
            redirect: Some(Arc::clone(target)),
            fork: target.fork,
        }
    }

    /// The literal this node is bound under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the sender may traverse this node.
    pub fn allows(&self, sender: &dyn Sender) -> bool {
        (self.requirement)(sender)
    }

    /// Child lookup, following the redirect of an alias binding.
    pub fn child(&self, name: &str) -> Option<&Arc<Node>> {
        match &self.redirect {
            Some(target) => target.child(name),
            None => self.children.get(name),
        }
    }

    /// The node this one redirects to, if it is an alias binding.
    pub fn redirect(&self) -> Option<&Arc<Node>> {
        self.redirect.as_ref()
    }

    /// Whether dispatch forks at this node.
    pub fn is_fork(&self) -> bool {
        self.fork
    }

    /// Run this node's executor with the remaining raw tokens.
    pub fn run(
        &self,
        sender: &dyn Sender,
        lookups: &dyn Lookups,
        tokens: &[&str],
    ) -> CommandResult<()> {
        match &self.executor {
            Some(executor) => executor(sender, lookups, tokens),
            None => Err(CommandError::NoMatchingOverload { cause: None }),
        }
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> Option<&NodeExecutor> {
        self.executor.as_ref()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("redirect", &self.redirect.as_ref().map(|t| t.name()))
            .field("fork", &self.fork)
            .finish_non_exhaustive()
    }
}
