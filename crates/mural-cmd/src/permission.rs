//! Permission and sender-capability gating.
//!
//! Both predicates are evaluated before argument parsing for the matched
//! overload; a sender failing either never reaches the argument parsers.

use crate::sender::Sender;

/// A set of permission nodes with OR semantics: the set is satisfied when
/// the sender holds *any* member. An empty set is unrestricted.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    nodes: Vec<String>,
}

impl PermissionSet {
    /// Empty, unrestricted set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from permission node strings.
    pub fn from_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { nodes: nodes.into_iter().map(Into::into).collect() }
    }

    /// Add more nodes to the set, skipping ones already present.
    pub fn extend<I, S>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for node in nodes {
            let node = node.into();
            if !self.nodes.contains(&node) {
                self.nodes.push(node);
            }
        }
    }

    /// The permission node strings in this set.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Whether the set places no restriction at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// OR semantics: true when the sender holds at least one member, or
    /// when the set is empty.
    pub fn allows(&self, sender: &dyn Sender) -> bool {
        self.nodes.is_empty() || self.nodes.iter().any(|node| sender.has_permission(node))
    }
}

/// Which kinds of sender an overload accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderPolicy {
    /// Any capability-bearing sender.
    Any,
    /// Only in-world players.
    Player,
}

impl SenderPolicy {
    /// Whether the sender satisfies this policy.
    pub fn allows(self, sender: &dyn Sender) -> bool {
        match self {
            Self::Any => true,
            Self::Player => sender.as_player().is_some(),
        }
    }
}
