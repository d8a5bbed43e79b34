//! Alias bindings over one built command.
//!
//! Aliases never duplicate the argument tree. Each binding is a
//! lightweight node that shares the canonical node's executor and
//! requirement by reference and redirects child lookups to it, so a later
//! behavior change to the canonical command is reflected by every alias
//! and the cost per alias stays constant.

use std::sync::Arc;

use tracing::debug;

use crate::builder::BuiltCommand;
use crate::host::Node;

/// Produce every name binding for a built command: the canonical node
/// first, then one alias binding per alias name.
pub fn bind_aliases(built: &BuiltCommand) -> Vec<Arc<Node>> {
    let spec = built.spec();
    let mut bindings = Vec::with_capacity(1 + spec.aliases().len());
    bindings.push(Arc::clone(built.node()));
    for alias in spec.aliases() {
        bindings.push(Arc::new(Node::alias(alias, built.node())));
    }
    debug!(command = spec.name(), aliases = spec.aliases().len(), "bound alias nodes");
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Args;
    use crate::builder::CommandBuilder;
    use crate::sender::Sender;

    fn noop(_: &dyn Sender, _: &Args) {}

    #[test]
    fn test_one_binding_per_name_with_canonical_first() {
        let mut builder = CommandBuilder::root("mural").aliases(["image", "images"]);
        builder.subcommand("top").executes(noop);
        let built = builder.build();

        let bindings = bind_aliases(&built);
        let names: Vec<&str> = bindings.iter().map(|node| node.name()).collect();
        assert_eq!(names, ["mural", "image", "images"]);
    }

    #[test]
    fn test_aliases_share_content_instead_of_copying() {
        let mut builder = CommandBuilder::root("mural").aliases(["image"]);
        builder.subcommand("top").executes(noop);
        let built = builder.build();

        let bindings = bind_aliases(&built);
        let canonical = &bindings[0];
        let alias = &bindings[1];

        // The alias redirects to the canonical node rather than holding a
        // rebuilt subtree; the child lookup lands on the same node.
        assert!(Arc::ptr_eq(alias.redirect().unwrap(), canonical));
        let through_alias = alias.child("top").unwrap();
        let through_canonical = canonical.child("top").unwrap();
        assert!(Arc::ptr_eq(through_alias, through_canonical));
    }

    #[test]
    fn test_alias_shares_executor_reference() {
        let builder = CommandBuilder::root("mural").aliases(["image"]).executes(noop);
        let built = builder.build();
        let bindings = bind_aliases(&built);

        let canonical_exec = bindings[0].executor().unwrap();
        let alias_exec = bindings[1].executor().unwrap();
        assert!(Arc::ptr_eq(canonical_exec, alias_exec));
    }
}
