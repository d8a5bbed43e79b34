//! Deferred correction of host-assigned command permissions.
//!
//! Registering a command makes the host stamp its own permission node on
//! the name, which overrides the engine's gating. The host's registration
//! bookkeeping may not be complete within the current scheduling cycle,
//! so the correction runs as a one-shot task on the *next* tick rather
//! than synchronously.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::host::{CommandMap, Scheduler};
use crate::spec::CommandSpec;

/// One-shot pass that clears the host-assigned permission on a command's
/// canonical name and every alias, restoring the engine's permission
/// sets as the sole authority.
pub struct PermissionFixupPass {
    names: Vec<String>,
}

impl PermissionFixupPass {
    /// Cover every name the command is bound under.
    pub fn for_command(spec: &CommandSpec) -> Self {
        Self { names: spec.names().map(String::from).collect() }
    }

    /// Queue the pass for the next scheduling cycle.
    pub fn schedule(self, scheduler: &dyn Scheduler, commands: Arc<CommandMap>) {
        scheduler.run_next_tick(Box::new(move || {
            for name in &self.names {
                if commands.clear_permission(name) {
                    trace!(command = %name, "cleared host-assigned permission");
                }
                // Absent entries are skipped: the host may have aliased
                // the name away in its own command configuration.
            }
            debug!(commands = self.names.len(), "command permission fixup complete");
        }));
    }
}
