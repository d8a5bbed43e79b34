//! Dispatch-time overload resolution.
//!
//! For a token count `n`, overloads are tried in stored order (most
//! arguments first). The first count-compatible overload gates the sender;
//! a gating failure aborts the invocation outright. Parse failures abort
//! only the current overload and fall through to the next shorter one; if
//! nothing matches, the error of the most specific overload attempted is
//! surfaced as the cause of [`CommandError::NoMatchingOverload`].

use tracing::{debug, trace};

use crate::argument::{ArgValue, Args};
use crate::error::{CommandError, CommandResult};
use crate::lookup::Lookups;
use crate::sender::Sender;
use crate::spec::{Exec, OverloadSpec};

/// Resolve `tokens` against `overloads` and run the matching handler.
/// `path` is the command path for log events only.
pub(crate) fn dispatch_overloads(
    path: &str,
    overloads: &[OverloadSpec],
    sender: &dyn Sender,
    lookups: &dyn Lookups,
    tokens: &[&str],
) -> CommandResult<()> {
    let n = tokens.len();
    let mut most_specific: Option<CommandError> = None;

    for overload in overloads {
        // Every supplied token must be consumed; omitted trailing tokens
        // are only allowed where defaults exist.
        if n < overload.required_count() || n > overload.arg_count() {
            continue;
        }

        // Gating precedes parsing. No fallback to a shorter overload on a
        // gating failure: denial is about the sender, not the input shape.
        if !overload.permissions().allows(sender) {
            debug!(command = path, sender = sender.name(), "permission denied");
            return Err(CommandError::PermissionDenied);
        }
        if !overload.policy().allows(sender) {
            debug!(command = path, sender = sender.name(), "wrong sender type");
            return Err(CommandError::WrongSenderType);
        }

        match parse_chain(overload, tokens, lookups) {
            Ok(values) => {
                debug!(command = path, argc = n, arity = overload.arg_count(), "dispatching");
                return invoke(overload, sender, Args::new(values));
            }
            Err(err) => {
                trace!(
                    command = path,
                    arity = overload.arg_count(),
                    error = %err,
                    "overload rejected, trying next"
                );
                if most_specific.is_none() {
                    most_specific = Some(err);
                }
            }
        }
    }

    Err(CommandError::NoMatchingOverload { cause: most_specific.map(Box::new) })
}

/// Parse supplied tokens left to right, then fill the remaining trailing
/// slots from their defaults. Count compatibility was checked by the
/// caller, so every unfilled slot is guaranteed to carry a default.
fn parse_chain(
    overload: &OverloadSpec,
    tokens: &[&str],
    lookups: &dyn Lookups,
) -> CommandResult<Vec<ArgValue>> {
    let mut values = Vec::with_capacity(overload.arg_count());
    for (spec, token) in overload.args().iter().zip(tokens) {
        values.push(spec.parse(token, lookups)?);
    }
    for spec in &overload.args()[tokens.len()..] {
        let default = spec
            .default_value()
            .expect("count-compatible overload is missing a trailing default");
        values.push(default.clone());
    }
    Ok(values)
}

fn invoke(overload: &OverloadSpec, sender: &dyn Sender, args: Args) -> CommandResult<()> {
    match &overload.exec {
        Exec::Any(handler) => handler(sender, &args),
        Exec::Player(handler) => {
            let Some(player) = sender.as_player() else {
                return Err(CommandError::WrongSenderType);
            };
            handler(player, &args);
        }
    }
    Ok(())
}
