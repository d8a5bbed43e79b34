//! # mural-cmd
//!
//! A command-routing engine that sits atop a host-provided low-level
//! command dispatcher and adds the pieces the host lacks:
//!
//! - Typed argument parsing with validation against host registries
//! - Multi-overload resolution, most-arguments-first, emulating optional
//!   and defaulted trailing parameters
//! - OR-semantics permission gating and sender-capability restriction
//! - Alias bindings that share one built tree by reference
//! - A deferred fixup pass correcting permission metadata the host
//!   silently stamps on registered names
//!
//! The command tree is assembled once at startup with [`CommandBuilder`],
//! converted into the host's native node form by
//! [`CommandBuilder::build`], registered through the [`host::Dispatcher`]
//! and left immutable for the life of the process. Dispatch is
//! synchronous and non-reentrant: one sender input produces exactly one
//! handler call or one [`CommandError`].

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod alias;
pub mod argument;
pub mod builder;
pub mod error;
pub mod fixup;
pub mod flags;
pub mod host;
pub mod lookup;
pub mod permission;
mod resolve;
pub mod sender;
pub mod spec;

#[cfg(test)]
mod testutil;

pub use alias::bind_aliases;
pub use argument::{ArgValue, Args, ArgumentSpec, ArgumentType};
pub use builder::{BuiltCommand, CommandBuilder, OverloadBuilder};
pub use error::{CommandError, CommandResult, LookupKind};
pub use fixup::PermissionFixupPass;
pub use flags::ImageFlags;
pub use host::{CommandMap, Dispatcher, Scheduler, TickQueue};
pub use lookup::{ImageRef, Lookups, PlayerRef, WorldRef};
pub use permission::{PermissionSet, SenderPolicy};
pub use sender::{Player, Sender};
pub use spec::{CommandSpec, Exec, OverloadSpec, SubcommandSpec};
