//! Unified error handling for the command-routing engine.
//!
//! Every failure here is per-invocation and recoverable: a failed gate or
//! parse returns control to the dispatcher immediately and no handler side
//! effects occur.

use std::fmt;

use thiserror::Error;

/// What kind of registry a lookup argument resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// The host's world registry.
    World,
    /// Currently connected players.
    OnlinePlayer,
    /// Players with a known identity, connected or not.
    KnownPlayer,
    /// The external image file registry.
    Image,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::World => "world",
            Self::OnlinePlayer => "online player",
            Self::KnownPlayer => "player",
            Self::Image => "image file",
        };
        f.write_str(label)
    }
}

/// Errors that can occur while routing one command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The sender holds none of the overload's permission nodes.
    #[error("you don't have permission to run this command")]
    PermissionDenied,

    /// A player-restricted overload was invoked by a non-player sender.
    #[error("this command can only be used by an in-world player")]
    WrongSenderType,

    /// A numeric token parsed but fell outside the declared bounds.
    #[error("argument \"{name}\" is out of range: {value}")]
    ArgumentOutOfRange {
        /// Name of the offending argument slot.
        name: &'static str,
        /// The parsed value.
        value: i64,
    },

    /// A token could not be coerced to the slot's type at all.
    #[error("argument \"{name}\" is malformed: {reason}")]
    ArgumentMalformed {
        /// Name of the offending argument slot.
        name: &'static str,
        /// What was wrong with the token.
        reason: String,
    },

    /// A lookup argument named something the host registry doesn't know.
    #[error("no {kind} named \"{target}\"")]
    UnknownLookupTarget {
        /// Which registry was consulted.
        kind: LookupKind,
        /// The name that failed to resolve.
        target: String,
    },

    /// No overload of the attempted subcommand accepted the input. Carries
    /// the error of the most specific overload attempted, if any parsed at
    /// all.
    #[error("no matching form of this command")]
    NoMatchingOverload { cause: Option<Box<CommandError>> },
}

impl CommandError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::WrongSenderType => "wrong_sender_type",
            Self::ArgumentOutOfRange { .. } => "argument_out_of_range",
            Self::ArgumentMalformed { .. } => "argument_malformed",
            Self::UnknownLookupTarget { .. } => "unknown_lookup_target",
            Self::NoMatchingOverload { .. } => "no_matching_overload",
        }
    }

    /// The underlying error of the most specific overload attempted, for
    /// [`CommandError::NoMatchingOverload`]. `None` for every other variant
    /// and for invocations where no overload got as far as parsing.
    pub fn cause(&self) -> Option<&CommandError> {
        match self {
            Self::NoMatchingOverload { cause } => cause.as_deref(),
            _ => None,
        }
    }

    /// True for the two gating failures that short-circuit before any
    /// argument parsing.
    pub fn is_gating(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::WrongSenderType)
    }
}

/// Result type for routing operations.
pub type CommandResult<T> = Result<T, CommandError>;
