//! mural - a chat-command bridge for placing and managing images in a
//! hosted world.
//!
//! The routing engine lives in the `mural-cmd` crate; this crate wires
//! the actual image-command surface into it: configuration, the business
//! collaborator seam, declarative registration of every subcommand, and
//! the permission-filtered help listing.

#![deny(clippy::all)]

pub mod commands;
pub mod config;
pub mod service;

pub use config::{BridgeConfig, CommandConfig, ConfigError, FlagDefaults};
pub use service::{ClearArea, ImageService};
