//! Argument specification types.

use crate::argument::value::ArgValue;
use crate::flags::ImageFlags;

/// The type tag of one argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentType {
    /// Whole number with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// Bare string, always succeeds.
    String,
    /// World resolved against the host's world registry.
    World,
    /// Player that must be currently connected.
    OnlinePlayer,
    /// Player with a known identity, connected or not.
    KnownPlayer,
    /// Image file resolved against the external file registry.
    Image,
    /// Non-negative size where `0` means "auto", computed later by the
    /// handler.
    Dimension,
    /// Letter-coded flag set.
    Flags,
}

/// One named, typed slot in an overload's argument chain. Owned
/// exclusively by its overload.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    name: &'static str,
    ty: ArgumentType,
    default: Option<ArgValue>,
}

impl ArgumentSpec {
    fn new(name: &'static str, ty: ArgumentType) -> Self {
        Self { name, ty, default: None }
    }

    /// Unbounded integer.
    pub fn integer(name: &'static str) -> Self {
        Self::new(name, ArgumentType::Integer { min: None, max: None })
    }

    /// Integer with an inclusive lower bound.
    pub fn integer_min(name: &'static str, min: i64) -> Self {
        Self::new(name, ArgumentType::Integer { min: Some(min), max: None })
    }

    /// Integer with inclusive bounds.
    pub fn integer_range(name: &'static str, min: i64, max: i64) -> Self {
        Self::new(name, ArgumentType::Integer { min: Some(min), max: Some(max) })
    }

    /// Bare string.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, ArgumentType::String)
    }

    /// World by name.
    pub fn world(name: &'static str) -> Self {
        Self::new(name, ArgumentType::World)
    }

    /// Currently connected player by name.
    pub fn online_player(name: &'static str) -> Self {
        Self::new(name, ArgumentType::OnlinePlayer)
    }

    /// Known player by name, connected or not.
    pub fn known_player(name: &'static str) -> Self {
        Self::new(name, ArgumentType::KnownPlayer)
    }

    /// Stored image file by name.
    pub fn image(name: &'static str) -> Self {
        Self::new(name, ArgumentType::Image)
    }

    /// Non-negative size; `0` requests auto-sizing.
    pub fn dimension(name: &'static str) -> Self {
        Self::new(name, ArgumentType::Dimension)
    }

    /// Letter-coded flag set with the caller-supplied default used when
    /// the argument is omitted entirely.
    pub fn flags(name: &'static str, default: ImageFlags) -> Self {
        Self::new(name, ArgumentType::Flags).with_default(ArgValue::Flags(default))
    }

    /// Attach a default, making this slot optional when it sits in the
    /// trailing run of an overload's chain.
    pub fn with_default(mut self, value: ArgValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Slot name, unique within one overload.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type tag.
    pub fn ty(&self) -> &ArgumentType {
        &self.ty
    }

    /// The default value, if this slot has one.
    pub fn default_value(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }
}
