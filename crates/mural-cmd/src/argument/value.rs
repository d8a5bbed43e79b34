//! Resolved argument values and the accessor wrapper handed to handlers.

use crate::flags::ImageFlags;
use crate::lookup::{ImageRef, PlayerRef, WorldRef};

/// One resolved argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Whole number.
    Integer(i64),
    /// Bare string.
    String(String),
    /// World handle.
    World(WorldRef),
    /// Connected player handle.
    OnlinePlayer(PlayerRef),
    /// Known player handle, connected or not.
    KnownPlayer(PlayerRef),
    /// Stored image handle.
    Image(ImageRef),
    /// Non-negative size; `0` means auto.
    Dimension(u32),
    /// Decoded flag set.
    Flags(ImageFlags),
}

impl ArgValue {
    /// Short label of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::World(_) => "world",
            Self::OnlinePlayer(_) => "online player",
            Self::KnownPlayer(_) => "known player",
            Self::Image(_) => "image",
            Self::Dimension(_) => "dimension",
            Self::Flags(_) => "flags",
        }
    }
}

/// Ordered resolved values for one invocation, in declaration order.
///
/// Created per dispatch and discarded after the handler returns. The typed
/// accessors panic on a kind mismatch: the tree builder fixes each
/// overload's argument chain at startup, so a mismatch is a bug in the
/// registration code, not runtime input.
#[derive(Debug)]
pub struct Args {
    values: Vec<ArgValue>,
}

impl Args {
    pub(crate) fn new(values: Vec<ArgValue>) -> Self {
        Self { values }
    }

    /// Number of resolved values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the invocation carried no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw value at `index`.
    pub fn get(&self, index: usize) -> Option<&ArgValue> {
        self.values.get(index)
    }

    fn slot(&self, index: usize, expected: &'static str) -> &ArgValue {
        self.values
            .get(index)
            .unwrap_or_else(|| panic!("no argument at index {index} (expected {expected})"))
    }

    /// Integer at `index`.
    pub fn integer(&self, index: usize) -> i64 {
        match self.slot(index, "integer") {
            ArgValue::Integer(value) => *value,
            other => panic!("argument {index} is a {}, expected integer", other.kind()),
        }
    }

    /// String at `index`.
    pub fn string(&self, index: usize) -> &str {
        match self.slot(index, "string") {
            ArgValue::String(value) => value,
            other => panic!("argument {index} is a {}, expected string", other.kind()),
        }
    }

    /// World handle at `index`.
    pub fn world(&self, index: usize) -> &WorldRef {
        match self.slot(index, "world") {
            ArgValue::World(value) => value,
            other => panic!("argument {index} is a {}, expected world", other.kind()),
        }
    }

    /// Online player handle at `index`.
    pub fn online_player(&self, index: usize) -> &PlayerRef {
        match self.slot(index, "online player") {
            ArgValue::OnlinePlayer(value) => value,
            other => panic!("argument {index} is a {}, expected online player", other.kind()),
        }
    }

    /// Known (possibly offline) player handle at `index`.
    pub fn known_player(&self, index: usize) -> &PlayerRef {
        match self.slot(index, "known player") {
            ArgValue::KnownPlayer(value) => value,
            other => panic!("argument {index} is a {}, expected known player", other.kind()),
        }
    }

    /// Image handle at `index`.
    pub fn image(&self, index: usize) -> &ImageRef {
        match self.slot(index, "image") {
            ArgValue::Image(value) => value,
            other => panic!("argument {index} is a {}, expected image", other.kind()),
        }
    }

    /// Dimension at `index`; `0` means auto-size.
    pub fn dimension(&self, index: usize) -> u32 {
        match self.slot(index, "dimension") {
            ArgValue::Dimension(value) => *value,
            other => panic!("argument {index} is a {}, expected dimension", other.kind()),
        }
    }

    /// Flag set at `index`.
    pub fn flags(&self, index: usize) -> ImageFlags {
        match self.slot(index, "flags") {
            ArgValue::Flags(value) => *value,
            other => panic!("argument {index} is a {}, expected flags", other.kind()),
        }
    }
}
