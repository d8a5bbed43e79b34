//! Token coercion for each argument type.

use crate::argument::types::{ArgumentSpec, ArgumentType};
use crate::argument::value::ArgValue;
use crate::error::{CommandError, CommandResult, LookupKind};
use crate::flags::ImageFlags;
use crate::lookup::Lookups;

impl ArgumentSpec {
    /// Coerce one raw token into a resolved value, consulting the host
    /// registries where the type requires it.
    pub fn parse(&self, token: &str, lookups: &dyn Lookups) -> CommandResult<ArgValue> {
        match *self.ty() {
            ArgumentType::Integer { min, max } => {
                let value = parse_number(self.name(), token)?;
                let below = min.is_some_and(|min| value < min);
                let above = max.is_some_and(|max| value > max);
                if below || above {
                    return Err(CommandError::ArgumentOutOfRange { name: self.name(), value });
                }
                Ok(ArgValue::Integer(value))
            }
            ArgumentType::String => Ok(ArgValue::String(token.to_string())),
            ArgumentType::World => lookups
                .world(token)
                .map(ArgValue::World)
                .ok_or_else(|| unknown(LookupKind::World, token)),
            ArgumentType::OnlinePlayer => lookups
                .online_player(token)
                .map(ArgValue::OnlinePlayer)
                .ok_or_else(|| unknown(LookupKind::OnlinePlayer, token)),
            ArgumentType::KnownPlayer => lookups
                .known_player(token)
                .map(ArgValue::KnownPlayer)
                .ok_or_else(|| unknown(LookupKind::KnownPlayer, token)),
            ArgumentType::Image => lookups
                .image(token)
                .map(ArgValue::Image)
                .ok_or_else(|| unknown(LookupKind::Image, token)),
            ArgumentType::Dimension => {
                let value = parse_number(self.name(), token)?;
                if value < 0 {
                    return Err(CommandError::ArgumentOutOfRange { name: self.name(), value });
                }
                Ok(ArgValue::Dimension(value as u32))
            }
            ArgumentType::Flags => ImageFlags::from_letters(token)
                .map(ArgValue::Flags)
                .map_err(|letter| CommandError::ArgumentMalformed {
                    name: self.name(),
                    reason: format!("unknown flag \"{letter}\""),
                }),
        }
    }
}

fn parse_number(name: &'static str, token: &str) -> CommandResult<i64> {
    token.parse().map_err(|_| CommandError::ArgumentMalformed {
        name,
        reason: format!("\"{token}\" is not a number"),
    })
}

fn unknown(kind: LookupKind, target: &str) -> CommandError {
    CommandError::UnknownLookupTarget { kind, target: target.to_string() }
}
