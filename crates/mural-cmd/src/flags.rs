//! Image behavior flags and their letter codec.
//!
//! Flags travel on the wire as a bare string of letter codes (`"AIR"`).
//! When a flags argument is omitted entirely, the caller-supplied default
//! for that overload applies; an explicitly empty string means no flags.

use bitflags::bitflags;

bitflags! {
    /// Behavior flags attached to a placed or given image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ImageFlags: u32 {
        /// Cycle through animation frames.
        const ANIMATED = 1 << 0;
        /// Render with a glowing outline.
        const GLOWING = 1 << 1;
        /// React to player interaction.
        const INTERACTIVE = 1 << 2;
        /// Can be removed by hitting it.
        const REMOVABLE = 1 << 3;
        /// Drops an item copy when removed.
        const DROPPABLE = 1 << 4;
    }
}

/// Letter vocabulary, in canonical output order.
const LETTERS: &[(char, ImageFlags)] = &[
    ('A', ImageFlags::ANIMATED),
    ('G', ImageFlags::GLOWING),
    ('I', ImageFlags::INTERACTIVE),
    ('R', ImageFlags::REMOVABLE),
    ('D', ImageFlags::DROPPABLE),
];

impl ImageFlags {
    /// Default flag set for images handed out as items.
    pub const DEFAULT_GIVE: Self = Self::ANIMATED.union(Self::REMOVABLE).union(Self::DROPPABLE);

    /// Default flag set for images placed directly in the world.
    pub const DEFAULT_PLACE: Self = Self::ANIMATED.union(Self::INTERACTIVE).union(Self::REMOVABLE);

    /// Decode a string of letter codes. Letters are case-insensitive and
    /// an empty string decodes to no flags. Returns the first unknown
    /// letter on failure.
    pub fn from_letters(input: &str) -> Result<Self, char> {
        let mut flags = Self::empty();
        for ch in input.chars() {
            let upper = ch.to_ascii_uppercase();
            match LETTERS.iter().find(|(letter, _)| *letter == upper) {
                Some((_, flag)) => flags |= *flag,
                None => return Err(ch),
            }
        }
        Ok(flags)
    }

    /// Encode as letter codes in canonical order.
    pub fn letters(&self) -> String {
        LETTERS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(letter, _)| *letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_letters() {
        let flags = ImageFlags::from_letters("AIR").unwrap();
        assert!(flags.contains(ImageFlags::ANIMATED));
        assert!(flags.contains(ImageFlags::INTERACTIVE));
        assert!(flags.contains(ImageFlags::REMOVABLE));
        assert!(!flags.contains(ImageFlags::GLOWING));
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(ImageFlags::from_letters("gd"), ImageFlags::from_letters("GD"));
    }

    #[test]
    fn test_empty_string_means_no_flags() {
        assert_eq!(ImageFlags::from_letters("").unwrap(), ImageFlags::empty());
    }

    #[test]
    fn test_unknown_letter_is_reported() {
        assert_eq!(ImageFlags::from_letters("AXR"), Err('X'));
    }

    #[test]
    fn test_letters_round_trip() {
        let flags = ImageFlags::GLOWING | ImageFlags::DROPPABLE;
        assert_eq!(ImageFlags::from_letters(&flags.letters()).unwrap(), flags);
    }

    #[test]
    fn test_give_and_place_defaults_differ() {
        assert_ne!(ImageFlags::DEFAULT_GIVE, ImageFlags::DEFAULT_PLACE);
    }
}
