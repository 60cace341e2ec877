//! Character ramps
//!
//! A ramp orders characters by visual density: index 0 is the densest
//! character (drawn for the darkest pixels) and the last index the lightest,
//! usually a space.

use crate::error::{AsciiError, Result};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Ten character ramp `"@%#*+=-:. "`
const DEPTH_10_CHARS: [char; 10] = [
    '@', // 0: densest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: lightest
];

/// Seventy character ramp, densest first
const DEPTH_70_CHARS: [char; 70] = [
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w',
    'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j',
    'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+', '~', '<', '>',
    'i', '!', 'l', 'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// An ordered, non-empty sequence of characters from dense to light
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterRamp {
    chars: Cow<'static, [char]>,
}

impl CharacterRamp {
    /// `"@%#*+=-:. "`
    pub const DEPTH_10: CharacterRamp = CharacterRamp {
        chars: Cow::Borrowed(&DEPTH_10_CHARS),
    };

    /// `` "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\|()1{}[]?-_+~<>i!lI;:,"^`'. " ``
    pub const DEPTH_70: CharacterRamp = CharacterRamp {
        chars: Cow::Borrowed(&DEPTH_70_CHARS),
    };

    /// Builds a custom ramp from a string, densest character first
    ///
    /// # Errors
    /// [`AsciiError::EmptyRamp`] if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        Self::from_chars(chars.chars().collect())
    }

    /// Builds a custom ramp from a list of characters, densest first
    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(AsciiError::EmptyRamp);
        }
        Ok(Self {
            chars: Cow::Owned(chars),
        })
    }

    /// Number of characters, always at least 1
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; a ramp cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters of the ramp, densest first
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character for a quantized brightness index
    ///
    /// # Errors
    /// [`AsciiError::IndexOutOfRange`] if `index >= self.len()`. An out of
    /// range index is a quantizer bug and is never clamped.
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.chars
            .get(index)
            .copied()
            .ok_or(AsciiError::IndexOutOfRange {
                index,
                len: self.chars.len(),
            })
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self::DEPTH_10
    }
}

impl FromStr for CharacterRamp {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CharacterRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(CharacterRamp::DEPTH_10.len(), 10);
        assert_eq!(CharacterRamp::DEPTH_70.len(), 70);
    }

    #[test]
    fn test_builtin_contents() {
        assert_eq!(CharacterRamp::DEPTH_10.to_string(), "@%#*+=-:. ");
        assert_eq!(
            CharacterRamp::DEPTH_70.to_string(),
            "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. "
        );
    }

    #[test]
    fn test_char_at_bounds() {
        let ramp = CharacterRamp::DEPTH_10;
        assert_eq!(ramp.char_at(0).unwrap(), '@');
        assert_eq!(ramp.char_at(9).unwrap(), ' ');
        assert!(matches!(
            ramp.char_at(10),
            Err(AsciiError::IndexOutOfRange { index: 10, len: 10 })
        ));
    }

    #[test]
    fn test_custom_ramp() {
        let ramp: CharacterRamp = "AB".parse().unwrap();
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.char_at(0).unwrap(), 'A');
        assert_eq!(ramp.char_at(1).unwrap(), 'B');
    }

    #[test]
    fn test_custom_ramp_unicode() {
        let ramp = CharacterRamp::new("█▓▒░ ").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.char_at(2).unwrap(), '▒');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(matches!(CharacterRamp::new(""), Err(AsciiError::EmptyRamp)));
        assert!(matches!(
            CharacterRamp::from_chars(Vec::new()),
            Err(AsciiError::EmptyRamp)
        ));
    }

    #[test]
    fn test_default_is_depth_10() {
        assert_eq!(CharacterRamp::default(), CharacterRamp::DEPTH_10);
        assert_eq!(CharacterRamp::new("@%#*+=-:. ").unwrap(), CharacterRamp::DEPTH_10);
    }
}
