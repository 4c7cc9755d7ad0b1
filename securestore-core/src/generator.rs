//! Random password generator.
//!
//! Characters are drawn uniformly, with replacement, from the concatenation
//! of the enabled character classes using the operating system RNG.

use rand::{rngs::OsRng, seq::SliceRandom};

use crate::error::GeneratorError;

/// Shortest password the generator produces.
pub const MIN_LENGTH: u32 = 6;
/// Longest password the generator produces.
pub const MAX_LENGTH: u32 = 20;
/// Length used when none is chosen.
pub const DEFAULT_LENGTH: u32 = 12;

const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_-+=<>?{}[]|";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Options for [`generate_password`].
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PasswordOptions {
    /// Number of characters, within `MIN_LENGTH..=MAX_LENGTH`.
    pub length: u32,
    /// Include `0-9`.
    pub include_numbers: bool,
    /// Include `!@#$%^&*()_-+=<>?{}[]|`.
    pub include_symbols: bool,
    /// Include `A-Z`.
    pub include_uppercase: bool,
    /// Include `a-z`.
    pub include_lowercase: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_numbers: true,
            include_symbols: true,
            include_uppercase: true,
            include_lowercase: true,
        }
    }
}

impl PasswordOptions {
    fn alphabet(&self) -> Vec<u8> {
        [
            (self.include_numbers, NUMBERS),
            (self.include_symbols, SYMBOLS),
            (self.include_uppercase, UPPERCASE),
            (self.include_lowercase, LOWERCASE),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, class)| class.bytes())
        .collect()
    }
}

/// Returns the default generator options.
#[uniffi::export]
#[must_use]
pub fn default_password_options() -> PasswordOptions {
    PasswordOptions::default()
}

/// Generates a random password.
///
/// # Errors
///
/// - [`GeneratorError::InvalidLength`] if `options.length` is out of range.
/// - [`GeneratorError::NoCharacterClasses`] if every class is disabled.
#[uniffi::export]
pub fn generate_password(options: PasswordOptions) -> Result<String, GeneratorError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(GeneratorError::InvalidLength {
            length: options.length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        return Err(GeneratorError::NoCharacterClasses);
    }

    let mut rng = OsRng;
    let password = (0..options.length)
        .filter_map(|_| alphabet.choose(&mut rng).map(|&byte| char::from(byte)))
        .collect();
    Ok(password)
}
