// 🧮 Checksum Engine - Mod-11 check digits
//
// d1 = digit(base, WEIGHTS_1)        (12 weights over the 12 base chars)
// d2 = digit(base + d1, WEIGHTS_2)   (13 weights over base + d1)
//
// Same arithmetic for both identifier types; only the char → value mapping
// changes:
//   NUMERIC:      '0'..'9' → 0..9
//   ALPHANUMERIC: ascii(c) - 48, valid range 0..=42 ('A' → 17, 'Z' → 42)
//
// Check digits are always 0-9, never letters.

use crate::classifier::IdentifierType;
use crate::error::{CnpjError, Result};
use serde::{Deserialize, Serialize};

pub const WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
pub const WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Length of the base (root + branch) the check digits are computed from
pub const BASE_LENGTH: usize = 12;

const MAX_ALPHANUMERIC_VALUE: u32 = 42;

// ============================================================================
// CHECKSUM MODE
// ============================================================================

/// How out-of-range characters in an alphanumeric base are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumMode {
    /// Bit-compatible with the legacy validators: a character whose value falls
    /// outside 0..=42 forces that check digit to '0'
    #[default]
    Legacy,

    /// Every base character must belong to the type's alphabet; violations are
    /// reported as `CnpjError::InvalidCharacter`
    Strict,
}

// ============================================================================
// CHECKSUM ENGINE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecksumEngine {
    mode: ChecksumMode,
}

impl ChecksumEngine {
    pub fn new(mode: ChecksumMode) -> Self {
        ChecksumEngine { mode }
    }

    pub fn strict() -> Self {
        ChecksumEngine::new(ChecksumMode::Strict)
    }

    pub fn mode(&self) -> ChecksumMode {
        self.mode
    }

    /// Compute the two check digits for a 12-character base.
    ///
    /// # Errors
    /// * `InvalidLength` - base is not exactly 12 characters
    /// * `InvalidCharacter` - non-digit in a numeric base, or (strict mode only)
    ///   a character outside `0-9A-Z` in an alphanumeric base
    pub fn check_digits(&self, base: &str, kind: IdentifierType) -> Result<String> {
        let found = base.chars().count();
        if found != BASE_LENGTH {
            return Err(CnpjError::InvalidLength {
                expected: BASE_LENGTH,
                found,
            });
        }

        if kind == IdentifierType::Numeric || self.mode == ChecksumMode::Strict {
            if let Some((position, character)) =
                base.chars().enumerate().find(|(_, c)| !kind.accepts(*c))
            {
                return Err(CnpjError::InvalidCharacter { character, position });
            }
        }

        Ok(compute(base, kind))
    }

    /// Append the computed check digits to `base`
    pub fn complete(&self, base: &str, kind: IdentifierType) -> Result<String> {
        let digits = self.check_digits(base, kind)?;
        Ok(format!("{}{}", base, digits))
    }
}

/// Check digits using the default (legacy) engine
pub fn check_digits(base: &str, kind: IdentifierType) -> Result<String> {
    ChecksumEngine::default().check_digits(base, kind)
}

/// `base` + check digits using the default (legacy) engine
pub fn complete(base: &str, kind: IdentifierType) -> Result<String> {
    ChecksumEngine::default().complete(base, kind)
}

// ============================================================================
// ARITHMETIC
// ============================================================================

/// Both Mod-11 passes over an already length-checked base
pub(crate) fn compute(base: &str, kind: IdentifierType) -> String {
    let mut values: Vec<Option<u32>> = base.chars().map(|c| char_value(c, kind)).collect();

    let d1 = digit(&values, &WEIGHTS_1);
    values.push(char_value(d1, kind));
    let d2 = digit(&values, &WEIGHTS_2);

    tracing::trace!(base, kind = kind.name(), %d1, %d2, "check digits computed");

    format!("{}{}", d1, d2)
}

fn char_value(c: char, kind: IdentifierType) -> Option<u32> {
    match kind {
        IdentifierType::Numeric => c.to_digit(10),
        IdentifierType::Alphanumeric => (c as u32)
            .checked_sub(u32::from(b'0'))
            .filter(|v| *v <= MAX_ALPHANUMERIC_VALUE),
    }
}

/// One Mod-11 pass. `None` values short-circuit the whole digit to '0'.
fn digit(values: &[Option<u32>], weights: &[u32]) -> char {
    let mut sum = 0u32;
    for (value, weight) in values.iter().zip(weights) {
        let Some(value) = value else {
            tracing::debug!("character value out of range, check digit falls back to '0'");
            return '0';
        };
        sum += value * weight;
    }

    let dv = 11 - sum % 11;
    if dv >= 10 {
        '0'
    } else {
        char::from(b'0' + dv as u8)
    }
}
