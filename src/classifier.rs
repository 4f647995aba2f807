// 🔎 Type Classifier - NUMERIC vs ALPHANUMERIC
//
// Classification is ORDERED: the digit-only check runs before the broader
// alphanumeric check, because every numeric CNPJ is also alphanumeric-shaped
// and the two types map characters to checksum values differently.

use crate::error::CnpjError;
use crate::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a complete identifier (base + 2 check digits)
pub const CNPJ_LENGTH: usize = 14;

const DIGITS: &[u8; 10] = b"0123456789";
const ALPHANUMERIC: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// IDENTIFIER TYPE
// ============================================================================

/// IdentifierType - legacy numeric CNPJ or the 2025 alphanumeric one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// 14 digits, 0-9 only
    Numeric,

    /// 12 chars from 0-9A-Z + 2 numeric check digits
    Alphanumeric,
}

impl IdentifierType {
    pub const ALL: [IdentifierType; 2] = [IdentifierType::Numeric, IdentifierType::Alphanumeric];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            IdentifierType::Numeric => "numeric",
            IdentifierType::Alphanumeric => "alphanumeric",
        }
    }

    /// Short code for compact output
    pub fn code(&self) -> &'static str {
        match self {
            IdentifierType::Numeric => "num",
            IdentifierType::Alphanumeric => "alnum",
        }
    }

    /// Symbols a base character may be drawn from
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            IdentifierType::Numeric => DIGITS,
            IdentifierType::Alphanumeric => ALPHANUMERIC,
        }
    }

    /// Whether `c` belongs to this type's character set
    pub fn accepts(&self, c: char) -> bool {
        match self {
            IdentifierType::Numeric => c.is_ascii_digit(),
            IdentifierType::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentifierType {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "num" => Ok(IdentifierType::Numeric),
            "alphanumeric" | "alnum" => Ok(IdentifierType::Alphanumeric),
            _ => Err(CnpjError::UnknownType(s.to_string())),
        }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify an already-normalized candidate.
///
/// Returns `None` for any length other than 14 or for characters outside
/// `0-9A-Z` (lowercase included: callers normalize first).
pub fn classify(normalized: &str) -> Option<IdentifierType> {
    if normalized.len() != CNPJ_LENGTH {
        return None;
    }

    // Numeric MUST be tested first
    if normalized.chars().all(|c| IdentifierType::Numeric.accepts(c)) {
        return Some(IdentifierType::Numeric);
    }

    if normalized.chars().all(|c| IdentifierType::Alphanumeric.accepts(c)) {
        return Some(IdentifierType::Alphanumeric);
    }

    None
}

/// Normalize a raw string and classify it
pub fn detect_type<'a>(raw: impl Into<Option<&'a str>>) -> Option<IdentifierType> {
    classify(&normalize(raw))
}
