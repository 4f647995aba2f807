// ❌ Error Taxonomy
// Fallible constructors (Cnpj::parse, ChecksumEngine in strict mode, config parsing)
// report one of these. Predicates (is_valid, detect_type, format) never fail.

use serde::{Deserialize, Serialize};

// ============================================================================
// CNPJ ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "error_kind", content = "detail", rename_all = "snake_case")]
pub enum CnpjError {
    /// Value (or base) does not have the required number of characters
    #[error("Invalid length: expected {expected} characters, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Character outside the accepted set for the identifier type
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Numeric branch number outside 1..=9999
    #[error("Invalid branch number {0}: expected 1..=9999")]
    InvalidBranch(u16),

    /// Could not classify as numeric or alphanumeric
    #[error("Unknown identifier type: {0}")]
    UnknownType(String),

    /// Check digits present do not match the computed ones
    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: String, found: String },

    /// Engine configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CnpjError>;
