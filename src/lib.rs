// CNPJ Engine - Core Library
// Validation, generation, formatting and classification of Brazilian CNPJ
// identifiers, numeric and alphanumeric. Used by the `cnpj` CLI and tests.

pub mod normalizer;  // raw → 0-9A-Z
pub mod classifier;  // NUMERIC vs ALPHANUMERIC
pub mod checksum;    // Mod-11 check digits
pub mod formatter;   // AA.AAA.AAA/AAAA-DD
pub mod generator;   // random valid identifiers
pub mod validator;   // composition + reason codes
pub mod cnpj;        // immutable value object
pub mod config;
pub mod error;

// Re-export commonly used types
pub use normalizer::normalize;
pub use classifier::{classify, detect_type, IdentifierType, CNPJ_LENGTH};
pub use checksum::{
    check_digits, complete,
    ChecksumEngine, ChecksumMode,
    BASE_LENGTH, WEIGHTS_1, WEIGHTS_2,
};
pub use formatter::{format, is_formatted, MASK};
pub use generator::{
    generate, generate_with, generate_batch, generate_for_root, branch_code,
    BRANCH_LENGTH, ROOT_LENGTH,
};
pub use validator::{
    is_valid, CnpjValidator, ValidationReport, Rejection, BatchSummary,
};
pub use cnpj::Cnpj;
pub use config::EngineConfig;
pub use error::CnpjError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
