// ⚙️ Engine Configuration
//
// Defaults reproduce the legacy validators exactly. Built in code with the
// `with_*` builders, or parsed from an inline JSON object:
//
//   {"checksum_mode": "strict", "reject_repeated_digits": true}

use crate::checksum::{ChecksumEngine, ChecksumMode};
use crate::classifier::IdentifierType;
use crate::error::{CnpjError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Legacy '0' fallback or strict character pre-validation
    pub checksum_mode: ChecksumMode,

    /// Reject values made of one repeated character ("00000000000000" passes Mod-11)
    pub reject_repeated_digits: bool,

    /// Reject raw input containing anything besides 0-9, letters, mask
    /// separators and whitespace, instead of silently stripping it
    pub reject_foreign_characters: bool,

    /// Type used by generation when none is requested
    pub default_type: IdentifierType,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            checksum_mode: ChecksumMode::Legacy,
            reject_repeated_digits: false,
            reject_foreign_characters: false,
            default_type: IdentifierType::Numeric,
        }
    }
}

impl EngineConfig {
    /// Strict checksum + foreign character rejection
    pub fn strict() -> Self {
        EngineConfig {
            checksum_mode: ChecksumMode::Strict,
            reject_foreign_characters: true,
            ..EngineConfig::default()
        }
    }

    /// Parse from a JSON object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CnpjError::Config(e.to_string()))
    }

    pub fn with_checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    pub fn with_reject_repeated_digits(mut self, reject: bool) -> Self {
        self.reject_repeated_digits = reject;
        self
    }

    pub fn with_reject_foreign_characters(mut self, reject: bool) -> Self {
        self.reject_foreign_characters = reject;
        self
    }

    pub fn with_default_type(mut self, kind: IdentifierType) -> Self {
        self.default_type = kind;
        self
    }

    pub fn checksum_engine(&self) -> ChecksumEngine {
        ChecksumEngine::new(self.checksum_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        let config = EngineConfig::default();

        assert_eq!(config.checksum_mode, ChecksumMode::Legacy);
        assert!(!config.reject_repeated_digits);
        assert!(!config.reject_foreign_characters);
        assert_eq!(config.default_type, IdentifierType::Numeric);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"checksum_mode": "strict"}"#).unwrap();

        assert_eq!(config.checksum_mode, ChecksumMode::Strict);
        assert!(!config.reject_repeated_digits);
        assert_eq!(config.checksum_engine().mode(), ChecksumMode::Strict);
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "checksum_mode": "legacy",
            "reject_repeated_digits": true,
            "reject_foreign_characters": true,
            "default_type": "alphanumeric"
        }"#;
        let config = EngineConfig::from_json(json).unwrap();

        assert!(config.reject_repeated_digits);
        assert!(config.reject_foreign_characters);
        assert_eq!(config.default_type, IdentifierType::Alphanumeric);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = EngineConfig::from_json(r#"{"checksum": "strict"}"#);
        assert!(matches!(result, Err(CnpjError::Config(_))));

        let result = EngineConfig::from_json("not json");
        assert!(matches!(result, Err(CnpjError::Config(_))));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_checksum_mode(ChecksumMode::Strict)
            .with_reject_repeated_digits(true)
            .with_reject_foreign_characters(true)
            .with_default_type(IdentifierType::Alphanumeric);

        assert_eq!(
            config,
            EngineConfig {
                default_type: IdentifierType::Alphanumeric,
                reject_repeated_digits: true,
                ..EngineConfig::strict()
            }
        );
    }
}
