// ✅ Validator - normalize → classify → checksum compare
//
// `is_valid` is the predicate everything else is layered on. `CnpjValidator`
// produces the same verdict plus a report saying WHY a value was rejected,
// and summarizes batches the way the quality engine summarizes imports.

use crate::checksum::{ChecksumEngine, BASE_LENGTH};
use crate::classifier::{classify, IdentifierType, CNPJ_LENGTH};
use crate::config::EngineConfig;
use crate::formatter::format;
use crate::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validate with the default (legacy-compatible) configuration
pub fn is_valid<'a>(raw: impl Into<Option<&'a str>>) -> bool {
    CnpjValidator::default().validate(raw.into().unwrap_or("")).is_valid()
}

// ============================================================================
// REJECTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Normalized value is not 14 characters long
    WrongLength { found: usize },

    /// Content cannot be classified, or raw input carried foreign characters
    DisallowedCharacters,

    /// Single repeated character (only with `reject_repeated_digits`)
    RepeatedDigits,

    /// Trailing digits differ from the computed ones
    CheckDigitMismatch { expected: String, found: String },
}

impl Rejection {
    /// Stable reason code used in batch summaries
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::WrongLength { .. } => "wrong_length",
            Rejection::DisallowedCharacters => "disallowed_characters",
            Rejection::RepeatedDigits => "repeated_digits",
            Rejection::CheckDigitMismatch { .. } => "check_digit_mismatch",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Rejection::WrongLength { found } => {
                format!("expected {} characters, found {}", CNPJ_LENGTH, found)
            }
            Rejection::DisallowedCharacters => "contains disallowed characters".to_string(),
            Rejection::RepeatedDigits => "single repeated character".to_string(),
            Rejection::CheckDigitMismatch { expected, found } => {
                format!("check digits {} do not match expected {}", found, expected)
            }
        }
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub input: String,
    pub normalized: String,
    pub identifier_type: Option<IdentifierType>,
    pub expected_check_digits: Option<String>,
    pub rejection: Option<Rejection>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    /// Masked form of the normalized value, only for valid reports
    pub fn formatted(&self) -> Option<String> {
        self.is_valid().then(|| format(&self.normalized))
    }

    pub fn summary(&self) -> String {
        match (&self.rejection, self.identifier_type) {
            (None, Some(kind)) => format!("{} valid ({})", format(&self.normalized), kind),
            (None, None) => format!("{} valid", self.normalized),
            (Some(rejection), _) => format!("{} invalid: {}", self.input, rejection.message()),
        }
    }
}

// ============================================================================
// BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub numeric_count: usize,
    pub alphanumeric_count: usize,
    /// Rejection code → count
    pub rejections: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn validity_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.valid_count as f64 / self.total as f64
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CnpjValidator {
    config: EngineConfig,
    engine: ChecksumEngine,
}

impl CnpjValidator {
    pub fn new(config: EngineConfig) -> Self {
        let engine = config.checksum_engine();
        CnpjValidator { config, engine }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_valid()
    }

    /// Validate one raw value and explain the verdict
    pub fn validate(&self, raw: &str) -> ValidationReport {
        let normalized = normalize(raw);
        let mut report = ValidationReport {
            input: raw.to_string(),
            normalized,
            identifier_type: None,
            expected_check_digits: None,
            rejection: None,
        };

        let rejection = self.check(&mut report);
        report.rejection = rejection;

        tracing::debug!(
            input = raw,
            valid = report.is_valid(),
            reason = report.rejection.as_ref().map(|r| r.code()),
            "validated"
        );

        report
    }

    fn check(&self, report: &mut ValidationReport) -> Option<Rejection> {
        if self.config.reject_foreign_characters && has_foreign_characters(&report.input) {
            return Some(Rejection::DisallowedCharacters);
        }

        let clean = report.normalized.clone();
        if clean.len() != CNPJ_LENGTH {
            return Some(Rejection::WrongLength { found: clean.len() });
        }

        let Some(kind) = classify(&clean) else {
            return Some(Rejection::DisallowedCharacters);
        };
        report.identifier_type = Some(kind);

        let expected = match self.engine.check_digits(&clean[..BASE_LENGTH], kind) {
            Ok(expected) => expected,
            Err(_) => return Some(Rejection::DisallowedCharacters),
        };
        report.expected_check_digits = Some(expected.clone());

        if self.config.reject_repeated_digits && is_repeated(&clean) {
            return Some(Rejection::RepeatedDigits);
        }

        let found = &clean[BASE_LENGTH..];
        if found != expected {
            return Some(Rejection::CheckDigitMismatch {
                expected,
                found: found.to_string(),
            });
        }

        None
    }

    pub fn validate_batch<S: AsRef<str>>(&self, values: &[S]) -> Vec<ValidationReport> {
        values.iter().map(|v| self.validate(v.as_ref())).collect()
    }

    pub fn batch_summary(&self, reports: &[ValidationReport]) -> BatchSummary {
        let mut summary = BatchSummary {
            total: reports.len(),
            ..BatchSummary::default()
        };

        for report in reports {
            match &report.rejection {
                None => {
                    summary.valid_count += 1;
                    match report.identifier_type {
                        Some(IdentifierType::Numeric) => summary.numeric_count += 1,
                        Some(IdentifierType::Alphanumeric) => summary.alphanumeric_count += 1,
                        None => {}
                    }
                }
                Some(rejection) => {
                    summary.invalid_count += 1;
                    *summary
                        .rejections
                        .entry(rejection.code().to_string())
                        .or_insert(0) += 1;
                }
            }
        }

        summary
    }
}

/// Anything besides ASCII letters/digits, mask separators and whitespace
fn has_foreign_characters(raw: &str) -> bool {
    raw.chars()
        .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '-') || c.is_whitespace()))
}

fn is_repeated(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
