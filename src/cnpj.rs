// 🏢 Cnpj - validated, immutable identifier value
//
// Built in one step (parse / from_base / generate); there is no setter.
//
//   12.ABC.345/01DE-35
//   └root──┘ └br┘ └dv
//
// Root (8) identifies the company, branch (4) the establishment ("0001" is
// the headquarters), and the last 2 are check digits.

use crate::checksum::{self, BASE_LENGTH};
use crate::classifier::{classify, IdentifierType, CNPJ_LENGTH};
use crate::error::{CnpjError, Result};
use crate::formatter::format;
use crate::generator::{self, ROOT_LENGTH};
use crate::normalizer::normalize;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HEADQUARTERS_BRANCH: &str = "0001";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj {
    value: String,
    kind: IdentifierType,
}

impl Cnpj {
    /// Parse a raw (masked or bare) value.
    ///
    /// # Errors
    /// * `InvalidLength` - normalized value is not 14 characters
    /// * `UnknownType` - content is neither numeric nor alphanumeric
    /// * `CheckDigitMismatch` - trailing digits are wrong
    pub fn parse(raw: &str) -> Result<Self> {
        let value = normalize(raw);

        if value.len() != CNPJ_LENGTH {
            return Err(CnpjError::InvalidLength {
                expected: CNPJ_LENGTH,
                found: value.len(),
            });
        }

        let kind = classify(&value).ok_or_else(|| CnpjError::UnknownType(value.clone()))?;

        let expected = checksum::check_digits(&value[..BASE_LENGTH], kind)?;
        let found = &value[BASE_LENGTH..];
        if found != expected {
            return Err(CnpjError::CheckDigitMismatch {
                expected,
                found: found.to_string(),
            });
        }

        Ok(Cnpj { value, kind })
    }

    /// Compute check digits for a 12-character base and build the identifier.
    ///
    /// The resulting type is the one the full value classifies as, so a
    /// digit-only base requested as alphanumeric comes back numeric.
    pub fn from_base(base: &str, kind: IdentifierType) -> Result<Self> {
        let value = checksum::ChecksumEngine::strict().complete(base, kind)?;
        let kind = classify(&value).unwrap_or(kind);
        Ok(Cnpj { value, kind })
    }

    /// Random valid identifier of `kind`
    pub fn generate<R: Rng + ?Sized>(kind: IdentifierType, rng: &mut R) -> Self {
        Cnpj {
            value: generator::generate_with(kind, rng),
            kind,
        }
    }

    /// Normalized 14-character value
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn identifier_type(&self) -> IdentifierType {
        self.kind
    }

    /// First 12 characters (root + branch)
    pub fn base(&self) -> &str {
        &self.value[..BASE_LENGTH]
    }

    /// Company root, shared by every establishment of the company
    pub fn root(&self) -> &str {
        &self.value[..ROOT_LENGTH]
    }

    /// Branch/order suffix
    pub fn branch(&self) -> &str {
        &self.value[ROOT_LENGTH..BASE_LENGTH]
    }

    pub fn check_digits(&self) -> &str {
        &self.value[BASE_LENGTH..]
    }

    /// Matriz (headquarters) establishment
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// Same company, possibly a different establishment
    pub fn same_company(&self, other: &Cnpj) -> bool {
        self.root() == other.root()
    }

    /// AA.AAA.AAA/AAAA-DD
    pub fn formatted(&self) -> String {
        format(&self.value)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self> {
        Cnpj::parse(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = CnpjError;

    fn try_from(value: &str) -> Result<Self> {
        Cnpj::parse(value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = CnpjError;

    fn try_from(value: String) -> Result<Self> {
        Cnpj::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.value
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
