// 🎲 Generator - random, self-consistent CNPJs
//
// Draws a 12-char base uniformly from the type's alphabet and appends the
// check digits. Output always passes `is_valid`, but is NOT a registered
// company identifier.
//
// The random source is injected (any `rand::Rng`), so a seeded `StdRng`
// gives reproducible output. `generate()` alone uses the thread-local RNG.

use crate::checksum::{self, ChecksumEngine, BASE_LENGTH};
use crate::classifier::IdentifierType;
use crate::error::{CnpjError, Result};
use rand::Rng;

/// Length of the company root (first 8 base characters)
pub const ROOT_LENGTH: usize = 8;

/// Length of the branch/order suffix (base characters 8..12)
pub const BRANCH_LENGTH: usize = 4;

/// Generate a valid identifier of `kind` using the thread-local RNG
pub fn generate(kind: IdentifierType) -> String {
    generate_with(kind, &mut rand::thread_rng())
}

/// Generate a valid identifier of `kind` from an injected random source
pub fn generate_with<R: Rng + ?Sized>(kind: IdentifierType, rng: &mut R) -> String {
    let base = random_base(kind, rng);
    let digits = checksum::compute(&base, kind);

    tracing::debug!(kind = kind.name(), base = %base, "generated identifier");

    base + &digits
}

/// Generate `count` identifiers of `kind`
pub fn generate_batch<R: Rng + ?Sized>(
    kind: IdentifierType,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count).map(|_| generate_with(kind, rng)).collect()
}

/// Complete an 8-char company root and a 4-char branch into a full identifier.
///
/// Numeric branches are written zero-padded (`"0001"` is the headquarters).
/// Both parts must use characters from `kind`'s alphabet.
pub fn generate_for_root(root: &str, branch: &str, kind: IdentifierType) -> Result<String> {
    let found = root.chars().count();
    if found != ROOT_LENGTH {
        return Err(CnpjError::InvalidLength {
            expected: ROOT_LENGTH,
            found,
        });
    }

    let found = branch.chars().count();
    if found != BRANCH_LENGTH {
        return Err(CnpjError::InvalidLength {
            expected: BRANCH_LENGTH,
            found,
        });
    }

    ChecksumEngine::strict().complete(&format!("{}{}", root, branch), kind)
}

/// Zero-padded branch code for a numeric branch number ("0001" for 1)
pub fn branch_code(number: u16) -> Result<String> {
    if number == 0 || number > 9999 {
        return Err(CnpjError::InvalidBranch(number));
    }
    Ok(format!("{:04}", number))
}

/// Redraws of a digit-only alphanumeric base before a letter is forced in
const MAX_REDRAWS: usize = 8;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_base<R: Rng + ?Sized>(kind: IdentifierType, rng: &mut R) -> String {
    let alphabet = kind.alphabet();
    let draw = |rng: &mut R| -> Vec<u8> {
        (0..BASE_LENGTH)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    };

    let mut base = draw(rng);

    // a digit-only alphanumeric base would classify back as numeric
    if kind == IdentifierType::Alphanumeric {
        let mut redraws = 0;
        while !base.iter().any(u8::is_ascii_uppercase) {
            if redraws == MAX_REDRAWS {
                let position = rng.gen_range(0..BASE_LENGTH);
                base[position] = LETTERS[rng.gen_range(0..LETTERS.len())];
                tracing::debug!(position, "letter forced into digit-only alphanumeric base");
                break;
            }

            tracing::trace!("digit-only alphanumeric base redrawn");
            base = draw(rng);
            redraws += 1;
        }
    }

    base.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::detect_type;
    use crate::validator::is_valid;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_numeric() {
        let cnpj = generate(IdentifierType::Numeric);

        assert_eq!(cnpj.len(), 14);
        assert!(cnpj.chars().all(|c| c.is_ascii_digit()));
        assert!(is_valid(cnpj.as_str()));
        assert_eq!(detect_type(cnpj.as_str()), Some(IdentifierType::Numeric));
    }

    #[test]
    fn test_generate_alphanumeric() {
        let cnpj = generate(IdentifierType::Alphanumeric);

        assert_eq!(cnpj.len(), 14);
        assert!(cnpj.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert!(cnpj[12..].chars().all(|c| c.is_ascii_digit()));
        assert!(is_valid(cnpj.as_str()));
        assert_eq!(detect_type(cnpj.as_str()), Some(IdentifierType::Alphanumeric));
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for kind in IdentifierType::ALL {
            assert_eq!(generate_batch(kind, 5, &mut a), generate_batch(kind, 5, &mut b));
        }
    }

    #[test]
    fn test_constant_rng_numeric() {
        // a source that always yields 0 draws '0' for every base char
        let mut rng = StepRng::new(0, 0);
        assert_eq!(generate_with(IdentifierType::Numeric, &mut rng), "00000000000000");
    }

    #[test]
    fn test_constant_rng_alphanumeric_terminates() {
        // the same source never draws a letter; one is forced in after the redraws
        let mut rng = StepRng::new(0, 0);
        let cnpj = generate_with(IdentifierType::Alphanumeric, &mut rng);

        assert_eq!(cnpj, "A0000000000032");
        assert!(is_valid(cnpj.as_str()));
        assert_eq!(detect_type(cnpj.as_str()), Some(IdentifierType::Alphanumeric));
    }

    #[test]
    fn test_batch_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = generate_batch(IdentifierType::Alphanumeric, 25, &mut rng);

        assert_eq!(batch.len(), 25);
        assert!(batch.iter().all(|c| is_valid(c.as_str())));
    }

    #[test]
    fn test_generate_for_root() {
        let hq = generate_for_root("12345678", "0001", IdentifierType::Numeric).unwrap();
        assert_eq!(hq, "12345678000195");

        let branch = generate_for_root("12ABC345", "01DE", IdentifierType::Alphanumeric).unwrap();
        assert_eq!(branch, "12ABC34501DE35");
    }

    #[test]
    fn test_generate_for_root_rejects_bad_parts() {
        assert_eq!(
            generate_for_root("1234567", "0001", IdentifierType::Numeric).unwrap_err(),
            CnpjError::InvalidLength { expected: 8, found: 7 }
        );
        assert_eq!(
            generate_for_root("12345678", "01", IdentifierType::Numeric).unwrap_err(),
            CnpjError::InvalidLength { expected: 4, found: 2 }
        );
        assert!(matches!(
            generate_for_root("12ABC345", "0001", IdentifierType::Numeric),
            Err(CnpjError::InvalidCharacter { character: 'A', position: 2 })
        ));
    }

    #[test]
    fn test_branch_code() {
        assert_eq!(branch_code(1).unwrap(), "0001");
        assert_eq!(branch_code(9999).unwrap(), "9999");
        assert_eq!(branch_code(0).unwrap_err(), CnpjError::InvalidBranch(0));
        assert_eq!(branch_code(10000).unwrap_err(), CnpjError::InvalidBranch(10000));
    }
}
