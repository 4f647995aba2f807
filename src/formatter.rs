// 🎭 Formatter - AA.AAA.AAA/AAAA-DD
//
// Same separator grid for numeric and alphanumeric values. Formatting is
// cosmetic: anything that is not exactly 14 characters comes back unchanged.
// The inverse is `normalize`.

use crate::classifier::CNPJ_LENGTH;

/// Display mask; `A` = base character, `D` = check digit
pub const MASK: &str = "AA.AAA.AAA/AAAA-DD";

/// Separator inserted *before* the character at each index
const SEPARATORS: [(usize, char); 4] = [(2, '.'), (5, '.'), (8, '/'), (12, '-')];

fn separator_at(index: usize) -> Option<char> {
    SEPARATORS
        .iter()
        .find(|(at, _)| *at == index)
        .map(|(_, sep)| *sep)
}

/// Insert the mask separators into a 14-character value
pub fn format(value: &str) -> String {
    if value.chars().count() != CNPJ_LENGTH {
        return value.to_string();
    }

    let mut masked = String::with_capacity(MASK.len());
    for (i, c) in value.chars().enumerate() {
        if let Some(sep) = separator_at(i) {
            masked.push(sep);
        }
        masked.push(c);
    }
    masked
}

/// Whether `value` already follows the mask exactly (separators in place,
/// uppercase `0-9A-Z` everywhere else)
pub fn is_formatted(value: &str) -> bool {
    if value.len() != MASK.len() {
        return false;
    }

    value.chars().zip(MASK.chars()).all(|(c, m)| match m {
        'A' | 'D' => c.is_ascii_digit() || c.is_ascii_uppercase(),
        sep => c == sep,
    })
}
