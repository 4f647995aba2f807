// 🧹 Normalizer - strips masks and punctuation
//
// "12.345.678/0001-95" → "12345678000195"
// " ab.12-c!34 /Zz "   → "AB12C34ZZ"
//
// Uppercases ASCII letters and keeps only 0-9 / A-Z. Accented and other
// non-ASCII characters are dropped, not transliterated. No length check here.

/// Normalize a raw identifier string.
///
/// Accepts `&str` or `Option<&str>`; an absent value normalizes to `""`.
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> String {
    let Some(raw) = raw.into() else {
        return String::new();
    };

    let mut clean = String::with_capacity(14);
    for c in raw.chars() {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_digit() || upper.is_ascii_uppercase() {
            clean.push(upper);
        }
    }
    clean
}
