/// Punctuation accepted by the field whitelist, in addition to alphanumerics
/// and whitespace. The policy lives here; callers treat the predicate as
/// opaque.
pub const ALLOWED_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', '(', ')', '\'', '"', '-'];

/// A field value is clean when every character is alphanumeric, whitespace,
/// or one of the allowed punctuation marks.
pub fn field_is_clean(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c))
}

/// Shared message for any field that fails the whitelist check.
pub fn invalid_characters_message() -> String {
    let allowed: String = ALLOWED_PUNCTUATION.iter().collect();
    format!("Contains invalid characters (letters, digits, spaces and {allowed} are allowed)")
}
