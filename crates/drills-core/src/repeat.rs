//! String repetition.

/// Repeat count used when the caller does not supply one.
pub const DEFAULT_REPEAT_COUNT: usize = 5;

/// Concatenate `text` with itself `count` times.
///
/// ```
/// assert_eq!(drills_core::repeat("a", 5), "aaaaa");
/// ```
pub fn repeat(text: &str, count: usize) -> String {
    let mut repeated = String::with_capacity(text.len().saturating_mul(count));
    for _ in 0..count {
        repeated.push_str(text);
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_matches_std() {
        assert_eq!(repeat("a", DEFAULT_REPEAT_COUNT), "a".repeat(DEFAULT_REPEAT_COUNT));
    }

    #[test]
    fn test_repeat_zero() {
        assert_eq!(repeat("abc", 0), "");
    }

    #[test]
    fn test_repeat_multibyte() {
        assert_eq!(repeat("é-", 3), "é-é-é-");
    }

    #[test]
    fn test_repeat_empty_text() {
        assert_eq!(repeat("", 10), "");
    }
}
