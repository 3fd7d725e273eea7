//! Wildcard pattern matching for LIKE expressions.
//!
//! `%` matches any sequence of zero or more characters; every other
//! character matches itself. Matching is **case-sensitive**, operates on
//! Unicode scalar values, and is **unanchored**: the pattern succeeds if it
//! matches any substring of the value, so `like("xFordy", "Ford")` is true.
//! Use leading/trailing text around `%` to constrain the match.

use alloc::vec::Vec;

/// LIKE pattern matching.
///
/// ```
/// use tabula_core::pattern_match::like;
/// assert!(like("Apple", "A%"));
/// assert!(!like("Banana", "A%"));
/// assert!(like("Ford", "%ord%"));
/// ```
pub fn like(value: &str, pattern: &str) -> bool {
    let v: Vec<char> = value.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    (0..=v.len()).any(|start| like_from(&v, &p, start, 0))
}

fn like_from(v: &[char], p: &[char], vi: usize, pi: usize) -> bool {
    if pi == p.len() {
        // Unanchored tail: trailing value characters are allowed.
        return true;
    }
    match p[pi] {
        '%' => (vi..=v.len()).any(|skip| like_from(v, p, skip, pi + 1)),
        ch => vi < v.len() && v[vi] == ch && like_from(v, p, vi + 1, pi + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_prefix() {
        assert!(like("Apple", "A%"));
        assert!(!like("Banana", "A%"));
        assert!(!like("apple", "A%"));
    }

    #[test]
    fn like_infix() {
        assert!(like("Ford", "%ord%"));
        assert!(like("Accord", "%ord%"));
        assert!(!like("Focus", "%ord%"));
    }

    #[test]
    fn like_unanchored_literal() {
        // No wildcard: matches anywhere in the value.
        assert!(like("Ford", "Ford"));
        assert!(like("xFordy", "Ford"));
        assert!(!like("Fjord", "Ford"));
    }

    #[test]
    fn like_underscore_is_literal() {
        assert!(like("snake_case", "snake_case"));
        assert!(!like("snakeXcase", "snake_case"));
    }

    #[test]
    fn like_percent_runs() {
        assert!(like("hello", "h%o"));
        assert!(like("hello", "%"));
        assert!(like("hello", "h%l%o"));
        assert!(!like("hello", "h%z"));
    }

    #[test]
    fn like_empty() {
        assert!(like("", ""));
        assert!(like("", "%"));
        assert!(like("anything", ""));
        assert!(!like("", "a"));
    }
}
