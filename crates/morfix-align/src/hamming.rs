// Positionwise mismatch count

/// Number of positions at which `a` and `b` differ.
///
/// Callers must pass equal-length slices; the aligners always do, so the
/// release path carries no check. Under a debug build the precondition is
/// asserted.
pub fn hamming(a: &[char], b: &[char]) -> usize {
    debug_assert_eq!(a.len(), b.len(), "hamming inputs must have equal length");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn equal_strings_score_zero() {
        assert_eq!(hamming(&chars("walk"), &chars("walk")), 0);
        assert_eq!(hamming(&[], &[]), 0);
    }

    #[test]
    fn counts_every_mismatch() {
        assert_eq!(hamming(&chars("walk"), &chars("talk")), 1);
        assert_eq!(hamming(&chars("abc"), &chars("xyz")), 3);
    }

    #[test]
    fn gaps_are_ordinary_characters() {
        assert_eq!(hamming(&chars("ab__"), &chars("__ab")), 4);
        assert_eq!(hamming(&chars("a_c"), &chars("a_d")), 1);
    }
}
