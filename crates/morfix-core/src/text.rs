// Code-point level string helpers
//
// All length and position arithmetic in this crate family is over Unicode
// code points, never UTF-8 bytes. Algorithms work on `&[char]` slices and
// convert to `String` only at the facades.

/// Length of the run of `marker` at the start of `s`.
pub fn leading_run(s: &[char], marker: char) -> usize {
    s.iter().take_while(|&&c| c == marker).count()
}

/// Length of the run of `marker` at the end of `s`.
pub fn trailing_run(s: &[char], marker: char) -> usize {
    s.iter().rev().take_while(|&&c| c == marker).count()
}

/// Code-point reversal. Combining sequences are not kept together; the
/// prefixing path reverses and un-reverses with the same primitive, so any
/// reordering cancels out.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Remove every occurrence of `marker` from `s`.
pub fn strip_all(s: &[char], marker: char) -> String {
    s.iter().filter(|&&c| c != marker).collect()
}

/// Number of code points in `s`. Distinct from `str::len`, which counts
/// bytes; rule priorities compare code points.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Replace the first occurrence of `pattern` in `base` with `replacement`.
///
/// Returns `base` unchanged when `pattern` does not occur. An empty pattern
/// matches at position 0, so the replacement is prepended. Exactly one
/// occurrence is ever rewritten, no matter how many exist.
pub fn replace_first(base: &str, pattern: &str, replacement: &str) -> String {
    match base.find(pattern) {
        Some(at) => {
            let mut out = String::with_capacity(base.len() + replacement.len());
            out.push_str(&base[..at]);
            out.push_str(replacement);
            out.push_str(&base[at + pattern.len()..]);
            out
        }
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- run tests --

    #[test]
    fn leading_run_counts() {
        assert_eq!(leading_run(&chars("__ab"), '_'), 2);
        assert_eq!(leading_run(&chars("ab__"), '_'), 0);
        assert_eq!(leading_run(&chars("____"), '_'), 4);
        assert_eq!(leading_run(&[], '_'), 0);
    }

    #[test]
    fn trailing_run_counts() {
        assert_eq!(trailing_run(&chars("ab__"), '_'), 2);
        assert_eq!(trailing_run(&chars("__ab"), '_'), 0);
        assert_eq!(trailing_run(&chars("____"), '_'), 4);
        assert_eq!(trailing_run(&[], '_'), 0);
    }

    #[test]
    fn run_with_internal_markers() {
        // internal gaps belong to neither run
        assert_eq!(leading_run(&chars("_a_b_"), '_'), 1);
        assert_eq!(trailing_run(&chars("_a_b_"), '_'), 1);
    }

    // -- reverse tests --

    #[test]
    fn reverse_ascii() {
        assert_eq!(reverse("walk"), "klaw");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn reverse_multibyte() {
        assert_eq!(reverse("g\u{00FC}l"), "l\u{00FC}g"); // gül
        assert_eq!(reverse(&reverse("s\u{00F6}yle")), "s\u{00F6}yle");
    }

    // -- strip_all tests --

    #[test]
    fn strip_all_removes_everywhere() {
        assert_eq!(strip_all(&chars("_a_b_"), '_'), "ab");
        assert_eq!(strip_all(&chars("abc"), '_'), "abc");
        assert_eq!(strip_all(&chars("___"), '_'), "");
    }

    // -- char_count tests --

    #[test]
    fn char_count_is_code_points() {
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("\u{00E4}\u{00F6}"), 2); // äö, 4 bytes
        assert_eq!(char_count(""), 0);
    }

    // -- replace_first tests --

    #[test]
    fn replace_first_only_first() {
        assert_eq!(replace_first("banana", "an", "X"), "bXana");
        assert_eq!(replace_first("aaa", "a", "b"), "baa");
    }

    #[test]
    fn replace_first_no_match() {
        assert_eq!(replace_first("walk", "xyz", "Q"), "walk");
    }

    #[test]
    fn replace_first_empty_pattern_prepends() {
        assert_eq!(replace_first("walk", "", "un"), "unwalk");
    }

    #[test]
    fn replace_first_whole_string() {
        assert_eq!(replace_first("walk", "walk", "ran"), "ran");
    }

    #[test]
    fn replace_first_multibyte() {
        assert_eq!(replace_first("g\u{00FC}l>", "\u{00FC}l>", "\u{00FC}ller>"), "g\u{00FC}ller>");
    }
}
