//! Soft wrapping of logical lines into display segments.
//!
//! Wrapping is a hard break every `width` chars. It never looks at word
//! boundaries, so concatenating the segments always reproduces the line.

/// Split a line into display segments of at most `width` chars.
///
/// Returns the whole line as a single segment when wrapping is disabled or
/// the line already fits. Never returns an empty vector: an empty line yields
/// one empty segment. A `width` of 0 is treated as 1.
pub fn wrap_line(line: &str, width: usize, enabled: bool) -> Vec<&str> {
    let width = width.max(1);
    if !enabled {
        return vec![line];
    }

    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars_in_segment = 0;

    for (byte_idx, _) in line.char_indices() {
        if chars_in_segment == width {
            segments.push(&line[start..byte_idx]);
            start = byte_idx;
            chars_in_segment = 0;
        }
        chars_in_segment += 1;
    }
    segments.push(&line[start..]);

    segments
}

/// Number of segments `wrap_line` produces for a line of `len` chars
pub fn segment_count(len: usize, width: usize, enabled: bool) -> usize {
    let width = width.max(1);
    if !enabled || len <= width {
        1
    } else {
        len.div_ceil(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_wrap_needed() {
        assert_eq!(wrap_line("Short line", 80, true), vec!["Short line"]);
    }

    #[test]
    fn test_exact_width_is_single_segment() {
        assert_eq!(wrap_line("abc", 3, true), vec!["abc"]);
    }

    #[test]
    fn test_hard_break_every_width_chars() {
        assert_eq!(wrap_line("abcdef", 3, true), vec!["abc", "def"]);
        assert_eq!(wrap_line("abcdefg", 3, true), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_breaks_inside_words() {
        let segments = wrap_line("hello world", 4, true);
        assert_eq!(segments, vec!["hell", "o wo", "rld"]);
    }

    #[test]
    fn test_disabled_returns_whole_line() {
        assert_eq!(wrap_line("abcdef", 3, false), vec!["abcdef"]);
    }

    #[test]
    fn test_empty_line_yields_one_segment() {
        assert_eq!(wrap_line("", 10, true), vec![""]);
        assert_eq!(wrap_line("", 10, false), vec![""]);
    }

    #[test]
    fn test_zero_width_treated_as_one() {
        assert_eq!(wrap_line("ab", 0, true), vec!["a", "b"]);
        assert_eq!(segment_count(2, 0, true), 2);
    }

    #[test]
    fn test_unicode_splits_on_char_boundaries() {
        let segments = wrap_line("Привет мир", 4, true);
        assert_eq!(segments, vec!["Прив", "ет м", "ир"]);
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count(0, 3, true), 1);
        assert_eq!(segment_count(3, 3, true), 1);
        assert_eq!(segment_count(4, 3, true), 2);
        assert_eq!(segment_count(6, 3, true), 2);
        assert_eq!(segment_count(100, 3, false), 1);
    }

    proptest! {
        #[test]
        fn segments_concatenate_to_line(line in "\\PC{0,40}", width in 1usize..12) {
            let segments = wrap_line(&line, width, true);
            prop_assert!(!segments.is_empty());
            prop_assert_eq!(segments.concat(), line);
        }

        #[test]
        fn segments_respect_width(line in "\\PC{0,40}", width in 1usize..12) {
            for segment in wrap_line(&line, width, true) {
                prop_assert!(segment.chars().count() <= width);
            }
        }

        #[test]
        fn segment_count_matches_wrap(line in "\\PC{0,40}", width in 1usize..12, enabled: bool) {
            let len = line.chars().count();
            prop_assert_eq!(
                segment_count(len, width, enabled),
                wrap_line(&line, width, enabled).len()
            );
        }
    }
}
