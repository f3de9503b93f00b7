//! Approximate string scoring.
//!
//! Implements the 0-100 partial similarity score the ranker runs on: the
//! best score any same-length window of the longer string achieves against
//! the shorter one, where a window's score is the matching-characters
//! ratio `2 * matches / (len_a + len_b)` of the best alignment. A query
//! that appears verbatim inside the text scores 100; misspellings score
//! proportionally lower.
//!
//! Pure functions over in-memory data; scanning every window keeps this
//! O(text_len * query_len^2) per record, which is the documented
//! scalability limit of the whole search path.

/// Scores how well `pattern` matches somewhere inside `text`, 0-100.
///
/// Comparison is exact on characters; callers lowercase both sides first.
/// An empty pattern trivially matches anything and scores 100.
///
/// # Examples
///
/// ```
/// use jot::search::partial_ratio;
///
/// assert_eq!(partial_ratio("oven", "fix the oven today"), 100);
/// assert_eq!(partial_ratio("ovne", "oven"), 75);
/// assert_eq!(partial_ratio("xyz", "oven"), 0);
/// ```
pub fn partial_ratio(pattern: &str, text: &str) -> u8 {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();

    let (shorter, longer) = if p.len() <= t.len() { (&p, &t) } else { (&t, &p) };
    if shorter.is_empty() {
        return 100;
    }

    // A verbatim substring scores 100; skip the window scan for the
    // common exact-match case
    if contains_window(longer, shorter) {
        return 100;
    }

    let mut best = 0.0f64;
    for start in 0..=(longer.len() - shorter.len()) {
        let window = &longer[start..start + shorter.len()];
        let score = similarity(shorter, window);
        if score > best {
            best = score;
        }
    }

    (best * 100.0).round() as u8
}

/// Matching-characters ratio between two strings: `2 * M / (|a| + |b|)`
/// where `M` counts the characters the best alignment pairs up.
fn similarity(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matches = matching_chars(a, b);
    (2.0 * matches as f64) / ((a.len() + b.len()) as f64)
}

/// Number of characters matched by the best alignment of `a` and `b`
/// (the length of their longest common subsequence).
fn matching_chars(a: &[char], b: &[char]) -> usize {
    // Two-row DP keeps memory at O(|b|)
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn contains_window(haystack: &[char], needle: &[char]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_substring_scores_100() {
        assert_eq!(partial_ratio("oven", "fix oven"), 100);
        assert_eq!(partial_ratio("oven", "oven"), 100);
        assert_eq!(partial_ratio("milk", "<p>milk</p>"), 100);
    }

    #[test]
    fn empty_pattern_scores_100() {
        assert_eq!(partial_ratio("", "anything"), 100);
        assert_eq!(partial_ratio("", ""), 100);
    }

    #[test]
    fn disjoint_strings_score_0() {
        assert_eq!(partial_ratio("xyz", "oven"), 0);
    }

    #[test]
    fn transposition_scores_proportionally() {
        // best window "oven": 3 of 4 characters align -> 2*3/8
        assert_eq!(partial_ratio("ovne", "oven"), 75);
        assert_eq!(partial_ratio("ovne", "fix the oven now"), 75);
    }

    #[test]
    fn single_char_dropped_still_scores_high() {
        // "ovn" vs window "ove": matches "ov" -> 2*2/6 = 67;
        // window "ven" matches "vn" -> also 67
        assert_eq!(partial_ratio("ovn", "oven"), 67);
    }

    #[test]
    fn longer_pattern_than_text_swaps_sides() {
        assert_eq!(partial_ratio("fix the oven", "oven"), 100);
    }

    #[test]
    fn scoring_is_symmetric_in_window_choice() {
        let a = partial_ratio("preheat", "step one: perheat the oven to 350");
        assert!(a >= 70, "near-miss should stay above noise, got {a}");
        assert!(a < 100, "misspelling must not score as exact, got {a}");
    }

    #[test]
    fn multibyte_characters_do_not_panic() {
        assert_eq!(partial_ratio("café", "visit the café"), 100);
        let score = partial_ratio("日本", "日本語のノート");
        assert_eq!(score, 100);
    }

    #[test]
    fn matching_chars_is_lcs_length() {
        let a: Vec<char> = "ovne".chars().collect();
        let b: Vec<char> = "oven".chars().collect();
        assert_eq!(matching_chars(&a, &b), 3);

        let a: Vec<char> = "abc".chars().collect();
        let b: Vec<char> = "xyz".chars().collect();
        assert_eq!(matching_chars(&a, &b), 0);
    }
}
