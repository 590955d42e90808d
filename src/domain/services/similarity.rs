//! Typo suggestions for user-supplied names (regions, config keys, env values)

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Closest candidate within `max_distance` edits, compared case-insensitively.
///
/// Exact (case-insensitive) matches count as distance 0 and are returned, so a
/// caller can use this to point out capitalization mistakes too.
pub fn closest_match<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let dist = levenshtein(&input, &candidate.to_lowercase());
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    match best {
        Some((candidate, dist)) if dist <= max_distance => Some(candidate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("India", "India"), 0);
    }

    #[test]
    fn test_levenshtein_one_char_diff() {
        assert_eq!(levenshtein("test", "tast"), 1);
        assert_eq!(levenshtein("test", "tests"), 1);
        assert_eq!(levenshtein("tests", "test"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn test_closest_match_transposition() {
        assert_eq!(closest_match("Indai", ["India"], 2), Some("India"));
    }

    #[test]
    fn test_closest_match_is_case_insensitive() {
        assert_eq!(closest_match("india", ["India", "Kenya"], 2), Some("India"));
    }

    #[test]
    fn test_closest_match_rejects_distant_values() {
        assert_eq!(closest_match("Atlantis", ["India"], 2), None);
    }

    #[test]
    fn test_closest_match_no_candidates() {
        assert_eq!(closest_match("India", std::iter::empty(), 2), None);
    }
}
