//! Substring-tolerant string similarity
//!
//! Scores are normalized Indel similarities in `0..=100`, computed on
//! lowercased characters.

use std::collections::HashMap;

/// Similarity of two whole strings
pub fn ratio(a: &str, b: &str) -> u8 {
    let a = lower_chars(a);
    let b = lower_chars(b);
    to_score(indel_similarity(&a, &b))
}

/// Best similarity of the shorter string against any same-length window of
/// the longer one
///
/// Windows that run off either end of the longer string are also tried, so
/// a term that overlaps the start or end of a cell still scores.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a = lower_chars(a);
    let b = lower_chars(b);
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    to_score(best_window(&short, &long))
}

fn best_window(short: &[char], long: &[char]) -> f64 {
    let m = short.len();
    let n = long.len();
    let mut best = 0.0_f64;

    let mut wanted: HashMap<char, usize> = HashMap::new();
    for &c in short {
        *wanted.entry(c).or_default() += 1;
    }

    // Leading partial windows long[..end]
    for end in 1..m.min(n + 1) {
        best = best.max(indel_similarity(short, &long[..end]));
    }

    // Full windows, pruned by the shared-character upper bound
    let mut window: HashMap<char, usize> = HashMap::new();
    let mut common = 0usize;
    for (i, &c) in long.iter().enumerate() {
        push_char(&wanted, &mut window, &mut common, c);
        if i >= m {
            pop_char(&wanted, &mut window, &mut common, long[i - m]);
        }
        if i + 1 >= m {
            let bound = 100.0 * common as f64 / m as f64;
            if bound > best {
                let start = i + 1 - m;
                best = best.max(indel_similarity(short, &long[start..=i]));
                if best >= 100.0 {
                    return best;
                }
            }
        }
    }

    // Trailing partial windows long[start..]
    for start in (n + 1).saturating_sub(m).max(1)..n {
        best = best.max(indel_similarity(short, &long[start..]));
    }

    best
}

fn push_char(wanted: &HashMap<char, usize>, window: &mut HashMap<char, usize>, common: &mut usize, c: char) {
    let seen = window.entry(c).or_default();
    if *seen < wanted.get(&c).copied().unwrap_or(0) {
        *common += 1;
    }
    *seen += 1;
}

fn pop_char(wanted: &HashMap<char, usize>, window: &mut HashMap<char, usize>, common: &mut usize, c: char) {
    if let Some(seen) = window.get_mut(&c) {
        *seen -= 1;
        if *seen < wanted.get(&c).copied().unwrap_or(0) {
            *common -= 1;
        }
    }
}

/// `200 * LCS / (|a| + |b|)`
fn indel_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
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

fn lower_chars(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

fn to_score(similarity: f64) -> u8 {
    similarity.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_basics() {
        assert_eq!(ratio("forest", "forest"), 100);
        assert_eq!(ratio("Forest", "FOREST"), 100);
        assert_eq!(ratio("abc", "xyz"), 0);
        // LCS("this is a test", "this is a test!") = 14 → 200*14/29
        assert_eq!(ratio("this is a test", "this is a test!"), 97);
    }

    #[test]
    fn test_partial_ratio_substring_is_perfect() {
        assert_eq!(partial_ratio("habitat", "animal habitats and homes"), 100);
        assert_eq!(partial_ratio("animal habitats and homes", "habitat"), 100);
    }

    #[test]
    fn test_partial_ratio_near_miss() {
        // "enviroment" vs window "environmen": LCS 9 of 10+10
        let score = partial_ratio("enviroment", "our environment today");
        assert!(score >= 90 && score < 100, "score was {score}");
    }

    #[test]
    fn test_partial_ratio_unrelated_is_low() {
        assert!(partial_ratio("happy", "photosynthesis, chlorophyll") <= 60);
    }

    #[test]
    fn test_partial_ratio_empty_inputs() {
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("", "forest"), 0);
        assert_eq!(partial_ratio("forest", ""), 0);
    }

    #[test]
    fn test_partial_ratio_overlapping_edge() {
        // "stem" only partially overlaps the end of "ecosyst"
        let score = partial_ratio("stem", "ecosyst");
        // best trailing window "st": 200*2/6
        assert!(score >= 67, "score was {score}");
    }

    #[test]
    fn test_lcs_len() {
        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "ace".chars().collect();
        assert_eq!(lcs_len(&a, &b), 3);
    }
}
