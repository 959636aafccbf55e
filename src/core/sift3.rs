//! SIFT3 approximate string distance.
//!
//! A single left-to-right scan that realigns the two strings within a small
//! look-ahead window instead of filling a full edit-distance table. Cheap and
//! good enough for short strings such as domain names. It is case-sensitive
//! and not a true metric.

use crate::domain::model::ClosestMatch;

/// Look-ahead window used to realign the strings after a mismatch.
pub const MAX_OFFSET: usize = 5;

/// Approximate distance between `a` and `b`; `0.0` means identical.
///
/// Never exceeds the sum of the character counts of the inputs.
pub fn distance(a: &str, b: &str) -> f64 {
    if a == b {
        return 0.0;
    }

    let s1: Vec<char> = a.chars().collect();
    let s2: Vec<char> = b.chars().collect();

    if s1.is_empty() || s2.is_empty() {
        return s1.len().max(s2.len()) as f64;
    }

    let mut c = 0;
    let mut offset1 = 0;
    let mut offset2 = 0;
    let mut lcs = 0usize;

    while c + offset1 < s1.len() && c + offset2 < s2.len() {
        if s1[c + offset1] == s2[c + offset2] {
            lcs += 1;
        } else {
            offset1 = 0;
            offset2 = 0;
            // c < len of both here, so s1[c] and s2[c] are in bounds.
            for i in 0..MAX_OFFSET {
                if c + i >= s1.len() && c + i >= s2.len() {
                    break;
                }
                if c + i < s1.len() && s1[c + i] == s2[c] {
                    offset1 = i;
                    break;
                }
                if c + i < s2.len() && s1[c] == s2[c + i] {
                    offset2 = i;
                    break;
                }
            }
        }
        c += 1;
    }

    (s1.len() + s2.len()) as f64 / 2.0 - lcs as f64
}

/// Finds the candidate closest to `target`.
///
/// Ties keep the earliest candidate. An empty list yields
/// [`ClosestMatch::none`].
pub fn closest_match<'a, S: AsRef<str>>(target: &str, candidates: &'a [S]) -> ClosestMatch<'a> {
    let mut best = ClosestMatch::none();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = distance(target, candidate);
        if score < best.distance {
            best = ClosestMatch {
                matched: Some(candidate),
                distance: score,
            };
        }
    }

    best
}
