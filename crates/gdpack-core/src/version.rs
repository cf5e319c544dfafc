//! Version compatibility and coalescing.
//!
//! Versions come in two shapes:
//!
//! - **semantic**: an optional leading `v` followed by dot-delimited
//!   segments, e.g. `1.8.0`, `v0.6.1`, `2.14`
//! - **keyword**: everything else, e.g. `latest` or a branch name like `main`
//!
//! Two semantic versions are compatible when their major segments match
//! textually; the coalesced result is the original text of the numerically
//! greater one. Keywords only coalesce with an identical keyword.

use std::cmp::Ordering;

/// Split a version string into its dot-delimited segments, stripping an
/// optional leading `v`. Returns `None` for keyword versions (no dot).
pub fn semver_segments(version: &str) -> Option<Vec<&str>> {
    let version = version.strip_prefix('v').unwrap_or(version);

    if !version.contains('.') {
        return None;
    }

    Some(version.split('.').collect())
}

/// Compare two segment lists numerically, segment by segment.
///
/// Segments that parse as integers are compared as integers (`14` > `3`);
/// otherwise the comparison falls back to the plain string ordering. A
/// missing segment ranks lower, so `2.3` < `2.3.1`.
fn compare_segments(left: &[&str], right: &[&str]) -> Ordering {
    for pair in left.iter().zip(right.iter()) {
        let ordering = match (pair.0.parse::<u64>(), pair.1.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => pair.0.cmp(pair.1),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}

/// Coalesce two version strings into one compatible one.
///
/// Identical strings always pass. Semantic versions coalesce as long as
/// their major segment matches, yielding whichever side is numerically
/// greater, verbatim (a `v` prefix on the winner is preserved). Keyword
/// versions never coalesce with anything but themselves.
///
/// Returns `None` when the versions are incompatible.
pub fn coalesce<'a>(left: &'a str, right: &'a str) -> Option<&'a str> {
    if left == right {
        return Some(left);
    }

    let left_segments = semver_segments(left)?;
    let right_segments = semver_segments(right)?;

    if left_segments[0] != right_segments[0] {
        return None;
    }

    match compare_segments(&left_segments, &right_segments) {
        Ordering::Less => Some(right),
        _ => Some(left),
    }
}
