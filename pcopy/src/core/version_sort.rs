// src/core/version_sort.rs
//! Version-aware ordering of file names, compatible with `sort -V`.
//!
//! Names are split into alternating runs of non-digits and digits. Digit runs
//! compare by numeric value and non-digit runs compare character by character
//! with a few adjustments: `~` sorts before everything (even the end of the
//! name), letters sort before other punctuation, and a trailing file suffix
//! such as `.tar.gz` is only consulted when the rest of the name ties.

use std::cmp::Ordering;

/// Compares two file names in version order.
///
/// When the version comparison considers the names equal (`a01` and `a1`),
/// plain byte order decides, so the result is a total order.
#[inline]
#[must_use]
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    file_version_cmp(a.as_bytes(), b.as_bytes()).then_with(|| a.cmp(b))
}

fn file_version_cmp(a: &[u8], b: &[u8]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    // "." first, then "..", then other dot-names, then everything else.
    match (a.first() == Some(&b'.'), b.first() == Some(&b'.')) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (true, true) => {
            let (rank_a, rank_b) = (dot_rank(a), dot_rank(b));
            if rank_a < 2 || rank_b < 2 {
                return rank_a.cmp(&rank_b);
            }
        }
        (false, false) => {}
    }

    let prefix_a = a.get(..suffix_start(a)).unwrap_or(a);
    let prefix_b = b.get(..suffix_start(b)).unwrap_or(b);
    let without_suffixes = compare_runs(prefix_a, prefix_b);

    let has_suffix = prefix_a.len() != a.len() || prefix_b.len() != b.len();
    if without_suffixes.is_eq() && has_suffix {
        compare_runs(a, b)
    } else {
        without_suffixes
    }
}

const fn dot_rank(name: &[u8]) -> u8 {
    match name {
        b"." => 0,
        b".." => 1,
        _ => 2,
    }
}

const fn is_suffix_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'~'
}

const fn is_suffix_body(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'~'
}

/// Index where the longest trailing `(\.[A-Za-z~][A-Za-z0-9~]*)*` begins.
fn suffix_start(name: &[u8]) -> usize {
    let mut prefix_len = 0;
    let mut i = 0;

    while i < name.len() {
        i = i.saturating_add(1);
        prefix_len = i;
        while name.get(i) == Some(&b'.')
            && name.get(i.saturating_add(1)).copied().is_some_and(is_suffix_start)
        {
            i = i.saturating_add(2);
            while name.get(i).copied().is_some_and(is_suffix_body) {
                i = i.saturating_add(1);
            }
        }
    }

    prefix_len
}

/// Weight of the byte at `pos` inside a non-digit run.
fn weight(name: &[u8], pos: usize) -> i32 {
    match name.get(pos).copied() {
        None => -1,
        Some(b'~') => -2,
        Some(c) if c.is_ascii_digit() => 0,
        Some(c) if c.is_ascii_alphabetic() => i32::from(c),
        Some(c) => i32::from(c) + 256,
    }
}

fn non_digit_at(name: &[u8], pos: usize) -> bool {
    name.get(pos).is_some_and(|c| !c.is_ascii_digit())
}

fn digit_at(name: &[u8], pos: usize) -> Option<u8> {
    name.get(pos).copied().filter(u8::is_ascii_digit)
}

fn compare_runs(a: &[u8], b: &[u8]) -> Ordering {
    let (mut i, mut j) = (0_usize, 0_usize);

    while i < a.len() || j < b.len() {
        while non_digit_at(a, i) || non_digit_at(b, j) {
            let ordering = weight(a, i).cmp(&weight(b, j));
            if ordering.is_ne() {
                return ordering;
            }
            i = i.saturating_add(1);
            j = j.saturating_add(1);
        }

        while a.get(i) == Some(&b'0') {
            i = i.saturating_add(1);
        }
        while b.get(j) == Some(&b'0') {
            j = j.saturating_add(1);
        }

        // Equal-length digit runs are decided by their first differing digit.
        let mut first_diff = Ordering::Equal;
        while let (Some(da), Some(db)) = (digit_at(a, i), digit_at(b, j)) {
            if first_diff.is_eq() {
                first_diff = da.cmp(&db);
            }
            i = i.saturating_add(1);
            j = j.saturating_add(1);
        }

        if digit_at(a, i).is_some() {
            return Ordering::Greater;
        }
        if digit_at(b, j).is_some() {
            return Ordering::Less;
        }
        if first_diff.is_ne() {
            return first_diff;
        }
    }

    Ordering::Equal
}
