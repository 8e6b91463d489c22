//! Flagpole classification of ternary fixed-point vectors.
//!
//! A tail reduction ends in a {0,1,2}-valued vector; three rigid shapes are
//! recognized:
//!
//! - **Type 1** — `0 1^m 0 X 2^n` with `n ≥ 1`, `X` not ending in 2, and
//!   `m ≤ n`;
//! - **Type 2** — `0^n Y 2 1^m` with `n ≥ 2`, `0 < m < n`, and `Y` not
//!   starting with 0;
//! - **Type 3** — `0^n 1^m` with `n ≥ 2` and `m ∈ {n−1, n}`, plus the
//!   single-entry vector `[0]`.
//!
//! Classification tries the types in order; in practice at most one
//! matches. Anything else — including any non-ternary vector — is
//! non-flagpole, the `None` of [`Flagpole::classify`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::qdv::Qdv;

/// Structural family of a tail-reduction fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Flagpole {
    /// `0 1^m 0 X 2^n`, m ≤ n.
    Type1,
    /// `0^n Y 2 1^m`, 0 < m < n.
    Type2,
    /// `0^n 1^m`, m ∈ {n−1, n}.
    Type3,
}

impl Flagpole {
    /// Classify a vector, trying Type 1, then 2, then 3.
    pub fn classify(v: &Qdv) -> Option<Self> {
        if is_type1(v) {
            Some(Self::Type1)
        } else if is_type2(v) {
            Some(Self::Type2)
        } else if is_type3(v) {
            Some(Self::Type3)
        } else {
            None
        }
    }
}

impl fmt::Display for Flagpole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Type1 => "Type 1",
            Self::Type2 => "Type 2",
            Self::Type3 => "Type 3",
        };
        f.write_str(label)
    }
}

/// True if the vector is a flagpole of any type.
pub fn is_flagpole(v: &Qdv) -> bool {
    Flagpole::classify(v).is_some()
}

/// Type 1: `0 1^m 0 X 2^n` with n ≥ 1, X not ending in 2, m ≤ n.
pub fn is_type1(v: &Qdv) -> bool {
    let entries = v.entries();
    if entries.is_empty() || !v.is_ternary() || entries[0] != 0 {
        return false;
    }

    let mut i = 1;
    while i < entries.len() && entries[i] == 1 {
        i += 1;
    }
    let m = i - 1;

    if i >= entries.len() || entries[i] != 0 {
        return false;
    }
    i += 1;

    let mut n = 0;
    let mut j = entries.len();
    while j > i && entries[j - 1] == 2 {
        n += 1;
        j -= 1;
    }
    if n < 1 {
        return false;
    }

    let middle = &entries[i..entries.len() - n];
    if middle.last() == Some(&2) {
        return false;
    }
    m <= n
}

/// Type 2: `0^n Y 2 1^m` with n ≥ 2, 0 < m < n, Y not starting with 0.
pub fn is_type2(v: &Qdv) -> bool {
    let entries = v.entries();
    if entries.is_empty() || !v.is_ternary() {
        return false;
    }

    let n = v.leading_run(0);
    if n < 2 {
        return false;
    }
    let m = v.trailing_run(1);
    if !(0 < m && m < n) {
        return false;
    }

    let pivot = entries.len() - m - 1;
    if entries[pivot] != 2 {
        return false;
    }
    let interior = &entries[n..pivot];
    if interior.first() == Some(&0) {
        return false;
    }
    true
}

/// Type 3: `[0]`, or `0^n 1^m` with n ≥ 2 and m ∈ {n−1, n}.
pub fn is_type3(v: &Qdv) -> bool {
    let entries = v.entries();
    if entries == [0] {
        return true;
    }
    if entries.is_empty() || !v.is_ternary() {
        return false;
    }

    let n = v.leading_run(0);
    if n < 2 {
        return false;
    }
    let rest = &entries[n..];
    if rest.iter().any(|&x| x != 1) {
        return false;
    }
    let m = rest.len();
    m == n || m + 1 == n
}
