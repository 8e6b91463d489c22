//! Quasi-Dyck vectors: the partition ↔ vector codec and canonical reduction.
//!
//! A quasi-Dyck vector (QDV) of frame length `n` encodes a partition λ
//! (zero-padded to `n` parts) entrywise:
//!
//! ```text
//! v[i−1] = (i−1) − λ[n−i]        for i = 1..=n
//! ```
//!
//! inverted by `part = (n−i) − v[n−i]`, keeping positive values only. A
//! Dyck path would keep every entry ≥ 0; a QDV generalizes it by allowing
//! negatives. The same partition has one encoding per frame length; the
//! canonical ("reduced") encoding at the minimal consistent frame removes
//! that redundancy.
//!
//! # Examples
//!
//! ```
//! use qtcat::{Partition, Qdv};
//!
//! let p = Partition::new([5, 4, 4, 1]);
//! let v = Qdv::from_partition(&p, 9);
//! assert_eq!(v.entries(), &[0, 1, 2, 3, 4, 4, 2, 3, 3]);
//! assert_eq!(v.to_partition(), p);
//!
//! // Canonical encoding at the minimal frame n = max_j(λ_j + j) = 7.
//! let reduced = Qdv::reduced_from_partition(&p);
//! assert_eq!(reduced.entries(), &[0, 1, 2, 2, 0, 1, 1]);
//! assert_eq!(reduced, v.reduce());
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// A quasi-Dyck vector. Entries may be negative; encodings start with 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Qdv(Vec<i32>);

impl Qdv {
    /// Wrap a raw entry vector.
    #[inline]
    pub fn new<I>(entries: I) -> Self
    where
        I: Into<Vec<i32>>,
    {
        Self(entries.into())
    }

    /// The entries.
    #[inline]
    pub fn entries(&self) -> &[i32] {
        &self.0
    }

    /// Frame length.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every entry is 0, 1, or 2 (the domain of the flagpole
    /// classifier).
    pub fn is_ternary(&self) -> bool {
        self.0.iter().all(|&x| (0..=2).contains(&x))
    }

    /// Encode a partition at the given frame length.
    pub fn from_partition(partition: &Partition, frame: usize) -> Self {
        let parts = partition.parts();
        let mut v = Vec::with_capacity(frame);
        for i in 1..=frame {
            let value = parts.get(frame - i).copied().unwrap_or(0) as i32;
            v.push((i as i32 - 1) - value);
        }
        Self(v)
    }

    /// Decode back to a partition: `part = (n−i) − v[n−i]`, positive parts
    /// only.
    pub fn to_partition(&self) -> Partition {
        let n = self.0.len();
        let mut parts = Vec::new();
        for i in 1..=n {
            let part = (n - i) as i32 - self.0[n - i];
            if part > 0 {
                parts.push(part as u32);
            }
        }
        Partition::new(parts)
    }

    /// The minimal frame length whose encoding of `partition` is already
    /// reduced: `n = max_j(λ_j + j)`, or 1 for the empty partition.
    pub fn minimal_frame(partition: &Partition) -> usize {
        partition
            .parts()
            .iter()
            .enumerate()
            .map(|(j, &part)| part as usize + j + 1)
            .max()
            .unwrap_or(1)
    }

    /// Encode a partition at its minimal frame. Equivalent to encoding at
    /// any valid frame and then reducing.
    pub fn reduced_from_partition(partition: &Partition) -> Self {
        Self::from_partition(partition, Self::minimal_frame(partition))
    }

    /// Canonical reduction to the minimal consistent frame.
    ///
    /// First clears negatives: while any entry is negative, prepend 0 and
    /// increment the rest. Then strips: while the vector is longer than one
    /// entry, starts with 0, and dropping that 0 plus decrementing the
    /// remainder keeps everything ≥ 0, do so. The empty vector reduces to
    /// `[0]`.
    pub fn reduce(&self) -> Self {
        if self.0.is_empty() {
            return Self(vec![0]);
        }
        let mut v = self.0.clone();
        while v.iter().any(|&x| x < 0) {
            let mut grown = Vec::with_capacity(v.len() + 1);
            grown.push(0);
            grown.extend(v.iter().map(|&x| x + 1));
            v = grown;
        }
        while v.len() > 1 && v[0] == 0 {
            let stripped: Vec<i32> = v[1..].iter().map(|&x| x - 1).collect();
            if stripped.iter().all(|&x| x >= 0) {
                v = stripped;
            } else {
                break;
            }
        }
        Self(v)
    }

    /// Length of the leading run of `value`.
    pub(crate) fn leading_run(&self, value: i32) -> usize {
        self.0.iter().take_while(|&&x| x == value).count()
    }

    /// Length of the trailing run of `value`.
    pub(crate) fn trailing_run(&self, value: i32) -> usize {
        self.0.iter().rev().take_while(|&&x| x == value).count()
    }
}

impl From<Vec<i32>> for Qdv {
    fn from(entries: Vec<i32>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for Qdv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}
