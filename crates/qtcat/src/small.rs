//! The SMALL counting identity: exhaustive verification.
//!
//! For integers `(r, k)` with `r ≤ ⌊k/2⌋ − 2`, enumerate all partitions of
//! `k`, reduce each with TI₂, and keep those whose fixed point has length
//! `k + 2 − r`. The identity states that exactly `2·p(r)` of them are
//! flagpoles, `p` being the partition-counting function.
//!
//! Violating the input constraint is a [`SmallInputError`]; a violated
//! identity is a computed outcome, reported by [`SmallReport::holds`] with
//! the full witness listing either way.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enumerate::{partition_count, partitions};
use crate::flagpole::Flagpole;
use crate::partition::Partition;
use crate::qdv::Qdv;
use crate::tail::compute_ti2;

/// The input constraint was violated: `r` must be at most `⌊k/2⌋ − 2`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SMALL input: r = {r} does not satisfy r ≤ ⌊{k}/2⌋ − 2 = {max_r}")]
pub struct SmallInputError {
    /// The rejected r.
    pub r: u32,
    /// The k it was checked against.
    pub k: u32,
    /// The largest admissible r for this k (may be negative).
    pub max_r: i64,
}

/// Largest admissible `r` for a given `k`: `⌊k/2⌋ − 2`.
#[inline]
pub fn max_r(k: u32) -> i64 {
    (k / 2) as i64 - 2
}

/// One enumerated partition whose TI₂ fixed point has the target length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmallWitness {
    /// The partition μ of k.
    pub mu: Partition,
    /// Its TI₂ fixed point.
    pub vector: Qdv,
    /// Flagpole classification; `None` for the non-flagpole listing.
    pub flagpole: Option<Flagpole>,
}

/// Outcome of a SMALL verification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmallReport {
    /// Checked r.
    pub r: u32,
    /// Checked k.
    pub k: u32,
    /// Target fixed-point length `k + 2 − r`.
    pub target_length: usize,
    /// Expected flagpole count `2·p(r)`.
    pub expected: u64,
    /// Flagpole witnesses at the target length.
    pub flagpoles: Vec<SmallWitness>,
    /// Non-flagpole partitions at the target length (not counted).
    pub non_flagpoles: Vec<SmallWitness>,
}

impl SmallReport {
    /// Observed flagpole count.
    #[inline]
    pub fn actual(&self) -> u64 {
        self.flagpoles.len() as u64
    }

    /// True iff the identity holds.
    #[inline]
    pub fn holds(&self) -> bool {
        self.actual() == self.expected
    }
}

/// Verify SMALL(r, k) by exhaustive enumeration.
///
/// # Errors
///
/// [`SmallInputError`] when `r > ⌊k/2⌋ − 2`; a failed identity is not an
/// error — inspect [`SmallReport::holds`].
pub fn verify_small(r: u32, k: u32) -> Result<SmallReport, SmallInputError> {
    let max = max_r(k);
    if i64::from(r) > max {
        return Err(SmallInputError { r, k, max_r: max });
    }

    let target_length = (k + 2 - r) as usize;
    let mut flagpoles = Vec::new();
    let mut non_flagpoles = Vec::new();

    for mu in partitions(k) {
        let reduction = compute_ti2(&mu);
        if reduction.vector.len() != target_length {
            continue;
        }
        let flagpole = reduction.flagpole();
        let witness = SmallWitness {
            mu,
            vector: reduction.vector,
            flagpole,
        };
        if witness.flagpole.is_some() {
            flagpoles.push(witness);
        } else {
            non_flagpoles.push(witness);
        }
    }

    Ok(SmallReport {
        r,
        k,
        target_length,
        expected: 2 * partition_count(r),
        flagpoles,
        non_flagpoles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_r() {
        let err = verify_small(3, 8).unwrap_err();
        assert_eq!(err.max_r, 2);
        assert!(err.to_string().contains("r = 3"));
    }

    #[test]
    fn max_r_can_be_negative() {
        assert_eq!(max_r(2), -1);
        assert!(verify_small(0, 2).is_err());
    }

    #[test]
    fn small_1_6_holds() {
        let report = verify_small(1, 6).unwrap();
        assert_eq!(report.target_length, 7);
        assert_eq!(report.expected, 2);
        assert_eq!(report.actual(), 2);
        assert!(report.holds());
        assert_eq!(report.non_flagpoles.len(), 2);
    }

    #[test]
    fn small_2_8_witnesses() {
        let report = verify_small(2, 8).unwrap();
        assert!(report.holds());
        assert_eq!(report.expected, 4);

        let witnesses: Vec<(Vec<u32>, Option<Flagpole>)> = report
            .flagpoles
            .iter()
            .map(|w| (w.mu.parts().to_vec(), w.flagpole))
            .collect();
        assert_eq!(
            witnesses,
            vec![
                (vec![4, 2, 1, 1], Some(Flagpole::Type2)),
                (vec![4, 1, 1, 1, 1], Some(Flagpole::Type1)),
                (vec![2, 2, 2, 1, 1], Some(Flagpole::Type2)),
                (vec![2, 2, 1, 1, 1, 1], Some(Flagpole::Type1)),
            ]
        );
        assert_eq!(report.non_flagpoles.len(), 4);
    }
}
