//! Partition maps: classification, the elementary NU₁/ND₁ steps, the
//! QDV-level descent and bridge templates, and the unified dispatch.
//!
//! Every map returns `Option`: `None` marks an input outside the map's
//! domain and is a terminal, non-exceptional state for the sequencing
//! drivers. Nothing in this module panics.
//!
//! | Map | Level | Domain |
//! |-----|-------|--------|
//! | [`nu1`] | partition | not Final |
//! | [`nd1`] | partition | not Initial |
//! | [`descent::descend`] | QDV | prefix-depth ≥ last entry |
//! | [`bridge::nu2`] / [`bridge::nd2`] | QDV | template match |
//! | [`unified::nu`] / [`unified::nd`] | partition | see module docs |

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::partition::Partition;

pub mod bridge;
pub mod descent;
pub mod unified;

/// Position of a partition γ (largest part γ₁, length ℓ) in the NU₁ chain.
///
/// - **Initial** — γ₁ < ℓ: ND₁ is undefined;
/// - **Final** — γ₁ > ℓ + 2: NU₁ is undefined;
/// - **Regular** — everything else, including the empty partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartitionClass {
    /// γ₁ < ℓ.
    Initial,
    /// ℓ ≤ γ₁ ≤ ℓ + 2.
    Regular,
    /// γ₁ > ℓ + 2.
    Final,
}

impl PartitionClass {
    /// Classify a partition.
    pub fn of(partition: &Partition) -> Self {
        if partition.is_empty() {
            return Self::Regular;
        }
        let largest = partition.largest();
        let len = partition.len() as u32;
        if largest < len {
            Self::Initial
        } else if largest > len + 2 {
            Self::Final
        } else {
            Self::Regular
        }
    }

    /// True for [`PartitionClass::Initial`].
    #[inline]
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Initial)
    }

    /// True for [`PartitionClass::Final`].
    #[inline]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Final)
    }
}

impl fmt::Display for PartitionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initial => "NU₁-initial",
            Self::Regular => "Regular",
            Self::Final => "NU₁-final",
        };
        f.write_str(label)
    }
}

/// The raise step NU₁: γ ↦ sort({ℓ+1} ∪ {γᵢ − 1 > 0}).
///
/// Undefined on the empty partition and on Final partitions.
pub fn nu1(partition: &Partition) -> Option<Partition> {
    if partition.is_empty() || PartitionClass::of(partition).is_final() {
        return None;
    }
    let len = partition.len() as u32;
    let mut parts = vec![len + 1];
    parts.extend(partition.parts().iter().map(|&p| p - 1).filter(|&p| p > 0));
    Some(Partition::new(parts))
}

/// The lower step ND₁: drop γ₁, increment the rest, append γ₁ − ℓ ones.
///
/// Undefined on the empty partition and on Initial partitions. Inverse of
/// [`nu1`] on the complementary domain.
pub fn nd1(partition: &Partition) -> Option<Partition> {
    if partition.is_empty() || PartitionClass::of(partition).is_initial() {
        return None;
    }
    let largest = partition.largest();
    let len = partition.len() as u32;
    let mut parts: Vec<u32> = partition.parts()[1..].iter().map(|&p| p + 1).collect();
    parts.extend(std::iter::repeat(1).take((largest - len) as usize));
    Some(Partition::new(parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_initial() {
        assert_eq!(
            PartitionClass::of(&Partition::new([2, 2, 2])),
            PartitionClass::Initial
        );
        assert_eq!(
            PartitionClass::of(&Partition::new([4, 3, 2, 1, 1])),
            PartitionClass::Initial
        );
    }

    #[test]
    fn classify_final() {
        assert_eq!(
            PartitionClass::of(&Partition::new([5, 1])),
            PartitionClass::Final
        );
        assert_eq!(
            PartitionClass::of(&Partition::new([6, 1])),
            PartitionClass::Final
        );
    }

    #[test]
    fn classify_regular() {
        assert_eq!(
            PartitionClass::of(&Partition::new([3, 2, 1])),
            PartitionClass::Regular
        );
        // Boundary: γ₁ = ℓ + 2 is still Regular.
        assert_eq!(
            PartitionClass::of(&Partition::new([4, 1])),
            PartitionClass::Regular
        );
        assert_eq!(PartitionClass::of(&Partition::empty()), PartitionClass::Regular);
    }

    #[test]
    fn class_labels() {
        assert_eq!(PartitionClass::Initial.to_string(), "NU₁-initial");
        assert_eq!(PartitionClass::Final.to_string(), "NU₁-final");
        assert_eq!(PartitionClass::Regular.to_string(), "Regular");
    }

    #[test]
    fn nu1_regular() {
        let p = Partition::new([3, 2, 1]);
        assert_eq!(nu1(&p), Some(Partition::new([4, 2, 1])));
    }

    #[test]
    fn nu1_drops_exhausted_parts() {
        // ⟨1,1,1⟩: all parts shrink to nothing, only ℓ+1 = 4 remains.
        let p = Partition::new([1, 1, 1]);
        assert_eq!(nu1(&p), Some(Partition::new([4])));
    }

    #[test]
    fn nu1_undefined_on_final_and_empty() {
        assert_eq!(nu1(&Partition::new([5, 1])), None);
        assert_eq!(nu1(&Partition::empty()), None);
    }

    #[test]
    fn nd1_regular() {
        assert_eq!(
            nd1(&Partition::new([3, 2, 1])),
            Some(Partition::new([3, 2]))
        );
        assert_eq!(
            nd1(&Partition::new([4, 2])),
            Some(Partition::new([3, 1, 1]))
        );
    }

    #[test]
    fn nd1_undefined_on_initial_and_empty() {
        assert_eq!(nd1(&Partition::new([2, 2, 2])), None);
        assert_eq!(nd1(&Partition::empty()), None);
    }

    #[test]
    fn nu1_nd1_inverse_on_small_partitions() {
        use crate::enumerate::partitions;
        for n in 1..=9 {
            for p in partitions(n) {
                if let Some(up) = nu1(&p) {
                    assert_eq!(nd1(&up), Some(p.clone()), "ND₁∘NU₁ at {p}");
                }
                if let Some(down) = nd1(&p) {
                    if let Some(back) = nu1(&down) {
                        assert_eq!(back, p, "NU₁∘ND₁ at {p}");
                    }
                }
            }
        }
    }
}
