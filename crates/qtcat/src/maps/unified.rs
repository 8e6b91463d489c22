//! Unified NU/ND dispatch: elementary step where one exists, bridge
//! otherwise.
//!
//! [`nd`] gates every vector-level candidate on exact deficit preservation;
//! a structurally valid descent that changes the deficit is silently
//! rejected, which is the engine's primary validity rule.

use crate::maps::{bridge, descent, nd1, nu1, PartitionClass};
use crate::partition::Partition;
use crate::qdv::Qdv;

/// The unified raise step.
///
/// Final partitions (no NU₁) go through the reduced encoding and NU₂; the
/// result, if the template matches, is decoded back. Everything else takes
/// NU₁ directly.
pub fn nu(partition: &Partition) -> Option<Partition> {
    if PartitionClass::of(partition).is_final() {
        let qdv = Qdv::reduced_from_partition(partition);
        let bridged = bridge::nu2(&qdv)?;
        Some(bridged.to_partition())
    } else {
        nu1(partition)
    }
}

/// The unified lower step.
///
/// Initial partitions (no ND₁) are encoded at frame `γ₁ + ℓ` and offered to
/// the vector descent, then to ND₂; either candidate is accepted only if
/// its decoded partition has the same deficit as the input. Everything else
/// takes ND₁ directly.
pub fn nd(partition: &Partition) -> Option<Partition> {
    if PartitionClass::of(partition).is_initial() {
        let frame = partition.largest() as usize + partition.len();
        let qdv = Qdv::from_partition(partition, frame);
        let deficit = partition.deficit();

        if let Some(next) = descent::descend(&qdv) {
            let candidate = next.to_partition();
            if candidate.deficit() == deficit {
                return Some(candidate);
            }
        }
        if let Some(next) = bridge::nd2(&qdv) {
            let candidate = next.to_partition();
            if candidate.deficit() == deficit {
                return Some(candidate);
            }
        }
        None
    } else {
        nd1(partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nu_regular_takes_nu1() {
        assert_eq!(
            nu(&Partition::new([1, 1, 1])),
            Some(Partition::new([4]))
        );
        assert_eq!(
            nu(&Partition::new([3, 2, 1])),
            Some(Partition::new([4, 2, 1]))
        );
    }

    #[test]
    fn nu_final_without_template_is_undefined() {
        // ⟨6,1⟩ reduces to [0,1,2,3,4,4,0]: the block climbs past 2, so
        // neither NU₂ rule applies.
        assert_eq!(nu(&Partition::new([6, 1])), None);
        assert_eq!(nu(&Partition::new([5, 1])), None);
    }

    #[test]
    fn nd_regular_takes_nd1() {
        assert_eq!(
            nd(&Partition::new([5, 4, 4, 1])),
            Some(Partition::new([5, 5, 2, 1]))
        );
        assert_eq!(
            nd(&Partition::new([6, 3, 2, 1])),
            Some(Partition::new([4, 3, 2, 1, 1]))
        );
    }

    #[test]
    fn nd_initial_without_accepted_candidate_is_undefined() {
        assert_eq!(nd(&Partition::new([2, 2, 2])), None);
        assert_eq!(nd(&Partition::new([1, 1, 1])), None);
        assert_eq!(nd(&Partition::new([3, 3, 3, 2])), None);
        assert_eq!(nd(&Partition::new([4, 3, 2, 1, 1])), None);
    }

    #[test]
    fn nd_empty_is_undefined() {
        assert_eq!(nd(&Partition::empty()), None);
        assert_eq!(nu(&Partition::empty()), None);
    }

    #[test]
    fn nd_preserves_deficit_when_defined() {
        use crate::enumerate::partitions;
        for n in 1..=9 {
            for p in partitions(n) {
                if let Some(next) = nd(&p) {
                    assert_eq!(next.deficit(), p.deficit(), "nd at {p}");
                }
            }
        }
    }
}
