//! Trajectory driver: iterate a chosen map and record statistics per step.
//!
//! The driver is total: it halts on an undefined step, on a state it has
//! already visited, or at the iteration ceiling — whichever comes first —
//! and says which in the [`Termination`] tag. Hitting the ceiling is a
//! normal outcome and guards termination against any latent defect in a
//! map implementation.

use core::fmt;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::maps::{bridge, nd1, nu1, unified, PartitionClass};
use crate::partition::Partition;
use crate::qdv::Qdv;

/// Default iteration ceiling for [`generate_sequence`].
pub const DEFAULT_SEQUENCE_CEILING: usize = 50;

/// Which map the driver iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapKind {
    /// Elementary raise.
    Nu1,
    /// Elementary lower.
    Nd1,
    /// Bridge raise on the reduced encoding.
    Nu2,
    /// Bridge lower on the `γ₁ + ℓ` frame encoding.
    Nd2,
    /// Unified raise.
    Nu,
    /// Unified lower.
    Nd,
}

impl MapKind {
    /// Apply one step of this map to a partition.
    pub fn apply(self, partition: &Partition) -> Option<Partition> {
        match self {
            Self::Nu1 => nu1(partition),
            Self::Nd1 => nd1(partition),
            Self::Nu2 => {
                let qdv = Qdv::reduced_from_partition(partition);
                bridge::nu2(&qdv).map(|v| v.to_partition())
            }
            Self::Nd2 => {
                let frame = partition.largest() as usize + partition.len();
                let qdv = Qdv::from_partition(partition, frame);
                bridge::nd2(&qdv).map(|v| v.to_partition())
            }
            Self::Nu => unified::nu(partition),
            Self::Nd => unified::nd(partition),
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nu1 => "NU₁",
            Self::Nd1 => "ND₁",
            Self::Nu2 => "NU₂",
            Self::Nd2 => "ND₂",
            Self::Nu => "NU",
            Self::Nd => "ND",
        };
        f.write_str(label)
    }
}

/// One recorded state of a trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryStep {
    /// The partition at this step.
    pub partition: Partition,
    /// Its dinv.
    pub dinv: u32,
    /// Its deficit.
    pub deficit: u32,
    /// Its chain classification.
    pub class: PartitionClass,
}

impl TrajectoryStep {
    fn of(partition: &Partition) -> Self {
        Self {
            partition: partition.clone(),
            dinv: partition.dinv(),
            deficit: partition.deficit(),
            class: PartitionClass::of(partition),
        }
    }
}

/// Why a trajectory stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// Iteration ceiling hit.
    CeilingReached,
    /// The next state was already visited.
    RepeatedState,
    /// A raise chain ended on a Final partition.
    ReachedFinal,
    /// A lower chain ended on an Initial partition.
    ReachedInitial,
    /// The map became undefined elsewhere.
    Completed,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CeilingReached => "Maximum iterations reached",
            Self::RepeatedState => "Repeated state reached",
            Self::ReachedFinal => "Reached NU₁-final object",
            Self::ReachedInitial => "Reached NU₁-initial object",
            Self::Completed => "Sequence completed",
        };
        f.write_str(label)
    }
}

/// A full recorded trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    /// The map that was iterated.
    pub map: MapKind,
    /// Every visited state, the initial partition first.
    pub steps: Vec<TrajectoryStep>,
    /// Number of applied steps (`steps.len() − 1`).
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Iterate `map` from `initial`, recording partition, dinv, deficit, and
/// class at every state.
pub fn generate_sequence(initial: &Partition, map: MapKind, ceiling: usize) -> Trajectory {
    let mut steps = vec![TrajectoryStep::of(initial)];
    let mut seen: HashSet<Partition> = HashSet::new();
    seen.insert(initial.clone());
    let mut current = initial.clone();
    let mut iterations = 0;

    let termination = loop {
        if iterations >= ceiling {
            break Termination::CeilingReached;
        }
        let Some(next) = map.apply(&current) else {
            break match (map, PartitionClass::of(&current)) {
                (MapKind::Nu1 | MapKind::Nu, PartitionClass::Final) => Termination::ReachedFinal,
                (MapKind::Nd1 | MapKind::Nd, PartitionClass::Initial) => {
                    Termination::ReachedInitial
                }
                _ => Termination::Completed,
            };
        };
        if seen.contains(&next) {
            break Termination::RepeatedState;
        }
        seen.insert(next.clone());
        steps.push(TrajectoryStep::of(&next));
        current = next;
        iterations += 1;
    };

    Trajectory {
        map,
        steps,
        iterations,
        termination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(trajectory: &Trajectory) -> Vec<Vec<u32>> {
        trajectory
            .steps
            .iter()
            .map(|s| s.partition.parts().to_vec())
            .collect()
    }

    #[test]
    fn nu_chain_from_all_ones() {
        let t = generate_sequence(
            &Partition::new([1, 1, 1]),
            MapKind::Nu,
            DEFAULT_SEQUENCE_CEILING,
        );
        assert_eq!(parts(&t), vec![vec![1, 1, 1], vec![4]]);
        assert_eq!(t.iterations, 1);
        assert_eq!(t.termination, Termination::ReachedFinal);
    }

    #[test]
    fn nd_chain_from_5441() {
        let t = generate_sequence(
            &Partition::new([5, 4, 4, 1]),
            MapKind::Nd,
            DEFAULT_SEQUENCE_CEILING,
        );
        assert_eq!(
            parts(&t),
            vec![
                vec![5, 4, 4, 1],
                vec![5, 5, 2, 1],
                vec![6, 3, 2, 1],
                vec![4, 3, 2, 1, 1],
            ]
        );
        assert_eq!(t.iterations, 3);
        assert_eq!(t.termination, Termination::ReachedInitial);

        let dinvs: Vec<u32> = t.steps.iter().map(|s| s.dinv).collect();
        assert_eq!(dinvs, vec![10, 9, 8, 7]);
        assert!(t.steps.iter().all(|s| s.deficit == 4));
    }

    #[test]
    fn ceiling_cuts_a_long_chain() {
        let t = generate_sequence(&Partition::new([5, 4, 4, 1]), MapKind::Nd, 2);
        assert_eq!(t.iterations, 2);
        assert_eq!(t.termination, Termination::CeilingReached);
        assert_eq!(t.steps.len(), 3);
    }

    #[test]
    fn nd2_standalone_terminates_completed() {
        // ⟨3,2,1⟩ at frame 6 has no ND₂ template; Regular class on a
        // bridge map reports plain completion.
        let t = generate_sequence(
            &Partition::new([3, 2, 1]),
            MapKind::Nd2,
            DEFAULT_SEQUENCE_CEILING,
        );
        assert_eq!(t.iterations, 0);
        assert_eq!(t.termination, Termination::Completed);
    }

    #[test]
    fn empty_partition_completes_immediately() {
        for map in [MapKind::Nu1, MapKind::Nd1, MapKind::Nu, MapKind::Nd] {
            let t = generate_sequence(&Partition::empty(), map, DEFAULT_SEQUENCE_CEILING);
            assert_eq!(t.iterations, 0, "{map}");
            assert_eq!(t.termination, Termination::Completed, "{map}");
        }
    }

    #[test]
    fn class_labels_recorded() {
        let t = generate_sequence(
            &Partition::new([5, 4, 4, 1]),
            MapKind::Nd,
            DEFAULT_SEQUENCE_CEILING,
        );
        assert_eq!(t.steps[0].class, PartitionClass::Regular);
        assert_eq!(t.steps[3].class, PartitionClass::Initial);
    }
}
