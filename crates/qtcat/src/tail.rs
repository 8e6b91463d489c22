//! Tail-initiator reduction: the TI seed and the TI₂ fixed point.
//!
//! The seed vector TI(μ) lists, for every part size `j = 1..=r`, a 0
//! followed by one 1 per copy of `j` in μ, with one extra leading 0. The
//! TI₂ procedure then drives the seed to a fixed point: greedily apply the
//! vector descent and the ND₂ bridge — each accepted only if it leaves the
//! deficit of the seed's partition untouched — and, when neither applies,
//! one canonical reduction; repeat until a full pass changes nothing.
//!
//! Every accepted step lands in the log, so a trajectory can be replayed
//! and audited step by step.
//!
//! # Examples
//!
//! ```
//! use qtcat::{compute_ti2, Flagpole, Partition};
//!
//! let mu = Partition::new([3, 2, 2, 1]);
//! let reduction = compute_ti2(&mu);
//! assert_eq!(reduction.vector.entries(), &[0, 0, 1, 1, 2, 2, 2]);
//! assert_eq!(reduction.flagpole(), Some(Flagpole::Type1));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flagpole::Flagpole;
use crate::maps::{bridge, descent};
use crate::partition::Partition;
use crate::qdv::Qdv;

/// Default step ceiling for [`compute_ti2`]. Generous: the longest observed
/// reduction for |μ| ≤ 14 takes 79 steps.
pub const DEFAULT_TI2_CEILING: usize = 10_000;

/// Which rule produced a step of the tail reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TailRule {
    /// The TI(μ) seed itself.
    Seed,
    /// Vector descent (deficit-gated).
    Descent,
    /// ND₂ bridge (deficit-gated).
    Bridge,
    /// Canonical reduction.
    Reduce,
}

/// One entry of the reduction log: the rule that fired and the vector it
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TailStep {
    /// Rule that produced this vector.
    pub rule: TailRule,
    /// The vector after the step.
    pub vector: Qdv,
}

/// Result of a tail reduction: the fixed-point vector, the full step log
/// (seed included), and whether the ceiling cut the run short.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TailReduction {
    /// The fixed-point vector (or the last vector before the ceiling).
    pub vector: Qdv,
    /// Every accepted step, starting with the seed.
    pub steps: Vec<TailStep>,
    /// True if the step ceiling was hit before reaching a fixed point.
    pub hit_ceiling: bool,
}

impl TailReduction {
    /// Flagpole classification of the fixed point.
    pub fn flagpole(&self) -> Option<Flagpole> {
        Flagpole::classify(&self.vector)
    }
}

/// The first-order tail initiator TI(μ).
pub fn tail_initiator(mu: &Partition) -> Qdv {
    if mu.is_empty() {
        return Qdv::new(vec![0]);
    }
    let mut v = vec![0];
    for j in 1..=mu.largest() {
        v.push(0);
        v.extend(std::iter::repeat(1).take(mu.multiplicity(j)));
    }
    Qdv::new(v)
}

/// Tail reduction with the default ceiling.
pub fn compute_ti2(mu: &Partition) -> TailReduction {
    compute_ti2_with_ceiling(mu, DEFAULT_TI2_CEILING)
}

/// Tail reduction with an explicit step ceiling. Hitting the ceiling is a
/// reported outcome, not an error.
pub fn compute_ti2_with_ceiling(mu: &Partition, ceiling: usize) -> TailReduction {
    let mut current = tail_initiator(mu);
    let deficit = current.to_partition().deficit();
    let mut steps = vec![TailStep {
        rule: TailRule::Seed,
        vector: current.clone(),
    }];
    let mut hit_ceiling = false;

    'outer: loop {
        let mut progressed = false;

        loop {
            if steps.len() >= ceiling {
                hit_ceiling = true;
                break 'outer;
            }
            if let Some(next) = descent::descend(&current) {
                if next.to_partition().deficit() == deficit {
                    current = next;
                    steps.push(TailStep {
                        rule: TailRule::Descent,
                        vector: current.clone(),
                    });
                    progressed = true;
                    continue;
                }
            }
            if let Some(next) = bridge::nd2(&current) {
                if next.to_partition().deficit() == deficit {
                    current = next;
                    steps.push(TailStep {
                        rule: TailRule::Bridge,
                        vector: current.clone(),
                    });
                    progressed = true;
                    continue;
                }
            }
            break;
        }

        let reduced = current.reduce();
        if reduced != current {
            current = reduced;
            steps.push(TailStep {
                rule: TailRule::Reduce,
                vector: current.clone(),
            });
            progressed = true;
        }

        if !progressed {
            break;
        }
    }

    TailReduction {
        vector: current,
        steps,
        hit_ceiling,
    }
}

/// Tail reduction kept only when the fixed point is a flagpole.
pub fn final_ti2(mu: &Partition) -> Option<TailReduction> {
    let reduction = compute_ti2(mu);
    if reduction.flagpole().is_some() {
        Some(reduction)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_golden() {
        let mu = Partition::new([3, 2, 2, 1]);
        assert_eq!(
            tail_initiator(&mu).entries(),
            &[0, 0, 1, 0, 1, 1, 0, 1]
        );
    }

    #[test]
    fn seed_of_empty_partition() {
        assert_eq!(tail_initiator(&Partition::empty()).entries(), &[0]);
    }

    #[test]
    fn ti2_golden_3221() {
        let reduction = compute_ti2(&Partition::new([3, 2, 2, 1]));
        assert_eq!(reduction.vector.entries(), &[0, 0, 1, 1, 2, 2, 2]);
        assert!(!reduction.hit_ceiling);
        assert_eq!(reduction.steps.len(), 13);

        let rules: Vec<TailRule> = reduction.steps.iter().map(|s| s.rule).collect();
        assert_eq!(rules[0], TailRule::Seed);
        assert_eq!(rules[1], TailRule::Bridge);
        assert_eq!(rules[2], TailRule::Descent);
        assert_eq!(rules[3], TailRule::Bridge);
        assert!(rules[4..12].iter().all(|&r| r == TailRule::Descent));
        assert_eq!(rules[12], TailRule::Reduce);

        assert_eq!(reduction.flagpole(), Some(Flagpole::Type1));
    }

    #[test]
    fn ti2_empty_partition_is_type3() {
        let reduction = compute_ti2(&Partition::empty());
        assert_eq!(reduction.vector.entries(), &[0]);
        assert_eq!(reduction.flagpole(), Some(Flagpole::Type3));
    }

    #[test]
    fn ti2_deficit_constant_along_log() {
        let mu = Partition::new([4, 2, 1, 1]);
        let reduction = compute_ti2(&mu);
        let deficit = reduction.steps[0].vector.to_partition().deficit();
        for step in &reduction.steps {
            assert_eq!(
                step.vector.to_partition().deficit(),
                deficit,
                "step {:?}",
                step.rule
            );
        }
    }

    #[test]
    fn ti2_ceiling_is_reported() {
        let reduction = compute_ti2_with_ceiling(&Partition::new([3, 2, 2, 1]), 5);
        assert!(reduction.hit_ceiling);
        assert!(reduction.steps.len() <= 5);
    }

    #[test]
    fn final_ti2_keeps_flagpoles() {
        // ⟨4,2,1,1⟩ reduces to a Type 2 flagpole (SMALL(2,8) witness).
        let kept = final_ti2(&Partition::new([4, 2, 1, 1])).unwrap();
        assert_eq!(kept.vector.entries(), &[0, 0, 1, 2, 1, 1, 2, 1]);
        assert_eq!(kept.flagpole(), Some(Flagpole::Type2));
    }

    #[test]
    fn ti2_fixed_point_is_stable() {
        // Running the reduction from the fixed point's partition changes
        // nothing on a second application of the inner rules.
        let reduction = compute_ti2(&Partition::new([3, 2, 2, 1]));
        let again = reduction.vector.reduce();
        assert_eq!(again, reduction.vector);
    }
}
