//! qtcat — partition transformations for q,t-Catalan combinatorics.
//!
//! A pure computational library over two value types: integer
//! [`Partition`]s and their [`Qdv`] (quasi-Dyck vector) encodings. On top
//! of the codec sit the diagonal-inversion statistic and its deficit, a
//! family of raise/lower maps, the tail-initiator reduction, and the
//! flagpole classification it feeds — capped by the exhaustively checkable
//! SMALL counting identity.
//!
//! # Layers
//!
//! | Layer | Entry points |
//! |-------|--------------|
//! | Codec + reduction | [`Qdv::from_partition`], [`Qdv::to_partition`], [`Qdv::reduce`] |
//! | Statistics | [`Partition::dinv`], [`Partition::deficit`] |
//! | Elementary maps | [`maps::nu1`], [`maps::nd1`], [`maps::PartitionClass`] |
//! | Vector descent | [`maps::descent::descend`] |
//! | Bridge maps | [`maps::bridge::nu2`], [`maps::bridge::nd2`] |
//! | Unified dispatch | [`maps::unified::nu`], [`maps::unified::nd`] |
//! | Tail reduction | [`tail_initiator`], [`compute_ti2`], [`final_ti2`] |
//! | Classification | [`Flagpole::classify`] |
//! | Drivers | [`generate_sequence`], [`verify_small`] |
//! | Parameterization | [`hlll`] |
//!
//! Every map is total over its stated domain and returns `Option::None`
//! outside it; the only hard failures are textual [`parse`] errors. All
//! deficit-gated paths preserve the deficit exactly — that invariant, not
//! any single map, is what the engine is built around.
//!
//! # Example
//!
//! ```
//! use qtcat::{compute_ti2, verify_small, Flagpole, Partition};
//!
//! let mu = Partition::new([3, 2, 2, 1]);
//! assert_eq!(mu.dinv(), 4);
//! assert_eq!(mu.deficit(), 4);
//!
//! let reduction = compute_ti2(&mu);
//! assert_eq!(reduction.flagpole(), Some(Flagpole::Type1));
//!
//! let report = verify_small(2, 8).expect("r = 2 is admissible for k = 8");
//! assert!(report.holds());
//! assert_eq!(report.actual(), 4);
//! ```

#![deny(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used)]

// Value types
mod partition;
mod qdv;

// The dinv/deficit statistic (inherent impls on Partition)
mod stats;

// Exhaustive enumeration of partitions and Dyck vectors
pub mod enumerate;

// Raise/lower maps: elementary, descent, bridge, unified
pub mod maps;

// Tail-initiator reduction and its fixed points
mod tail;

// Flagpole classification of ternary fixed points
pub mod flagpole;

// Trajectory driver
mod sequence;

// The SMALL counting identity
mod small;

// HLLL parameterization
pub mod hlll;

// Textual input parsing
pub mod parse;

pub use flagpole::Flagpole;
pub use maps::PartitionClass;
pub use partition::Partition;
pub use qdv::Qdv;
pub use sequence::{
    generate_sequence, MapKind, Termination, Trajectory, TrajectoryStep,
    DEFAULT_SEQUENCE_CEILING,
};
pub use small::{max_r, verify_small, SmallInputError, SmallReport, SmallWitness};
pub use tail::{
    compute_ti2, compute_ti2_with_ceiling, final_ti2, tail_initiator, TailReduction, TailRule,
    TailStep, DEFAULT_TI2_CEILING,
};
