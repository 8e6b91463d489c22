//! The descent step on quasi-Dyck vectors.
//!
//! This is the vector-native form of the lower step, used by the tail
//! reduction: where the partition-level map re-sorts parts, the vector form
//! moves exactly one entry, so the step log stays legible.

use crate::qdv::Qdv;

/// One descent step.
///
/// Let `d` be the length of the maximal staircase prefix `0, 1, 2, …` minus
/// one, and `vₙ` the last entry. Undefined if `d < vₙ`. If `vₙ == −1` the
/// last entry is dropped and a 0 prepended; otherwise `vₙ + 1` is spliced
/// in right after the first occurrence of `vₙ` among the remaining entries
/// (undefined if there is none), with the last entry dropped.
pub fn descend(qdv: &Qdv) -> Option<Qdv> {
    let v = qdv.entries();
    let last = *v.last()?;

    let mut expected = 0i32;
    for &entry in v {
        if entry == expected {
            expected += 1;
        } else {
            break;
        }
    }
    let depth = expected - 1;
    if depth < last {
        return None;
    }

    let rest = &v[..v.len() - 1];
    if last == -1 {
        let mut out = Vec::with_capacity(v.len());
        out.push(0);
        out.extend_from_slice(rest);
        return Some(Qdv::new(out));
    }

    let idx = rest.iter().position(|&entry| entry == last)?;
    let mut out = Vec::with_capacity(v.len());
    out.extend_from_slice(&rest[..=idx]);
    out.push(last + 1);
    out.extend_from_slice(&rest[idx + 1..]);
    Some(Qdv::new(out))
}
