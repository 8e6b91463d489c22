//! The bridge maps NU₂/ND₂: template-matched QDV transformations.
//!
//! Elementary chains dead-end at Final (no NU₁) and Initial (no ND₁)
//! partitions; the bridge maps cross those gaps by recognizing a rigid
//! vector template, extracting the free middle block, and reassembling it
//! in the image layout. The matching is explicit index scanning — the
//! boundary arithmetic is exact and deliberately not abstracted into
//! anything cleverer.
//!
//! | Rule | Template (domain side) | Image layout |
//! |------|------------------------|--------------|
//! | NU₂‑A | `0 1 2…2 A (−1)^(h−1)`, h = trailing −1s + 1, ≥ h twos | `0 0^(h−1) 1 A 1^h` |
//! | NU₂‑B | `0 1 2^k B (−1)^(≥k)` | `0 0^k B 0 1^k` |
//! | ND₂‑A | `0^h 1 A 1^(≥h)`, h ≥ 2 | `0 1 2 2^(h−1) A (−1)^(h−1)` |
//! | ND₂‑B | `0^(≥k+1) … 0 1^k`, k ≥ 1 | `0 1 2^k B (−1)^k` |
//!
//! [`nu2`] tries Rule B before Rule A; [`nd2`] picks its sub-rule by
//! comparing the leading-0 and trailing-1 runs. Block extraction uses
//! saturating bounds (an overlapping window yields the empty block), which
//! matters for short inputs like `[0, 0, 1, 1]`.

use crate::qdv::Qdv;

/// A successful template match: the run parameter (`h` for the A rules,
/// `k` for the B rules) and the extracted middle block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Run parameter of the rule.
    pub run: usize,
    /// The middle block, possibly empty.
    pub block: Vec<i32>,
}

/// `v[start..end]` with JavaScript-style clamping: empty when the window
/// collapses.
fn window(v: &[i32], start: usize, end: usize) -> Vec<i32> {
    if start < end {
        v[start..end].to_vec()
    } else {
        Vec::new()
    }
}

/// Shape checks shared by the NU₂ blocks: entries bounded by 2 and no step
/// rising by more than one.
fn climbs_gently(block: &[i32]) -> bool {
    block.iter().all(|&x| x <= 2) && block.windows(2).all(|w| w[1] <= w[0] + 1)
}

/// Match NU₂ Rule A: prefix `0,1,2`, `h = 1 +` trailing −1s, at least `h`
/// consecutive 2s from index 2, and a well-shaped middle block ending ≥ 0.
pub fn match_nu2_rule_a(qdv: &Qdv) -> Option<RuleMatch> {
    let v = qdv.entries();
    if v.len() < 3 || v[0] != 0 || v[1] != 1 || v[2] != 2 {
        return None;
    }
    let h = qdv.trailing_run(-1) + 1;
    let twos = v[2..].iter().take_while(|&&x| x == 2).count();
    if twos < h {
        return None;
    }
    let block = window(v, 2 + h, v.len() - (h - 1));
    if let Some(&tail) = block.last() {
        if tail < 0 || !climbs_gently(&block) {
            return None;
        }
    }
    Some(RuleMatch { run: h, block })
}

/// Match NU₂ Rule B: prefix `0,1,2`, `k` consecutive 2s from index 2, at
/// least `k` trailing −1s, and a well-shaped middle block with first entry
/// ≤ 1 and last entry ≥ −1.
pub fn match_nu2_rule_b(qdv: &Qdv) -> Option<RuleMatch> {
    let v = qdv.entries();
    if v.len() < 3 || v[0] != 0 || v[1] != 1 || v[2] != 2 {
        return None;
    }
    let k = v[2..].iter().take_while(|&&x| x == 2).count();
    if qdv.trailing_run(-1) < k {
        return None;
    }
    let block = window(v, 2 + k, v.len() - k);
    if !block.is_empty() {
        if block[0] > 1 || block[block.len() - 1] < -1 || !climbs_gently(&block) {
            return None;
        }
    }
    Some(RuleMatch { run: k, block })
}

fn apply_nu2_rule_a(m: &RuleMatch) -> Qdv {
    let mut out = vec![0];
    out.extend(std::iter::repeat(0).take(m.run - 1));
    out.push(1);
    out.extend_from_slice(&m.block);
    out.extend(std::iter::repeat(1).take(m.run));
    Qdv::new(out)
}

fn apply_nu2_rule_b(m: &RuleMatch) -> Qdv {
    let mut out = vec![0];
    out.extend(std::iter::repeat(0).take(m.run));
    out.extend_from_slice(&m.block);
    out.push(0);
    out.extend(std::iter::repeat(1).take(m.run));
    Qdv::new(out)
}

/// The bridge raise NU₂. Rule B is tried first, then Rule A; `None` when
/// neither template matches.
pub fn nu2(qdv: &Qdv) -> Option<Qdv> {
    if let Some(m) = match_nu2_rule_b(qdv) {
        return Some(apply_nu2_rule_b(&m));
    }
    match_nu2_rule_a(qdv).map(|m| apply_nu2_rule_a(&m))
}

/// Match ND₂ inverse Rule A: leading 0-run of length `h ≥ 2`, a 1 right
/// after it, and at least `h` trailing 1s.
pub fn match_nd2_rule_a(qdv: &Qdv) -> Option<RuleMatch> {
    let v = qdv.entries();
    let h = qdv.leading_run(0);
    if h < 2 || v.get(h) != Some(&1) {
        return None;
    }
    if qdv.trailing_run(1) < h {
        return None;
    }
    let block = window(v, h + 1, v.len() - h);
    Some(RuleMatch { run: h, block })
}

/// Match ND₂ inverse Rule B: leading 0-run of length ≥ `k + 1` where `k ≥ 1`
/// is the trailing 1-run, and a 0 immediately before the trailing 1s.
pub fn match_nd2_rule_b(qdv: &Qdv) -> Option<RuleMatch> {
    let v = qdv.entries();
    let zeros = qdv.leading_run(0);
    if zeros < 2 {
        return None;
    }
    let k = qdv.trailing_run(1);
    if k < 1 || zeros < k + 1 {
        return None;
    }
    let pivot = v.len() - k - 1;
    if v[pivot] != 0 {
        return None;
    }
    let block = window(v, k + 1, pivot);
    Some(RuleMatch { run: k, block })
}

fn apply_nd2_rule_a(m: &RuleMatch) -> Qdv {
    let mut out = vec![0, 1, 2];
    out.extend(std::iter::repeat(2).take(m.run - 1));
    out.extend_from_slice(&m.block);
    out.extend(std::iter::repeat(-1).take(m.run - 1));
    Qdv::new(out)
}

fn apply_nd2_rule_b(m: &RuleMatch) -> Qdv {
    let mut out = vec![0, 1];
    out.extend(std::iter::repeat(2).take(m.run));
    out.extend_from_slice(&m.block);
    out.extend(std::iter::repeat(-1).take(m.run));
    Qdv::new(out)
}

/// The bridge lower ND₂. Dispatches on the leading-0 and trailing-1 runs:
/// inverse Rule A when trailing 1s ≥ leading 0s, inverse Rule B otherwise;
/// `None` when the chosen sub-rule's shape checks fail.
pub fn nd2(qdv: &Qdv) -> Option<Qdv> {
    if qdv.trailing_run(1) >= qdv.leading_run(0) {
        match_nd2_rule_a(qdv).map(|m| apply_nd2_rule_a(&m))
    } else {
        match_nd2_rule_b(qdv).map(|m| apply_nd2_rule_b(&m))
    }
}
