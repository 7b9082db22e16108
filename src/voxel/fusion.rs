//! Fusion rules for voxel color and semantics.
//!
//! Two separate update paths exist and deliberately use different
//! averaging policies:
//!
//! - *Incremental fusion* folds one new sensor observation into a leaf
//!   payload. Color uses a recency-biased midpoint (the newest
//!   observation always weighs 50%); semantics uses a true running mean
//!   weighted by the stored observation count.
//! - *Child aggregation* recomputes an inner node's summary purely from
//!   its children's current values, ignoring how many observations each
//!   child has absorbed.
//!
//! The two must not be unified: downstream consumers rely on the exact
//! arithmetic of each.

use crate::core::Result;
use crate::tree::base::{NodeId, OctreeBase};

use super::color::{Color, LabelColorTable};
use super::payload::VoxelPayload;
use super::semantics::Semantics;

/// Fold one observed color into a payload.
///
/// An unset payload takes the observation directly. Otherwise each
/// channel becomes the truncating midpoint `(previous + observed) / 2`:
/// a decaying average that favors recent observations and needs no
/// per-voxel history.
pub fn fuse_observed_color(payload: &mut VoxelPayload, r: u8, g: u8, b: u8) {
    if payload.is_color_set() {
        let prev = payload.color();
        payload.set_color(Color::new(
            ((prev.r as u16 + r as u16) / 2) as u8,
            ((prev.g as u16 + g as u16) / 2) as u8,
            ((prev.b as u16 + b as u16) / 2) as u8,
        ));
    } else {
        payload.set_color(Color::new(r, g, b));
    }
}

/// Fold one observed class-score vector into a payload.
///
/// The first observation is stored verbatim, normalized, and counted as
/// one. Later observations update a running mean weighted by the stored
/// count: `stored[i] = (stored[i] * count + scores[i]) / (count + 1)`.
/// The stored vector is zero-padded up to the observation's length when
/// the observation is wider; it is never truncated, and stored entries
/// beyond the observation's length keep their value until the final
/// renormalization rescales everything.
pub fn fuse_observed_semantics(payload: &mut VoxelPayload, scores: &[f32]) {
    if payload.is_semantics_set() {
        let sem = payload.semantics_mut();
        if sem.scores.len() < scores.len() {
            sem.scores.resize(scores.len(), 0.0);
        }
        let count = sem.count as f32;
        for (stored, &observed) in sem.scores.iter_mut().zip(scores) {
            *stored = (*stored * count + observed) / (count + 1.0);
        }
        sem.normalize();
        sem.count += 1;
    } else {
        let mut sem = Semantics::new(scores.to_vec());
        sem.normalize();
        sem.count = 1;
        payload.set_semantics(sem);
    }
}

/// Per-channel mean over the node's children that have a color.
///
/// Children that exist but were never colored are skipped. With no
/// qualifying child the result is the white sentinel - observably the
/// same as "no information".
pub fn aggregate_color_from_children<T: OctreeBase>(tree: &T, node: NodeId) -> Color {
    let mut r_sum: u32 = 0;
    let mut g_sum: u32 = 0;
    let mut b_sum: u32 = 0;
    let mut count: u32 = 0;

    for octant in 0..8 {
        if let Some(child) = tree.child(node, octant) {
            let payload = tree.payload(child);
            if payload.is_color_set() {
                let c = payload.color();
                r_sum += c.r as u32;
                g_sum += c.g as u32;
                b_sum += c.b as u32;
                count += 1;
            }
        }
    }

    if count > 0 {
        Color::new(
            (r_sum / count) as u8,
            (g_sum / count) as u8,
            (b_sum / count) as u8,
        )
    } else {
        Color::WHITE
    }
}

/// Elementwise mean over the node's children that have semantics.
///
/// The accumulator is widened to the longest child vector seen; a longer
/// child's tail is never discarded. The mean is unweighted across
/// children - each child's internal observation count is ignored - and
/// the result is NOT normalized. With no qualifying child the result is
/// unset (empty), unlike the color fallback above.
pub fn aggregate_semantics_from_children<T: OctreeBase>(tree: &T, node: NodeId) -> Semantics {
    let mut scores: Vec<f32> = Vec::new();
    let mut count: u32 = 0;

    for octant in 0..8 {
        if let Some(child) = tree.child(node, octant) {
            let sem = tree.payload(child).semantics();
            if sem.is_set() {
                if scores.len() < sem.scores.len() {
                    scores.resize(sem.scores.len(), 0.0);
                }
                for (acc, &score) in scores.iter_mut().zip(&sem.scores) {
                    *acc += score;
                }
                count += 1;
            }
        }
    }

    if count > 0 {
        for score in &mut scores {
            *score /= count as f32;
        }
        Semantics::new(scores)
    } else {
        Semantics::unset()
    }
}

/// Display color for a node with a configured label-to-color table: the
/// table's color for the node's arg-max class (ties break to the lowest
/// class id). Children's colors play no part.
///
/// Returns `Ok(None)` when the distribution is unset - the caller should
/// leave the node's color untouched. A class id missing from the table
/// is a configuration fault and fails hard.
pub fn aggregate_color_from_table(
    semantics: &Semantics,
    table: &LabelColorTable,
) -> Result<Option<Color>> {
    match semantics.argmax_class() {
        Some(class) => Ok(Some(table.require(class)?)),
        None => Ok(None),
    }
}
