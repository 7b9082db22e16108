//! Bottom-up summary refresh for inner nodes.
//!
//! One post-order, depth-bounded traversal per maintenance cycle. Leaves
//! keep their directly fused payloads; every inner node gets its
//! occupancy, semantics, and color recomputed from its children, in that
//! order. Cost is O(inner nodes) per call, so this runs after a batch of
//! sensor integrations rather than per observation.

use crate::core::Result;
use crate::voxel::color::LabelColorTable;
use crate::voxel::fusion::{
    aggregate_color_from_children, aggregate_color_from_table, aggregate_semantics_from_children,
};

use super::base::{NodeId, OctreeBase};

/// Recompute every inner node's summary from its children.
///
/// Starts at the root with depth 0 and descends only while
/// `depth < max_depth`; a node sitting exactly at `max_depth` is still
/// refreshed, but nothing below it is revisited. When `table` is given,
/// inner-node color comes from the node's just-aggregated semantic
/// distribution; an unknown arg-max class aborts the traversal with
/// [`crate::Error::MissingClassMapping`].
pub fn update_inner_summaries<T: OctreeBase>(
    tree: &mut T,
    table: Option<&LabelColorTable>,
) -> Result<()> {
    let mut refreshed = 0usize;
    if let Some(root) = tree.root() {
        update_recurs(tree, root, 0, table, &mut refreshed)?;
    }
    log::debug!("refreshed {} inner node summaries", refreshed);
    Ok(())
}

fn update_recurs<T: OctreeBase>(
    tree: &mut T,
    node: NodeId,
    depth: u32,
    table: Option<&LabelColorTable>,
    refreshed: &mut usize,
) -> Result<()> {
    // leaf: nothing to aggregate
    if !tree.has_children(node) {
        return Ok(());
    }

    if depth < tree.max_depth() as u32 {
        for octant in 0..8 {
            if let Some(child) = tree.child(node, octant) {
                update_recurs(tree, child, depth + 1, table, refreshed)?;
            }
        }
    }

    let occupancy = tree.aggregate_occupancy_from_children(node);
    tree.payload_mut(node).set_occupancy(occupancy);

    // semantics strictly before color: the table path below reads this
    // node's freshly aggregated distribution
    let semantics = aggregate_semantics_from_children(tree, node);
    tree.payload_mut(node).set_semantics(semantics);

    match table {
        Some(table) => {
            if let Some(color) = aggregate_color_from_table(tree.payload(node).semantics(), table)?
            {
                tree.payload_mut(node).set_color(color);
            }
        }
        None => {
            let color = aggregate_color_from_children(tree, node);
            tree.payload_mut(node).set_color(color);
        }
    }

    *refreshed += 1;
    Ok(())
}
