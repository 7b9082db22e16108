//! Substrate capability consumed by the fusion engine.
//!
//! The fusion and aggregation code never owns nodes: spatial subdivision,
//! key encoding, allocation/pruning, and the occupancy sensor model all
//! belong to the octree substrate. This trait is the exact slice of that
//! substrate the engine needs - child navigation, payload access, the
//! occupancy child-aggregation primitive, and the tree's depth bound.

use crate::voxel::payload::VoxelPayload;

/// Index of a node within its substrate's arena
pub type NodeId = u32;

/// Navigation and payload access over an externally owned octree.
///
/// Implementations guarantee that every `NodeId` handed out by `root` or
/// `child` stays valid for the lifetime of the borrow; the engine assumes
/// exclusive access while any fusion or aggregation call runs.
pub trait OctreeBase {
    /// Root node, if the tree has been populated
    fn root(&self) -> Option<NodeId>;

    /// Maximum tree depth; aggregation does not descend past it
    fn max_depth(&self) -> u8;

    /// True if any of the node's 8 child slots is occupied
    fn has_children(&self, node: NodeId) -> bool;

    /// Child in octant slot `octant` (0..8), if it exists
    fn child(&self, node: NodeId, octant: u8) -> Option<NodeId>;

    fn payload(&self, node: NodeId) -> &VoxelPayload;

    fn payload_mut(&mut self, node: NodeId) -> &mut VoxelPayload;

    /// Occupancy summary of a node computed from its children, per the
    /// substrate's own occupancy model. The engine stores the result
    /// verbatim; it does not interpret it.
    fn aggregate_occupancy_from_children(&self, node: NodeId) -> f32;
}
