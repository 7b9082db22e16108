//! Octree substrate interface, reference arena, and the aggregation driver

pub mod aggregate;
pub mod arena;
pub mod base;

pub use aggregate::update_inner_summaries;
pub use arena::SemanticOctree;
pub use base::{NodeId, OctreeBase};
