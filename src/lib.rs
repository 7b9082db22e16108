//! Semoctree - semantic octree payload engine
//!
//! Per-voxel storage and fusion for a probabilistic 3D map: each voxel
//! carries an occupancy scalar, an RGB color, and a semantic class
//! distribution. New observations are fused into leaf payloads; a
//! post-order pass keeps every inner node's summary consistent with its
//! children. The octree substrate itself (allocation, key encoding,
//! log-odds sensor fusion) is injected through [`tree::OctreeBase`].

pub mod core;
pub mod voxel;
pub mod tree;

pub use crate::core::{Error, Result};
pub use crate::tree::arena::SemanticOctree;
pub use crate::tree::base::{NodeId, OctreeBase};
pub use crate::voxel::color::{Color, LabelColorTable};
pub use crate::voxel::payload::VoxelPayload;
pub use crate::voxel::semantics::Semantics;
