//! Per-voxel payload types and fusion rules

pub mod codec;
pub mod color;
pub mod fusion;
pub mod payload;
pub mod semantics;

pub use color::{Color, LabelColorTable};
pub use payload::VoxelPayload;
pub use semantics::Semantics;
