//! Per-node voxel payload

use super::color::Color;
use super::semantics::Semantics;

/// The value stored in every octree node: an occupancy scalar owned by the
/// substrate's log-odds model, the fused color, and the fused semantic
/// distribution.
///
/// The payload itself has no fusion behavior; see
/// [`crate::voxel::fusion`] for the update rules and
/// [`crate::voxel::codec`] for the on-disk record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelPayload {
    occupancy: f32,
    color: Color,
    semantics: Semantics,
}

impl VoxelPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log-odds occupancy, managed by the octree substrate
    pub fn occupancy(&self) -> f32 {
        self.occupancy
    }

    pub fn set_occupancy(&mut self, occupancy: f32) {
        self.occupancy = occupancy;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_color_set(&self) -> bool {
        self.color.is_set()
    }

    pub fn semantics(&self) -> &Semantics {
        &self.semantics
    }

    pub fn semantics_mut(&mut self) -> &mut Semantics {
        &mut self.semantics
    }

    pub fn set_semantics(&mut self, semantics: Semantics) {
        self.semantics = semantics;
    }

    pub fn is_semantics_set(&self) -> bool {
        self.semantics.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_payload_is_unset() {
        let p = VoxelPayload::new();
        assert_eq!(p.occupancy(), 0.0);
        assert_eq!(p.color(), Color::WHITE);
        assert!(!p.is_color_set());
        assert!(!p.is_semantics_set());
    }

    #[test]
    fn test_accessors() {
        let mut p = VoxelPayload::new();
        p.set_occupancy(1.5);
        p.set_color(Color::new(10, 20, 30));
        p.set_semantics(Semantics::new(vec![0.5, 0.5]));

        assert_eq!(p.occupancy(), 1.5);
        assert!(p.is_color_set());
        assert!(p.is_semantics_set());
        assert_eq!(p.semantics().scores.len(), 2);
    }
}
