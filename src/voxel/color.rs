//! Voxel color and the semantic label-to-color table

use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// RGB color of a voxel - exactly 3 bytes
///
/// White doubles as the "not yet colored" sentinel: a freshly created
/// payload is white, and an explicitly observed pure-white voxel is
/// indistinguishable from an unobserved one. Callers that need the
/// distinction must track it themselves.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Sentinel for a voxel without color information
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True unless this is the white sentinel
    pub fn is_set(&self) -> bool {
        *self != Self::WHITE
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.r, self.g, self.b)
    }
}

/// Mapping from semantic class id to a display color.
///
/// When configured on a tree, inner-node colors come from this table (the
/// color of the node's current arg-max class) instead of averaging the
/// children's colors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LabelColorTable {
    map: HashMap<u32, Color>,
}

impl LabelColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: u32, color: Color) {
        self.map.insert(class, color);
    }

    pub fn get(&self, class: u32) -> Option<Color> {
        self.map.get(&class).copied()
    }

    /// Lookup that treats an unknown class as a configuration error
    pub fn require(&self, class: u32) -> Result<Color> {
        self.get(class).ok_or(Error::MissingClassMapping(class))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Load a table from JSON: `{"0": {"r":10,"g":10,"b":10}, ...}`
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let map: HashMap<u32, Color> = serde_json::from_reader(reader)
            .map_err(|e| Error::Io(e.into()))?;
        Ok(Self { map })
    }
}

impl FromIterator<(u32, Color)> for LabelColorTable {
    fn from_iter<I: IntoIterator<Item = (u32, Color)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_unset() {
        assert!(!Color::WHITE.is_set());
        assert!(!Color::default().is_set());
        assert!(Color::new(255, 255, 254).is_set());
        assert!(Color::new(0, 0, 0).is_set());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(200, 0, 31).to_string(), "(200 0 31)");
    }

    #[test]
    fn test_table_lookup() {
        let table: LabelColorTable =
            [(0, Color::new(10, 10, 10)), (7, Color::new(0, 200, 0))]
                .into_iter()
                .collect();

        assert_eq!(table.get(7), Some(Color::new(0, 200, 0)));
        assert_eq!(table.get(3), None);
        assert!(table.require(0).is_ok());
        assert!(matches!(
            table.require(3),
            Err(Error::MissingClassMapping(3))
        ));
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"{"1": {"r": 200, "g": 0, "b": 0}, "2": {"r": 0, "g": 200, "b": 0}}"#;
        let table = LabelColorTable::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some(Color::new(200, 0, 0)));
    }
}
