//! Disk geometry and head-travel direction.

use serde::{Deserialize, Serialize};

/// An addressable track position on the disk.
///
/// Cylinders are non-negative by construction and bounded above by
/// [`DiskGeometry::max_cylinder`].
pub type Cylinder = u32;

/// Direction of head travel for sweep-based policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward cylinder 0.
    Left,
    /// Toward the highest cylinder (default).
    #[default]
    Right,
}

/// Physical bounds of the simulated disk.
///
/// Valid cylinders span `[0, max_cylinder]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskGeometry {
    /// Highest addressable cylinder.
    pub max_cylinder: Cylinder,
}

impl DiskGeometry {
    /// Creates a geometry with the given highest cylinder.
    pub fn new(max_cylinder: Cylinder) -> Self {
        Self { max_cylinder }
    }

    /// Whether a cylinder lies within this geometry.
    #[inline]
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        cylinder <= self.max_cylinder
    }

    /// Number of addressable cylinders.
    #[inline]
    pub fn cylinder_count(&self) -> u64 {
        u64::from(self.max_cylinder) + 1
    }
}

impl Default for DiskGeometry {
    /// The reference 200-cylinder platter (cylinders 0–199).
    fn default() -> Self {
        Self { max_cylinder: 199 }
    }
}
