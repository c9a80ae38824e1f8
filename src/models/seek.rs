//! Seek operation model.

use serde::{Deserialize, Serialize};

use super::Cylinder;

/// A single head movement.
///
/// Records the origin, the destination, and the cylinder distance
/// traveled. Operations are immutable and produced in strict temporal
/// order within a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekOp {
    /// Head position before the movement.
    pub from: Cylinder,
    /// Head position after the movement.
    pub to: Cylinder,
    /// Cylinders traveled: `|to - from|`.
    pub distance: u32,
}

impl SeekOp {
    /// Creates a seek operation between two cylinders.
    pub fn new(from: Cylinder, to: Cylinder) -> Self {
        Self {
            from,
            to,
            distance: from.abs_diff(to),
        }
    }
}
