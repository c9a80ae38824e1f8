//! Seek scheduling domain models.
//!
//! Provides the core data types for representing a disk-arm scheduling
//! problem and its solution: the disk geometry, a single head movement,
//! and the complete schedule a policy produces.

mod geometry;
mod schedule;
mod seek;

pub use geometry::{Cylinder, Direction, DiskGeometry};
pub use schedule::{ScheduleRecorder, SeekSchedule};
pub use seek::SeekOp;
