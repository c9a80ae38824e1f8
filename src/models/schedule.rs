//! Seek schedule (solution) model.
//!
//! A schedule is the complete outcome of one policy run: the order in
//! which requests are serviced, every head movement taken (including
//! boundary travel that services nothing), and the aggregate seek cost.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};

use super::{Cylinder, SeekOp};

/// A complete seek schedule.
///
/// Invariants maintained by [`ScheduleRecorder`]:
/// - `operations[i].from == operations[i-1].to` (the initial head for i = 0)
/// - `total_seek_time == sum(operations[i].distance)`
/// - `average_seek_time == total_seek_time / sequence.len()` (0.0 when empty)
/// - `sequence` holds serviced cylinders only; boundary travel appears in
///   `operations` but never in `sequence`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekSchedule {
    /// Cylinders in service order.
    pub sequence: Vec<Cylinder>,
    /// Every head movement, serviced or boundary, in temporal order.
    pub operations: Vec<SeekOp>,
    /// Sum of all seek distances (cylinders).
    pub total_seek_time: u64,
    /// Mean seek distance per serviced request (cylinders).
    pub average_seek_time: f64,
}

impl SeekSchedule {
    /// Number of serviced requests.
    #[inline]
    pub fn serviced_count(&self) -> usize {
        self.sequence.len()
    }

    /// Number of head movements, including boundary travel.
    #[inline]
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Operations that service no request (edge trips and wrap legs).
    pub fn boundary_count(&self) -> usize {
        self.operations.len() - self.sequence.len()
    }

    /// Final head position, or `None` for an empty schedule.
    pub fn final_head(&self) -> Option<Cylinder> {
        self.operations.last().map(|op| op.to)
    }
}

/// Accumulator for building a [`SeekSchedule`] step by step.
///
/// Folds the head position, running total, service sequence, and
/// operation log through explicit state so policies stay reentrant:
/// no ambient mutable variables, each run owns its recorder.
#[derive(Debug, Clone)]
pub struct ScheduleRecorder {
    head: Cylinder,
    sequence: Vec<Cylinder>,
    operations: Vec<SeekOp>,
    total_seek_time: u64,
}

impl ScheduleRecorder {
    /// Starts recording from the given head position.
    pub fn new(head: Cylinder) -> Self {
        Self {
            head,
            sequence: Vec::new(),
            operations: Vec::new(),
            total_seek_time: 0,
        }
    }

    /// Current head position.
    #[inline]
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Moves the head to `cylinder` and records it as serviced.
    pub fn service(&mut self, cylinder: Cylinder) {
        self.travel(cylinder);
        self.sequence.push(cylinder);
    }

    /// Moves the head to `cylinder` without servicing anything.
    ///
    /// Used for the SCAN edge trip and both legs of the C-SCAN wrap:
    /// the travel is charged but the cylinder never enters the sequence.
    pub fn sweep(&mut self, cylinder: Cylinder) {
        self.travel(cylinder);
    }

    fn travel(&mut self, cylinder: Cylinder) {
        let op = SeekOp::new(self.head, cylinder);
        self.total_seek_time += u64::from(op.distance);
        self.operations.push(op);
        self.head = cylinder;
    }

    /// Finishes recording and computes the average seek time.
    pub fn finish(self) -> SeekSchedule {
        let average_seek_time = if self.sequence.is_empty() {
            0.0
        } else {
            self.total_seek_time as f64 / self.sequence.len() as f64
        };
        SeekSchedule {
            sequence: self.sequence,
            operations: self.operations,
            total_seek_time: self.total_seek_time,
            average_seek_time,
        }
    }
}
