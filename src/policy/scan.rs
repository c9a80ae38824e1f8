//! SCAN (elevator) policy.

use crate::models::{Direction, ScheduleRecorder, SeekSchedule};

use super::{split_at_head, ScheduleRequest, SeekPolicy};

/// SCAN, the elevator algorithm.
///
/// Sweeps monotonically in the configured direction, servicing requests
/// along the way, then travels to the disk edge and reverses. The edge
/// trip is a boundary operation: its travel is charged to the total but
/// the edge cylinder is never serviced. When no requests lie behind the
/// head, the edge trip is skipped entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan {
    /// Initial sweep direction.
    pub direction: Direction,
}

impl Scan {
    /// Creates a rightward SCAN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a SCAN with the given initial direction.
    pub fn with_direction(direction: Direction) -> Self {
        Self { direction }
    }
}

impl SeekPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, request: &ScheduleRequest) -> SeekSchedule {
        let (mut left, mut right) = split_at_head(&request.queue, request.head);
        left.sort_unstable_by(|a, b| b.cmp(a));
        right.sort_unstable();

        let mut recorder = ScheduleRecorder::new(request.head);
        match self.direction {
            Direction::Right => {
                for &cylinder in &right {
                    recorder.service(cylinder);
                }
                if !left.is_empty() {
                    recorder.sweep(request.geometry.max_cylinder);
                    for &cylinder in &left {
                        recorder.service(cylinder);
                    }
                }
            }
            Direction::Left => {
                for &cylinder in &left {
                    recorder.service(cylinder);
                }
                if !right.is_empty() {
                    recorder.sweep(0);
                    for &cylinder in &right {
                        recorder.service(cylinder);
                    }
                }
            }
        }
        recorder.finish()
    }

    fn description(&self) -> &'static str {
        "Moves in one direction servicing requests until reaching the end, then reverses."
    }

    fn advantages(&self) -> &'static [&'static str] {
        &["No starvation", "Uniform wait time", "Better than SSTF"]
    }

    fn drawbacks(&self) -> &'static [&'static str] {
        &["Long wait for recently visited", "Not optimal for clustered requests"]
    }
}
