//! Circular SCAN.

use crate::models::{ScheduleRecorder, SeekSchedule};

use super::{split_at_head, ScheduleRequest, SeekPolicy};

/// Circular SCAN.
///
/// Sweeps rightward to the disk edge, wraps to cylinder 0, and continues
/// rightward; the arm only ever scans in one direction. The wrap is two
/// boundary operations: the trip to the edge, then the return leg from
/// the edge to 0. The return leg is charged the full platter width. It
/// models real arm travel, not a free teleport, which keeps C-SCAN
/// totals directly comparable with SCAN's.
///
/// When no requests lie behind the head, neither boundary operation is
/// emitted.
#[derive(Debug, Clone, Copy)]
pub struct Cscan;

impl SeekPolicy for Cscan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, request: &ScheduleRequest) -> SeekSchedule {
        let (mut left, mut right) = split_at_head(&request.queue, request.head);
        left.sort_unstable();
        right.sort_unstable();

        let mut recorder = ScheduleRecorder::new(request.head);
        for &cylinder in &right {
            recorder.service(cylinder);
        }
        if !left.is_empty() {
            recorder.sweep(request.geometry.max_cylinder);
            recorder.sweep(0);
            for &cylinder in &left {
                recorder.service(cylinder);
            }
        }
        recorder.finish()
    }

    fn description(&self) -> &'static str {
        "Like SCAN but jumps back to the start after reaching the end, providing uniform wait time."
    }

    fn advantages(&self) -> &'static [&'static str] {
        &["Uniform wait time", "No starvation", "Predictable"]
    }

    fn drawbacks(&self) -> &'static [&'static str] {
        &["More movement than SCAN", "Not optimal for all patterns"]
    }
}
