//! Shortest Seek Time First.

use crate::models::{ScheduleRecorder, SeekSchedule};

use super::{ScheduleRequest, SeekPolicy};

/// Shortest Seek Time First.
///
/// Greedily services the request nearest the current head at each step.
/// O(n²) over the queue length, which is fine at the tens-of-requests
/// scale this engine targets.
///
/// Ties resolve to the earliest-indexed remaining candidate. The scan is
/// stable, so the tie-break is deterministic and observable.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, request: &ScheduleRequest) -> SeekSchedule {
        let mut recorder = ScheduleRecorder::new(request.head);
        let mut remaining = request.queue.clone();

        while !remaining.is_empty() {
            let mut nearest = 0;
            let mut nearest_distance = remaining[0].abs_diff(recorder.head());
            // Strict `<` keeps the earliest index on equal distances
            for (i, &candidate) in remaining.iter().enumerate().skip(1) {
                let distance = candidate.abs_diff(recorder.head());
                if distance < nearest_distance {
                    nearest = i;
                    nearest_distance = distance;
                }
            }
            recorder.service(remaining.remove(nearest));
        }

        recorder.finish()
    }

    fn description(&self) -> &'static str {
        "Always services the request closest to the current head position."
    }

    fn advantages(&self) -> &'static [&'static str] {
        &["Better than FCFS", "Reduces total seek time", "More efficient"]
    }

    fn drawbacks(&self) -> &'static [&'static str] {
        &["May cause starvation", "Not optimal", "Overhead in calculating"]
    }
}
