//! Derived schedule statistics.
//!
//! Computes display-level indicators from a completed schedule: totals,
//! the largest single movement, operation counts, and throughput per
//! 100 cylinders of head travel.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek time | Sum of all seek distances |
//! | Average seek time | Total / serviced requests |
//! | Max seek | Largest single head movement |
//! | Throughput | Serviced requests per 100 cylinders traveled |

use serde::{Deserialize, Serialize};

use crate::models::SeekSchedule;

/// Performance indicators for one schedule.
///
/// Distances are in cylinders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Sum of all seek distances.
    pub total_seek_time: u64,
    /// Mean seek distance per serviced request.
    pub average_seek_time: f64,
    /// Largest single head movement.
    pub max_seek: u32,
    /// Requests serviced.
    pub serviced_count: usize,
    /// Head movements, including boundary travel.
    pub operation_count: usize,
    /// Movements that serviced nothing (edge trips, wrap legs).
    pub boundary_count: usize,
    /// Serviced requests per 100 cylinders traveled (0 when the head never moves).
    pub throughput_per_100: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed schedule.
    pub fn calculate(schedule: &SeekSchedule) -> Self {
        let max_seek = schedule
            .operations
            .iter()
            .map(|op| op.distance)
            .max()
            .unwrap_or(0);

        let throughput_per_100 = if schedule.total_seek_time == 0 {
            0.0
        } else {
            schedule.serviced_count() as f64 / schedule.total_seek_time as f64 * 100.0
        };

        Self {
            total_seek_time: schedule.total_seek_time,
            average_seek_time: schedule.average_seek_time,
            max_seek,
            serviced_count: schedule.serviced_count(),
            operation_count: schedule.operation_count(),
            boundary_count: schedule.boundary_count(),
            throughput_per_100,
        }
    }
}
