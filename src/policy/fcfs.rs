//! First Come First Serve.

use crate::models::{ScheduleRecorder, SeekSchedule};

use super::{ScheduleRequest, SeekPolicy};

/// First Come First Serve.
///
/// Services requests in exact arrival order, with no comparison and no
/// reordering. The baseline every other policy is measured against.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, request: &ScheduleRequest) -> SeekSchedule {
        let mut recorder = ScheduleRecorder::new(request.head);
        for &cylinder in &request.queue {
            recorder.service(cylinder);
        }
        recorder.finish()
    }

    fn description(&self) -> &'static str {
        "Processes requests in the order they arrive. Simple but may result in high seek times."
    }

    fn advantages(&self) -> &'static [&'static str] {
        &["Simple implementation", "Fair scheduling", "No starvation"]
    }

    fn drawbacks(&self) -> &'static [&'static str] {
        &["High average seek time", "Wild arm movement", "Not efficient"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_preserves_arrival_order() {
        let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
        let schedule = Fcfs.schedule(&request);
        assert_eq!(schedule.sequence, request.queue);
    }

    #[test]
    fn test_fcfs_reference_totals() {
        let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
        let schedule = Fcfs.schedule(&request);
        assert_eq!(schedule.total_seek_time, 640);
        assert!((schedule.average_seek_time - 80.0).abs() < 1e-10);
        assert_eq!(schedule.operation_count(), 8);
        assert_eq!(schedule.boundary_count(), 0);
    }

    #[test]
    fn test_fcfs_empty_queue() {
        let schedule = Fcfs.schedule(&ScheduleRequest::new(vec![], 53));
        assert!(schedule.sequence.is_empty());
        assert_eq!(schedule.total_seek_time, 0);
        assert!((schedule.average_seek_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_single_request() {
        let schedule = Fcfs.schedule(&ScheduleRequest::new(vec![100], 53));
        assert_eq!(schedule.sequence, vec![100]);
        assert_eq!(schedule.total_seek_time, 47);
    }

    #[test]
    fn test_fcfs_request_at_head() {
        let schedule = Fcfs.schedule(&ScheduleRequest::new(vec![53, 60], 53));
        assert_eq!(schedule.sequence, vec![53, 60]);
        assert_eq!(schedule.operations[0].distance, 0);
        assert_eq!(schedule.total_seek_time, 7);
    }

    #[test]
    fn test_fcfs_idempotent() {
        let request = ScheduleRequest::new(vec![40, 10, 90], 50);
        assert_eq!(Fcfs.schedule(&request), Fcfs.schedule(&request));
    }
}
