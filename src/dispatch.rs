//! Policy dispatch and batch comparison.
//!
//! Entry points for callers that select a policy at runtime: an
//! exhaustive enum dispatch, a name-keyed variant kept for display-name
//! callers, and a run-all form that computes every policy's schedule
//! over identical input for side-by-side comparison.

use serde::{Deserialize, Serialize};

use crate::models::SeekSchedule;
use crate::policy::{PolicyKind, ScheduleRequest, SeekPolicy};

/// Runs a single policy against a request.
///
/// SCAN runs with its default rightward sweep; build a
/// [`crate::policy::Scan`] directly for a leftward pass.
pub fn run(kind: PolicyKind, request: &ScheduleRequest) -> SeekSchedule {
    kind.policy().schedule(request)
}

/// Runs a policy selected by display name.
///
/// Unrecognized names fall back to FCFS rather than failing, as a
/// compatibility shim for name-keyed callers. The fallback masks typos;
/// callers that want strict rejection resolve the name with
/// [`PolicyKind::from_name`] first.
pub fn run_named(name: &str, request: &ScheduleRequest) -> SeekSchedule {
    let kind = PolicyKind::from_name(name).unwrap_or(PolicyKind::Fcfs);
    run(kind, request)
}

/// Runs all four policies against the same request.
///
/// # Example
///
/// ```
/// use u_seek::dispatch;
/// use u_seek::policy::ScheduleRequest;
///
/// let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
/// let comparison = dispatch::run_all(&request);
/// let (winner, schedule) = comparison.best();
/// assert_eq!(winner.name(), "SSTF");
/// assert_eq!(schedule.total_seek_time, 236);
/// ```
pub fn run_all(request: &ScheduleRequest) -> PolicyComparison {
    PolicyComparison {
        fcfs: run(PolicyKind::Fcfs, request),
        sstf: run(PolicyKind::Sstf, request),
        scan: run(PolicyKind::Scan, request),
        cscan: run(PolicyKind::CScan, request),
    }
}

/// Every policy's schedule over one shared input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// FCFS result.
    pub fcfs: SeekSchedule,
    /// SSTF result.
    pub sstf: SeekSchedule,
    /// SCAN result (rightward sweep).
    pub scan: SeekSchedule,
    /// C-SCAN result.
    pub cscan: SeekSchedule,
}

impl PolicyComparison {
    /// The schedule computed by the given policy.
    pub fn get(&self, kind: PolicyKind) -> &SeekSchedule {
        match kind {
            PolicyKind::Fcfs => &self.fcfs,
            PolicyKind::Sstf => &self.sstf,
            PolicyKind::Scan => &self.scan,
            PolicyKind::CScan => &self.cscan,
        }
    }

    /// Iterates schedules in canonical comparison order.
    pub fn iter(&self) -> impl Iterator<Item = (PolicyKind, &SeekSchedule)> {
        PolicyKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }

    /// The policy with the lowest total seek time.
    ///
    /// Ties resolve to the first policy in canonical order.
    pub fn best(&self) -> (PolicyKind, &SeekSchedule) {
        let mut best = (PolicyKind::Fcfs, &self.fcfs);
        for (kind, schedule) in self.iter().skip(1) {
            if schedule.total_seek_time < best.1.total_seek_time {
                best = (kind, schedule);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Fcfs, Sstf};

    fn reference_request() -> ScheduleRequest {
        ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53)
    }

    #[test]
    fn test_run_matches_direct_policy_call() {
        let request = reference_request();
        assert_eq!(run(PolicyKind::Fcfs, &request), Fcfs.schedule(&request));
        assert_eq!(run(PolicyKind::Sstf, &request), Sstf.schedule(&request));
    }

    #[test]
    fn test_run_named_resolves_all_display_names() {
        let request = reference_request();
        assert_eq!(run_named("FCFS", &request).total_seek_time, 640);
        assert_eq!(run_named("SSTF", &request).total_seek_time, 236);
        assert_eq!(run_named("SCAN", &request).total_seek_time, 331);
        assert_eq!(run_named("C-SCAN", &request).total_seek_time, 382);
    }

    #[test]
    fn test_run_named_falls_back_to_fcfs() {
        let request = reference_request();
        let fallback = run_named("LOOK", &request);
        assert_eq!(fallback, run(PolicyKind::Fcfs, &request));
    }

    #[test]
    fn test_run_all_reference_totals() {
        let comparison = run_all(&reference_request());
        assert_eq!(comparison.fcfs.total_seek_time, 640);
        assert_eq!(comparison.sstf.total_seek_time, 236);
        assert_eq!(comparison.scan.total_seek_time, 331);
        assert_eq!(comparison.cscan.total_seek_time, 382);
    }

    #[test]
    fn test_best_picks_lowest_total() {
        let comparison = run_all(&reference_request());
        let (kind, schedule) = comparison.best();
        assert_eq!(kind, PolicyKind::Sstf);
        assert_eq!(schedule.total_seek_time, 236);
    }

    #[test]
    fn test_best_tie_resolves_to_canonical_order() {
        // Empty queue: every policy totals 0, FCFS is first in order
        let comparison = run_all(&ScheduleRequest::new(vec![], 53));
        assert_eq!(comparison.best().0, PolicyKind::Fcfs);
    }

    #[test]
    fn test_iter_order_and_get_agree() {
        let comparison = run_all(&reference_request());
        let kinds: Vec<PolicyKind> = comparison.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, PolicyKind::ALL);
        for (kind, schedule) in comparison.iter() {
            assert_eq!(schedule, comparison.get(kind));
        }
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let request = reference_request();
        assert_eq!(run_all(&request), run_all(&request));
    }

    #[test]
    fn test_schedule_serialized_shape() {
        let request = ScheduleRequest::new(vec![60], 53);
        let value = serde_json::to_value(run(PolicyKind::Fcfs, &request)).unwrap();
        assert_eq!(value["sequence"], serde_json::json!([60]));
        assert_eq!(value["operations"][0]["from"], 53);
        assert_eq!(value["operations"][0]["to"], 60);
        assert_eq!(value["operations"][0]["distance"], 7);
        assert_eq!(value["total_seek_time"], 7);
    }
}
