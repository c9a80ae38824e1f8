//! Seek scheduling policies.
//!
//! Provides the four classic disk-arm policies behind the [`SeekPolicy`]
//! trait, the closed [`PolicyKind`] selector, and the [`ScheduleRequest`]
//! input container.
//!
//! # Usage
//!
//! ```
//! use u_seek::policy::{ScheduleRequest, SeekPolicy, Sstf};
//!
//! let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
//! let schedule = Sstf.schedule(&request);
//! assert_eq!(schedule.sequence[0], 65);
//! assert_eq!(schedule.total_seek_time, 236);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod cscan;
mod fcfs;
mod scan;
mod sstf;

pub use cscan::Cscan;
pub use fcfs::Fcfs;
pub use scan::Scan;
pub use sstf::Sstf;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{Cylinder, Direction, DiskGeometry, SeekSchedule};

/// A disk-arm scheduling policy.
///
/// Implementations are pure: `schedule` allocates its own working state,
/// never mutates the request, and returns an identical result for
/// identical input.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "C-SCAN").
    fn name(&self) -> &'static str;

    /// Computes the full seek schedule for a request.
    fn schedule(&self, request: &ScheduleRequest) -> SeekSchedule;

    /// One-line policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Qualitative strengths of the policy.
    fn advantages(&self) -> &'static [&'static str] {
        &[]
    }

    /// Qualitative weaknesses of the policy.
    fn drawbacks(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Input container for a schedule computation.
///
/// The queue is a sequence of pending cylinder requests; its order matters
/// only to FCFS. The engine does not validate ranges or uniqueness; see
/// [`crate::validation`] for callers that want strict input checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Pending cylinder requests, in arrival order.
    pub queue: Vec<Cylinder>,
    /// Current head position.
    pub head: Cylinder,
    /// Disk bounds, used by the sweep-based policies.
    pub geometry: DiskGeometry,
}

impl ScheduleRequest {
    /// Creates a request against the default geometry.
    pub fn new(queue: Vec<Cylinder>, head: Cylinder) -> Self {
        Self {
            queue,
            head,
            geometry: DiskGeometry::default(),
        }
    }

    /// Sets the disk geometry.
    pub fn with_geometry(mut self, geometry: DiskGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the highest addressable cylinder.
    pub fn with_max_cylinder(mut self, max_cylinder: Cylinder) -> Self {
        self.geometry = DiskGeometry::new(max_cylinder);
        self
    }
}

/// The closed set of supported policies.
///
/// Selection is an exhaustive match: adding a policy is a compile-time
/// change, not a runtime string lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First Come First Serve.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// SCAN (elevator), rightward by default.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN.
    #[serde(rename = "C-SCAN")]
    CScan,
}

static SCAN_RIGHT: Scan = Scan {
    direction: Direction::Right,
};

impl PolicyKind {
    /// All policies, in canonical comparison order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
    ];

    /// Display name of the policy.
    pub fn name(&self) -> &'static str {
        self.policy().name()
    }

    /// Resolves a policy by its display name.
    ///
    /// Returns `None` for unrecognized names; callers that want the
    /// historical never-fail behavior use [`crate::dispatch::run_named`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FCFS" => Some(PolicyKind::Fcfs),
            "SSTF" => Some(PolicyKind::Sstf),
            "SCAN" => Some(PolicyKind::Scan),
            "C-SCAN" => Some(PolicyKind::CScan),
            _ => None,
        }
    }

    /// The policy implementation for this kind.
    ///
    /// SCAN resolves to the default rightward sweep; build a
    /// [`Scan`] directly for a leftward pass.
    pub fn policy(&self) -> &'static dyn SeekPolicy {
        match self {
            PolicyKind::Fcfs => &Fcfs,
            PolicyKind::Sstf => &Sstf,
            PolicyKind::Scan => &SCAN_RIGHT,
            PolicyKind::CScan => &Cscan,
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits a queue into requests below the head and at-or-above the head.
///
/// Neither half is sorted; each policy orders its halves for its own
/// sweep direction.
pub(crate) fn split_at_head(queue: &[Cylinder], head: Cylinder) -> (Vec<Cylinder>, Vec<Cylinder>) {
    queue.iter().copied().partition(|&cylinder| cylinder < head)
}

/// Services requests in arrival order. See [`Fcfs`].
pub fn fcfs(queue: &[Cylinder], head: Cylinder) -> SeekSchedule {
    Fcfs.schedule(&ScheduleRequest::new(queue.to_vec(), head))
}

/// Greedily services the nearest request. See [`Sstf`].
pub fn sstf(queue: &[Cylinder], head: Cylinder) -> SeekSchedule {
    Sstf.schedule(&ScheduleRequest::new(queue.to_vec(), head))
}

/// Sweeps to the edge, then reverses. See [`Scan`].
pub fn scan(
    queue: &[Cylinder],
    head: Cylinder,
    geometry: DiskGeometry,
    direction: Direction,
) -> SeekSchedule {
    Scan::with_direction(direction)
        .schedule(&ScheduleRequest::new(queue.to_vec(), head).with_geometry(geometry))
}

/// Sweeps rightward with a circular wrap. See [`Cscan`].
pub fn cscan(queue: &[Cylinder], head: Cylinder, geometry: DiskGeometry) -> SeekSchedule {
    Cscan.schedule(&ScheduleRequest::new(queue.to_vec(), head).with_geometry(geometry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_round_trip() {
        for kind in PolicyKind::ALL {
            assert_eq!(PolicyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PolicyKind::from_name("LOOK"), None);
        assert_eq!(PolicyKind::from_name("fcfs"), None);
    }

    #[test]
    fn test_policy_metadata() {
        for kind in PolicyKind::ALL {
            let policy = kind.policy();
            assert!(!policy.description().is_empty());
            assert!(!policy.advantages().is_empty());
            assert!(!policy.drawbacks().is_empty());
        }
    }

    #[test]
    fn test_split_at_head() {
        let (left, right) = split_at_head(&[98, 183, 37, 122, 14, 124, 65, 67], 53);
        assert_eq!(left, vec![37, 14]);
        assert_eq!(right, vec![98, 183, 122, 124, 65, 67]);
    }

    #[test]
    fn test_split_head_counts_as_right() {
        let (left, right) = split_at_head(&[53, 52, 54], 53);
        assert_eq!(left, vec![52]);
        assert_eq!(right, vec![53, 54]);
    }

    #[test]
    fn test_kind_serializes_to_display_name() {
        let json = serde_json::to_string(&PolicyKind::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
    }

    #[test]
    fn test_free_function_wrappers() {
        let queue = [98, 183, 37, 122, 14, 124, 65, 67];
        let geometry = DiskGeometry::default();
        assert_eq!(fcfs(&queue, 53).total_seek_time, 640);
        assert_eq!(sstf(&queue, 53).total_seek_time, 236);
        assert_eq!(scan(&queue, 53, geometry, Direction::Right).total_seek_time, 331);
        assert_eq!(cscan(&queue, 53, geometry).total_seek_time, 382);
    }
}
