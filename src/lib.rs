//! Disk-arm seek scheduling engine.
//!
//! Computes and compares seek schedules for a single disk arm under the
//! four classic policies: FCFS, SSTF, SCAN ("elevator"), and C-SCAN.
//! Each policy is a pure function over a request queue, a head position,
//! and a disk geometry. It returns a complete [`models::SeekSchedule`]
//! (service order, per-step seek operations, aggregate seek time) with no
//! shared state between invocations.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Cylinder`, `Direction`, `DiskGeometry`,
//!   `SeekOp`, `SeekSchedule`, `ScheduleRecorder`
//! - **`policy`**: The four scheduling policies behind the [`policy::SeekPolicy`]
//!   trait, plus `PolicyKind` and the `ScheduleRequest` input container
//! - **`dispatch`**: Policy selection and the run-all comparison entry point
//! - **`metrics`**: Derived schedule statistics (throughput, max seek, counts)
//! - **`validation`**: Optional input integrity checks (range, duplicates, geometry)
//! - **`workload`**: Random request-queue generation
//!
//! # Architecture
//!
//! The engine is synchronous and allocation-local: every call builds its own
//! working copies and folds head position and running totals through an
//! explicit accumulator. Presentation concerns (charting, stepped playback)
//! belong to callers; the engine always returns the complete schedule eagerly.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 5.4
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod dispatch;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;
pub mod workload;
