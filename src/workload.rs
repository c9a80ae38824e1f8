//! Random request-queue generation.
//!
//! Produces workloads for demos and comparative runs: distinct cylinders
//! uniformly drawn from the geometry, never equal to the current head
//! position (a request already under the head is not an interesting
//! scheduling decision).

use rand::Rng;

use crate::models::{Cylinder, DiskGeometry};

/// Smallest queue produced by [`random_queue`].
pub const MIN_QUEUE_LEN: usize = 5;

/// Largest queue produced by [`random_queue`].
pub const MAX_QUEUE_LEN: usize = 10;

/// Generates a queue of 5–10 distinct requests.
pub fn random_queue<R: Rng>(geometry: &DiskGeometry, head: Cylinder, rng: &mut R) -> Vec<Cylinder> {
    let len = rng.random_range(MIN_QUEUE_LEN..=MAX_QUEUE_LEN);
    random_queue_of(len, geometry, head, rng)
}

/// Generates a queue of exactly `len` distinct requests.
///
/// `len` is clamped to the number of eligible cylinders (geometry minus
/// the head position) so generation always terminates.
pub fn random_queue_of<R: Rng>(
    len: usize,
    geometry: &DiskGeometry,
    head: Cylinder,
    rng: &mut R,
) -> Vec<Cylinder> {
    let eligible = geometry.cylinder_count() - u64::from(geometry.contains(head));
    let len = len.min(eligible as usize);

    let mut queue: Vec<Cylinder> = Vec::with_capacity(len);
    while queue.len() < len {
        let candidate = rng.random_range(0..=geometry.max_cylinder);
        if candidate != head && !queue.contains(&candidate) {
            queue.push(candidate);
        }
    }
    queue
}
