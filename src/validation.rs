//! Input validation for schedule requests.
//!
//! The policies are total over well-formed numeric input and never
//! validate; out-of-geometry requests simply produce out-of-geometry
//! schedules. Callers that want strict rejection instead run their
//! requests through here first. Detects:
//! - Geometry below the minimum meaningful size
//! - Head position outside the geometry
//! - Requests outside the geometry
//! - Duplicate requests

use std::collections::HashSet;

use crate::models::Cylinder;
use crate::policy::ScheduleRequest;

/// Smallest `max_cylinder` accepted as a meaningful geometry.
pub const MIN_MAX_CYLINDER: Cylinder = 100;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The disk bound is too small to schedule against.
    InvalidGeometry,
    /// The head starts outside the geometry.
    HeadOutOfRange,
    /// A queued request lies outside the geometry.
    RequestOutOfRange,
    /// The same cylinder is queued more than once.
    DuplicateRequest,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule request.
///
/// Checks:
/// 1. `max_cylinder` is at least [`MIN_MAX_CYLINDER`]
/// 2. The head position lies within the geometry
/// 3. Every queued request lies within the geometry
/// 4. No cylinder is queued twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let geometry = request.geometry;

    if geometry.max_cylinder < MIN_MAX_CYLINDER {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidGeometry,
            format!(
                "Max cylinder {} is below the minimum of {}",
                geometry.max_cylinder, MIN_MAX_CYLINDER
            ),
        ));
    }

    if !geometry.contains(request.head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "Head position {} is outside [0, {}]",
                request.head, geometry.max_cylinder
            ),
        ));
    }

    let mut seen = HashSet::new();
    for (index, &cylinder) in request.queue.iter().enumerate() {
        if !geometry.contains(cylinder) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!(
                    "Request {} at index {} is outside [0, {}]",
                    cylinder, index, geometry.max_cylinder
                ),
            ));
        }
        if !seen.insert(cylinder) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRequest,
                format!("Cylinder {cylinder} is queued more than once"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = ScheduleRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_geometry_too_small() {
        let request = ScheduleRequest::new(vec![10], 5).with_max_cylinder(99);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidGeometry);
    }

    #[test]
    fn test_head_out_of_range() {
        let request = ScheduleRequest::new(vec![10], 200);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HeadOutOfRange);
    }

    #[test]
    fn test_request_out_of_range() {
        let request = ScheduleRequest::new(vec![10, 250], 53);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::RequestOutOfRange);
        assert!(errors[0].message.contains("250"));
    }

    #[test]
    fn test_duplicate_request() {
        let request = ScheduleRequest::new(vec![10, 80, 10], 53);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateRequest);
    }

    #[test]
    fn test_all_errors_collected() {
        // Tiny geometry, head and one request outside it, one duplicate
        let request = ScheduleRequest::new(vec![90, 90, 10], 70).with_max_cylinder(50);
        let errors = validate_request(&request).unwrap_err();

        let kinds: Vec<ValidationErrorKind> = errors.iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&ValidationErrorKind::InvalidGeometry));
        assert!(kinds.contains(&ValidationErrorKind::HeadOutOfRange));
        assert!(kinds.contains(&ValidationErrorKind::RequestOutOfRange));
        assert!(kinds.contains(&ValidationErrorKind::DuplicateRequest));
    }

    #[test]
    fn test_empty_queue_is_valid() {
        assert!(validate_request(&ScheduleRequest::new(vec![], 0)).is_ok());
    }
}
