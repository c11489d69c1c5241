//! Geographic coordinate bounds shared by cities and restaurants.

use crate::error::ValidationError;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Check that a latitude/longitude pair lies on the globe.
///
/// # Errors
///
/// Returns [`ValidationError::LatitudeOutOfRange`] or
/// [`ValidationError::LongitudeOutOfRange`] for values outside the valid
/// ranges (including `NaN`).
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Reject strings longer than `max` characters.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_bounds_inclusive() {
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn should_reject_latitude_out_of_range() {
        assert_eq!(
            validate_coordinates(90.5, 0.0),
            Err(ValidationError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn should_reject_longitude_out_of_range() {
        assert_eq!(
            validate_coordinates(0.0, -180.1),
            Err(ValidationError::LongitudeOutOfRange(-180.1))
        );
    }

    #[test]
    fn should_reject_nan() {
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert!(check_length("name", "Київ!", 5).is_ok());
        assert!(check_length("name", "Київ!!", 5).is_err());
    }
}
