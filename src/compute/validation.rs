//! Validation for coordinates, radii and universe extents.

use crate::error::{PmError, Result};
use geo::Point;
use pmquad_types::City;

/// Validates that both coordinates of a point are finite.
///
/// # Examples
///
/// ```
/// use pmquad::compute::validation::validate_point;
/// use geo::Point;
///
/// assert!(validate_point(&Point::new(10.0, 20.0)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 20.0)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(PmError::InvalidInput(format!(
            "X coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(PmError::InvalidInput(format!(
            "Y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a city's location.
pub fn validate_city(city: &City) -> Result<()> {
    validate_point(&city.location())
        .map_err(|e| PmError::InvalidInput(format!("City {}: {}", city.name(), e)))
}

/// Validates a query radius: finite and non-negative.
///
/// # Examples
///
/// ```
/// use pmquad::compute::validation::validate_radius;
///
/// assert!(validate_radius(0.0).is_ok());
/// assert!(validate_radius(-1.0).is_err());
/// assert!(validate_radius(f64::INFINITY).is_err());
/// ```
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(PmError::InvalidInput(format!(
            "Radius must be finite, got: {}",
            radius
        )));
    }

    if radius < 0.0 {
        return Err(PmError::InvalidInput(format!(
            "Radius must be non-negative, got: {}",
            radius
        )));
    }

    Ok(())
}

/// Validates universe extents: finite and strictly positive.
pub fn validate_extent(width: f64, height: f64) -> Result<()> {
    for (label, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PmError::InvalidInput(format!(
                "Universe {} must be finite and positive, got: {}",
                label, value
            )));
        }
    }
    Ok(())
}
