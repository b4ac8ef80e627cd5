use geo::Point;
use serde::{Deserialize, Serialize};

/// A named location on the map.
///
/// Cities are created by the caller's dictionary and shared with the index as
/// `Arc<City>`. The name is the identity used by every membership check in the
/// index; the radius and color are display metadata carried along untouched.
///
/// # Examples
///
/// ```
/// use pmquad_types::city::City;
///
/// let baltimore = City::new("Baltimore", 10.0, 20.0, 5.0, "red");
/// assert_eq!(baltimore.name(), "Baltimore");
/// assert_eq!(baltimore.x(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    location: Point<f64>,
    radius: f64,
    color: String,
}

impl City {
    /// Create a city at `(x, y)`.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name of the city
    /// * `x` - X coordinate
    /// * `y` - Y coordinate
    /// * `radius` - Display radius
    /// * `color` - Display color tag
    pub fn new(
        name: impl Into<String>,
        x: f64,
        y: f64,
        radius: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: Point::new(x, y),
            radius,
            color: color.into(),
        }
    }

    /// Create a city with no display metadata.
    pub fn at(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(name, x, y, 0.0, "black")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Point<f64> {
        self.location
    }

    pub fn x(&self) -> f64 {
        self.location.x()
    }

    pub fn y(&self) -> f64 {
        self.location.y()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Whether this city sits at exactly the same coordinates as `other`.
    pub fn same_location(&self, other: &City) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}
