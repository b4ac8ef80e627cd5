use crate::city::City;
use geo::{Euclidean, Length, Line};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identity of a road: the unordered pair of its endpoint names.
///
/// Stored with the lexicographically smaller name first, so `A-B` and `B-A`
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadKey {
    start: String,
    end: String,
}

impl RoadKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl fmt::Display for RoadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A straight road between two cities.
///
/// The endpoints are kept in canonical order (smaller name first). Equality,
/// hashing and ordering only look at the endpoint names, so a road built from
/// `(a, b)` is the same road as one built from `(b, a)`.
///
/// # Examples
///
/// ```
/// use pmquad_types::{city::City, road::Road};
/// use std::sync::Arc;
///
/// let a = Arc::new(City::at("Alpha", 0.0, 0.0));
/// let b = Arc::new(City::at("Beta", 3.0, 4.0));
///
/// let forward = Road::new(a.clone(), b.clone());
/// let backward = Road::new(b, a);
/// assert_eq!(forward, backward);
/// assert_eq!(forward.start().name(), "Alpha");
/// assert_eq!(forward.length(), 5.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    start: Arc<City>,
    end: Arc<City>,
}

impl Road {
    pub fn new(a: Arc<City>, b: Arc<City>) -> Self {
        if a.name() <= b.name() {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> &Arc<City> {
        &self.start
    }

    pub fn end(&self) -> &Arc<City> {
        &self.end
    }

    pub fn endpoints(&self) -> [&Arc<City>; 2] {
        [&self.start, &self.end]
    }

    pub fn key(&self) -> RoadKey {
        RoadKey {
            start: self.start.name().to_string(),
            end: self.end.name().to_string(),
        }
    }

    /// Whether `name` is one of the endpoints.
    pub fn touches(&self, name: &str) -> bool {
        self.start.name() == name || self.end.name() == name
    }

    /// The road's geometry.
    pub fn line(&self) -> Line<f64> {
        Line::new(self.start.location(), self.end.location())
    }

    pub fn length(&self) -> f64 {
        Euclidean.length(&self.line())
    }

    fn names(&self) -> (&str, &str) {
        (self.start.name(), self.end.name())
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.names() == other.names()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.names().hash(state);
    }
}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Road {
    fn cmp(&self, other: &Self) -> Ordering {
        self.names().cmp(&other.names())
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.name(), self.end.name())
    }
}
