//! Geometry kernel: regions, quadrants and the exact predicates the index is
//! built on.
//!
//! Point ownership uses half-open bounds: a region covers `[min, max)` on both
//! axes, so a point on a split line belongs to the east/south child. Pruning
//! tests (circle and segment against a region) use the closed bounds, which
//! can only ever keep a region that a half-open test would have dropped.

use geo::{Coord, Distance, Euclidean, Intersects, Line, Point, Rect};

/// One of the four children of an internal node.
///
/// Coordinates follow screen orientation: y grows towards the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Position of this quadrant in an internal node's child array.
    pub const fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Quadrant> {
        match index {
            0 => Some(Quadrant::NorthWest),
            1 => Some(Quadrant::NorthEast),
            2 => Some(Quadrant::SouthWest),
            3 => Some(Quadrant::SouthEast),
            _ => None,
        }
    }
}

/// Axis-aligned rectangular region covered by a quadtree node.
///
/// A thin wrapper around `geo::Rect` that adds the quadtree-specific
/// operations: half-open containment and splitting into quadrants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    rect: Rect<f64>,
}

impl Region {
    /// Create a region from its origin (north-west corner) and extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmquad::compute::geometry::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 128.0, 64.0);
    /// assert_eq!(region.width(), 128.0);
    /// assert_eq!(region.center().x(), 64.0);
    /// ```
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: x, y: y },
                geo::coord! { x: x + width, y: y + height },
            ),
        }
    }

    fn from_corners(min: Coord<f64>, max: Coord<f64>) -> Self {
        Self {
            rect: Rect::new(min, max),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    pub fn origin(&self) -> Point<f64> {
        Point::from(self.rect.min())
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn center(&self) -> Point<f64> {
        Point::from(self.rect.center())
    }

    /// A region with no area contains nothing.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn as_rect(&self) -> &Rect<f64> {
        &self.rect
    }

    /// Half-open containment: `min <= p < max` on both axes.
    pub fn contains_point(&self, point: Point<f64>) -> bool {
        point.x() >= self.min_x()
            && point.x() < self.max_x()
            && point.y() >= self.min_y()
            && point.y() < self.max_y()
    }

    /// Closed containment: `min <= p <= max` on both axes.
    pub fn covers_point(&self, point: Point<f64>) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// Whether the whole segment lies in the closed region.
    ///
    /// The region is convex, so checking both endpoints is enough.
    pub fn covers_segment(&self, segment: &Line<f64>) -> bool {
        self.covers_point(segment.start.into()) && self.covers_point(segment.end.into())
    }

    /// The quadrant whose half-open child region holds `point`.
    ///
    /// Only meaningful for points inside this region.
    pub fn quadrant_of(&self, point: Point<f64>) -> Quadrant {
        let center = self.center();
        let east = point.x() >= center.x();
        let south = point.y() >= center.y();
        match (south, east) {
            (false, false) => Quadrant::NorthWest,
            (false, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthWest,
            (true, true) => Quadrant::SouthEast,
        }
    }

    /// Child region for `quadrant`.
    ///
    /// Children share the parent's outer edges and meet exactly at the
    /// center, so the four of them tile the parent with no gap.
    pub fn child(&self, quadrant: Quadrant) -> Region {
        let min = self.rect.min();
        let max = self.rect.max();
        let mid = self.rect.center();
        match quadrant {
            Quadrant::NorthWest => Region::from_corners(min, mid),
            Quadrant::NorthEast => Region::from_corners(
                geo::coord! { x: mid.x, y: min.y },
                geo::coord! { x: max.x, y: mid.y },
            ),
            Quadrant::SouthWest => Region::from_corners(
                geo::coord! { x: min.x, y: mid.y },
                geo::coord! { x: mid.x, y: max.y },
            ),
            Quadrant::SouthEast => Region::from_corners(mid, max),
        }
    }

    /// All four child regions in child order.
    pub fn quadrants(&self) -> [Region; 4] {
        Quadrant::ALL.map(|quadrant| self.child(quadrant))
    }
}

/// Distance from `point` to the nearest point of `[min, max]` along one axis,
/// signed relative to `point` and zero when `point` lies inside the interval.
#[inline]
fn axis_gap(value: f64, min: f64, max: f64) -> f64 {
    let (min, max) = (min - value, max - value);
    if max < 0.0 {
        // interval entirely before the point: its max edge is nearest
        max
    } else if min > 0.0 {
        min
    } else {
        // interval straddles the point: clamp to the point itself
        0.0
    }
}

/// Whether the closed disc around `center` touches the closed `region`.
///
/// The region is translated so the circle sits at the origin; on each axis
/// the nearest edge is picked (or zero when the region straddles that axis),
/// which selects the nearest corner, the nearest edge, or the center itself.
/// The squared gap is compared with `radius²` so no square root is taken.
///
/// # Examples
///
/// ```
/// use geo::Point;
/// use pmquad::compute::geometry::{Region, circle_intersects_region};
///
/// let region = Region::new(10.0, 10.0, 10.0, 10.0);
/// assert!(circle_intersects_region(Point::new(5.0, 15.0), 5.0, &region));
/// assert!(!circle_intersects_region(Point::new(5.0, 5.0), 5.0, &region));
/// ```
pub fn circle_intersects_region(center: Point<f64>, radius: f64, region: &Region) -> bool {
    let dx = axis_gap(center.x(), region.min_x(), region.max_x());
    let dy = axis_gap(center.y(), region.min_y(), region.max_y());
    dx * dx + dy * dy <= radius * radius
}

/// Lower bound on the distance from `point` to anything inside `region`.
pub fn point_to_region_distance(point: Point<f64>, region: &Region) -> f64 {
    let dx = axis_gap(point.x(), region.min_x(), region.max_x());
    let dy = axis_gap(point.y(), region.min_y(), region.max_y());
    dx.hypot(dy)
}

/// Whether the segment touches the closed `region`.
///
/// Degenerate regions never intersect anything.
pub fn segment_intersects_region(segment: &Line<f64>, region: &Region) -> bool {
    if region.is_degenerate() {
        return false;
    }
    segment.intersects(region.as_rect())
}

/// Euclidean distance between two points.
pub fn point_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// Shortest distance from `point` to the closed segment.
///
/// Points exactly on the segment report `0.0`, so zero-radius range queries
/// match roads passing through the query point.
///
/// # Examples
///
/// ```
/// use geo::{Line, Point, coord};
/// use pmquad::compute::geometry::point_to_segment_distance;
///
/// let segment = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
/// assert_eq!(point_to_segment_distance(Point::new(5.0, 3.0), &segment), 3.0);
/// assert_eq!(point_to_segment_distance(Point::new(13.0, 4.0), &segment), 5.0);
/// ```
pub fn point_to_segment_distance(point: Point<f64>, segment: &Line<f64>) -> f64 {
    Euclidean.distance(&point, segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Line<f64> {
        Line::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 })
    }

    #[test]
    fn test_half_open_containment() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(region.contains_point(Point::new(0.0, 0.0)));
        assert!(region.contains_point(Point::new(9.99, 9.99)));
        assert!(!region.contains_point(Point::new(10.0, 5.0)));
        assert!(!region.contains_point(Point::new(5.0, 10.0)));
        assert!(!region.contains_point(Point::new(-0.01, 5.0)));
    }

    #[test]
    fn test_closed_segment_cover() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(region.covers_point(Point::new(10.0, 10.0)));
        assert!(region.covers_segment(&segment(0.0, 0.0, 10.0, 10.0)));
        assert!(region.covers_segment(&segment(10.0, 0.0, 10.0, 10.0)));
        assert!(!region.covers_segment(&segment(5.0, 5.0, 10.5, 5.0)));
        assert!(!region.covers_segment(&segment(-5.0, 5.0, 15.0, 5.0)));
    }

    #[test]
    fn test_quadrant_routing_on_split_lines() {
        let universe = Region::new(0.0, 0.0, 1024.0, 1024.0);
        assert_eq!(
            universe.quadrant_of(Point::new(512.0, 512.0)),
            Quadrant::SouthEast
        );
        assert_eq!(
            universe.quadrant_of(Point::new(511.0, 512.0)),
            Quadrant::SouthWest
        );
        assert_eq!(
            universe.quadrant_of(Point::new(512.0, 511.0)),
            Quadrant::NorthEast
        );
        assert_eq!(
            universe.quadrant_of(Point::new(0.0, 0.0)),
            Quadrant::NorthWest
        );
    }

    #[test]
    fn test_quadrant_of_agrees_with_child_containment() {
        let region = Region::new(0.0, 0.0, 16.0, 16.0);
        for x in 0..16 {
            for y in 0..16 {
                let p = Point::new(x as f64, y as f64);
                let owners: Vec<Quadrant> = Quadrant::ALL
                    .into_iter()
                    .filter(|q| region.child(*q).contains_point(p))
                    .collect();
                assert_eq!(owners, vec![region.quadrant_of(p)], "point {:?}", p);
            }
        }
    }

    #[test]
    fn test_children_tile_parent() {
        let region = Region::new(8.0, 4.0, 32.0, 16.0);
        let [nw, ne, sw, se] = region.quadrants();

        for child in [nw, ne, sw, se] {
            assert_eq!(child.width(), 16.0);
            assert_eq!(child.height(), 8.0);
        }
        assert_eq!(nw.origin(), Point::new(8.0, 4.0));
        assert_eq!(ne.origin(), Point::new(24.0, 4.0));
        assert_eq!(sw.origin(), Point::new(8.0, 12.0));
        assert_eq!(se.origin(), Point::new(24.0, 12.0));
        assert_eq!(se.max_x(), region.max_x());
        assert_eq!(se.max_y(), region.max_y());
    }

    #[test]
    fn test_quadrant_index_round_trip() {
        for quadrant in Quadrant::ALL {
            assert_eq!(Quadrant::from_index(quadrant.index()), Some(quadrant));
        }
        assert_eq!(Quadrant::from_index(4), None);
    }

    #[test]
    fn test_circle_region_cases() {
        let region = Region::new(10.0, 10.0, 10.0, 10.0);

        // center inside
        assert!(circle_intersects_region(Point::new(15.0, 15.0), 0.0, &region));
        // due west, touching the edge exactly
        assert!(circle_intersects_region(Point::new(5.0, 15.0), 5.0, &region));
        assert!(!circle_intersects_region(Point::new(4.9, 15.0), 5.0, &region));
        // due south
        assert!(circle_intersects_region(Point::new(15.0, 25.0), 5.0, &region));
        // corner: distance to (20, 20) from (23, 24) is 5
        assert!(circle_intersects_region(Point::new(23.0, 24.0), 5.0, &region));
        assert!(!circle_intersects_region(Point::new(23.0, 24.0), 4.99, &region));
        // corner on the north-west side
        assert!(circle_intersects_region(Point::new(7.0, 6.0), 5.0, &region));
        assert!(!circle_intersects_region(Point::new(6.0, 6.0), 5.0, &region));
    }

    #[test]
    fn test_zero_radius_circle_is_point_test_on_closed_bounds() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(circle_intersects_region(Point::new(10.0, 10.0), 0.0, &region));
        assert!(!circle_intersects_region(Point::new(10.0, 10.5), 0.0, &region));
    }

    #[test]
    fn test_point_to_region_distance() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(point_to_region_distance(Point::new(5.0, 5.0), &region), 0.0);
        assert_eq!(point_to_region_distance(Point::new(13.0, 5.0), &region), 3.0);
        assert_eq!(point_to_region_distance(Point::new(13.0, 14.0), &region), 5.0);
        assert_eq!(point_to_region_distance(Point::new(-3.0, -4.0), &region), 5.0);
    }

    #[test]
    fn test_segment_region_intersection() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment_intersects_region(&segment(-5.0, 5.0, 15.0, 5.0), &region));
        assert!(segment_intersects_region(&segment(2.0, 2.0, 3.0, 3.0), &region));
        assert!(segment_intersects_region(&segment(10.0, -5.0, 10.0, 15.0), &region));
        assert!(!segment_intersects_region(&segment(11.0, 0.0, 20.0, 9.0), &region));
        assert!(!segment_intersects_region(&segment(-5.0, 4.0, 4.0, -5.0), &region));
    }

    #[test]
    fn test_degenerate_region_rejects_segments() {
        let empty = Region::new(0.0, 0.0, 0.0, 0.0);
        assert!(!segment_intersects_region(&segment(-1.0, -1.0, 1.0, 1.0), &empty));
    }

    #[test]
    fn test_point_to_segment_distance() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        assert_eq!(point_to_segment_distance(Point::new(5.0, 0.0), &s), 0.0);
        assert_eq!(point_to_segment_distance(Point::new(-3.0, 4.0), &s), 5.0);
        assert_eq!(point_to_segment_distance(Point::new(5.0, -2.0), &s), 2.0);

        let diagonal = segment(0.0, 0.0, 4.0, 2.0);
        assert_eq!(point_to_segment_distance(Point::new(2.0, 1.0), &diagonal), 0.0);

        let dot = segment(3.0, 3.0, 3.0, 3.0);
        assert_eq!(point_to_segment_distance(Point::new(6.0, 7.0), &dot), 5.0);
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(point_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }
}
