use glam::DVec2;
use std::collections::HashSet;

/// A raw geographic coordinate: x is longitude-like, y is latitude-like.
/// No projection is applied at parse time.
pub type Point = DVec2;

/// Boundary geometry of a single country
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// One closed ring. Inner rings from the source data are flattened into
    /// the same point sequence.
    Polygon(Vec<Point>),
    /// Independent rings, each drawn as its own closed path
    MultiPolygon(Vec<Vec<Point>>),
}

impl Geometry {
    /// All rings of this geometry, one for a polygon
    pub fn rings(&self) -> &[Vec<Point>] {
        match self {
            Geometry::Polygon(ring) => std::slice::from_ref(ring),
            Geometry::MultiPolygon(rings) => rings,
        }
    }

    /// Total number of points across all rings
    pub fn point_count(&self) -> usize {
        self.rings().iter().map(Vec::len).sum()
    }

    /// Geographic bounding box, `None` when there are no points at all
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.rings().iter().flatten().copied())
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |b, p| Self::new(b.min.min(p), b.max.max(p))))
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive overlap test (touching edges count)
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Grow by `margin` on every side
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds::new(self.min - DVec2::splat(margin), self.max + DVec2::splat(margin))
    }

    /// Map both corners through `f` and re-normalise
    pub fn map(&self, f: impl Fn(DVec2) -> DVec2) -> Bounds {
        let a = f(self.min);
        let b = f(self.max);
        Bounds::new(a.min(b), a.max(b))
    }
}

/// A named country and its boundary. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    id: String,
    name: String,
    geometry: Geometry,
}

impl Country {
    /// Returns `None` if the id or name is empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Option<Self> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { id, name, geometry })
    }

    /// ISO3-like code. Not unique: several territories share "-99".
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }
}

/// Country ids currently highlighted. Owned by the caller, read at draw time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
        vec![
            DVec2::new(x, y),
            DVec2::new(x + size, y),
            DVec2::new(x + size, y + size),
            DVec2::new(x, y + size),
        ]
    }

    #[test]
    fn test_polygon_has_single_ring() {
        let geometry = Geometry::Polygon(square(0.0, 0.0, 1.0));
        assert_eq!(geometry.rings().len(), 1);
        assert_eq!(geometry.point_count(), 4);
    }

    #[test]
    fn test_multipolygon_rings_and_bounds() {
        let geometry = Geometry::MultiPolygon(vec![square(-10.0, -5.0, 2.0), square(20.0, 30.0, 5.0), vec![]]);
        assert_eq!(geometry.rings().len(), 3);
        assert_eq!(geometry.point_count(), 8);

        let bounds = geometry.bounds().unwrap();
        assert_eq!(bounds.min, DVec2::new(-10.0, -5.0));
        assert_eq!(bounds.max, DVec2::new(25.0, 35.0));
    }

    #[test]
    fn test_empty_geometry_has_no_bounds() {
        assert!(Geometry::Polygon(vec![]).bounds().is_none());
        assert!(Geometry::MultiPolygon(vec![vec![], vec![]]).bounds().is_none());
    }

    #[test]
    fn test_country_requires_id_and_name() {
        let geometry = Geometry::Polygon(vec![]);
        assert!(Country::new("", "Nowhere", geometry.clone()).is_none());
        assert!(Country::new("NWH", "", geometry.clone()).is_none());

        let country = Country::new("NWH", "Nowhere", geometry).unwrap();
        assert_eq!(country.id(), "NWH");
        assert_eq!(country.name(), "Nowhere");
    }

    #[test]
    fn test_bounds_intersection() {
        let a = Bounds::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Bounds::new(DVec2::new(10.0, 5.0), DVec2::new(20.0, 6.0));
        let c = Bounds::new(DVec2::new(11.0, 0.0), DVec2::new(12.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_selection_membership() {
        let selection: SelectionSet = ["USA", "CAN", "USA"].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("USA"));
        assert!(!selection.contains("MEX"));
        assert!(SelectionSet::new().is_empty());
    }
}
