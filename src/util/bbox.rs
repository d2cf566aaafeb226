//! Bounding box.

use std::{fmt, iter::FromIterator};

use cgmath::{num_traits::Float, Point3};

/// 3D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3d<S> {
    /// Minimum.
    min: Point3<S>,
    /// Maximum.
    max: Point3<S>,
}

impl<S: Float> BoundingBox3d<S> {
    /// Returns minimum xyz.
    pub fn min(&self) -> Point3<S> {
        self.min
    }

    /// Returns maximum xyz.
    pub fn max(&self) -> Point3<S> {
        self.max
    }

    /// Extends the bounding box to contain the given point.
    pub fn insert(&self, p: Point3<S>) -> Self {
        Self {
            min: element_wise_apply(self.min, p, Float::min),
            max: element_wise_apply(self.max, p, Float::max),
        }
    }

    /// Returns the bounding box of the points, if any.
    pub fn from_points(iter: impl IntoIterator<Item = Point3<S>>) -> Option<Self> {
        iter.into_iter().collect::<OptionalBoundingBox3d<S>>().bbox
    }
}

impl<S: Float> From<Point3<S>> for BoundingBox3d<S> {
    fn from(p: Point3<S>) -> Self {
        Self { min: p, max: p }
    }
}

impl<S: Float + fmt::Display> fmt::Display for BoundingBox3d<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) .. ({}, {}, {})",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

/// 3D bounding box, which can be empty.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OptionalBoundingBox3d<S> {
    /// Bounding box.
    bbox: Option<BoundingBox3d<S>>,
}

impl<S: Float> FromIterator<Point3<S>> for OptionalBoundingBox3d<S> {
    fn from_iter<T: IntoIterator<Item = Point3<S>>>(iter: T) -> Self {
        let bbox = iter.into_iter().fold(None, |bbox: Option<BoundingBox3d<S>>, p| {
            Some(bbox.map_or_else(|| p.into(), |bbox| bbox.insert(p)))
        });
        Self { bbox }
    }
}

/// Applies the function to each component pair.
fn element_wise_apply<S: Float>(a: Point3<S>, b: Point3<S>, f: impl Fn(S, S) -> S) -> Point3<S> {
    Point3::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(BoundingBox3d::<f32>::from_points(Vec::new()), None);
    }

    #[test]
    fn contains_all_points() {
        let bbox = BoundingBox3d::from_points(vec![
            Point3::new(1.0f32, -2.0, 3.0),
            Point3::new(-1.0, 5.0, 0.5),
            Point3::new(0.0, 0.0, 4.0),
        ])
        .unwrap();
        assert_eq!(bbox.min(), Point3::new(-1.0, -2.0, 0.5));
        assert_eq!(bbox.max(), Point3::new(1.0, 5.0, 4.0));
        assert_eq!(bbox.to_string(), "(-1, -2, 0.5) .. (1, 5, 4)");
    }
}
