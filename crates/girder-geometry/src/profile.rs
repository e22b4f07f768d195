use crate::{CrossSection, Dimensions, Point2, Result};

pub const I_BEAM_VERTEX_COUNT: usize = 12;

/// Closed polygon outline of a cross-section.
///
/// The last point connects back to the first; the closing point is not
/// repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    points: Vec<Point2>,
}

impl Profile {
    pub(crate) fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let count = self.points.len();
        (0..count).map(move |idx| (self.points[idx], self.points[(idx + 1) % count]))
    }

    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut min = *first;
        let mut max = *first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    pub fn extent(&self) -> (f64, f64) {
        match self.bounds() {
            Some((min, max)) => (max.x - min.x, max.y - min.y),
            None => (0.0, 0.0),
        }
    }

    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

/// Validates `dims` and builds the I-beam outline.
///
/// Returns `Ok(None)` when no flange/web thicknesses are given; the caller
/// should then build a plain `width x height x length` box.
pub fn build_profile(dims: &Dimensions) -> Result<Option<Profile>> {
    Ok(CrossSection::from_dimensions(dims)?.profile())
}
