use crate::boundary::{BoundaryId, BoundaryKind, BoundaryStore};
use crate::error::Result;
use crate::geometry::Spline;
use crate::math::Point2;

/// Registers a single straight boundary between two points.
pub struct MakeLine {
    name: String,
    kind: BoundaryKind,
    x1: Point2,
    x2: Point2,
}

impl MakeLine {
    /// Creates a new `MakeLine` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: BoundaryKind, x1: Point2, x2: Point2) -> Self {
        Self {
            name: name.into(),
            kind,
            x1,
            x2,
        }
    }

    /// Executes the operation, returning the new boundary's ID.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::DuplicateName` if the name is taken.
    pub fn execute(&self, store: &mut BoundaryStore) -> Result<BoundaryId> {
        store.add_boundary(self.name.clone(), self.kind, Spline::line(self.x1, self.x2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let mut store = BoundaryStore::new();
        let a = Point2::new(0.1, 0.2);
        let b = Point2::new(-3.0, 4.5);
        let id = MakeLine::new("inlet", BoundaryKind::Neumann, a, b)
            .execute(&mut store)
            .unwrap();
        let spline = &store.boundary(id).unwrap().spline;
        assert_eq!(spline.first_point(), a);
        assert_eq!(spline.last_point(), b);
        assert!((spline.length() - (b - a).norm()).abs() < 1e-12);
    }
}
