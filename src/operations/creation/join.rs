use crate::boundary::{BoundaryId, BoundaryStore};
use crate::error::Result;
use crate::geometry::Spline;

/// Concatenates several registered boundaries into one composite spline.
///
/// The segments keep their owning boundary, so wall classification of the
/// composite follows each original boundary.
pub struct JoinBoundaries {
    boundaries: Vec<BoundaryId>,
}

impl JoinBoundaries {
    /// Creates a new `JoinBoundaries` operation.
    #[must_use]
    pub fn new(boundaries: Vec<BoundaryId>) -> Self {
        Self { boundaries }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::NotFound` for an unknown ID, or
    /// `GeometryError::Degenerate` if no boundaries are given.
    pub fn execute(&self, store: &BoundaryStore) -> Result<Spline> {
        let splines = self
            .boundaries
            .iter()
            .map(|&id| store.boundary(id).map(|b| &b.spline))
            .collect::<Result<Vec<_>>>()?;
        Spline::join(splines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryKind, WallQuery};
    use crate::operations::creation::MakeBoundary;

    #[test]
    fn joined_segments_keep_their_owner() {
        let mut store = BoundaryStore::new();
        let wall = MakeBoundary::new("wall", BoundaryKind::Dirichlet, "M 0 0 L 1 0")
            .execute(&mut store)
            .unwrap();
        let open = MakeBoundary::new("open", BoundaryKind::Neumann, "M wall:LAST L 1 1")
            .execute(&mut store)
            .unwrap();

        let joined = JoinBoundaries::new(vec![wall, open]).execute(&store).unwrap();
        assert_eq!(joined.num_segments(), 2);
        assert_eq!(joined.segment(1).unwrap().index(), 1);
        assert!(store.is_wall(joined.segment(0).unwrap()));
        assert!(!store.is_wall(joined.segment(1).unwrap()));
    }

    #[test]
    fn empty_join_is_degenerate() {
        let store = BoundaryStore::new();
        assert!(JoinBoundaries::new(Vec::new()).execute(&store).is_err());
    }
}
