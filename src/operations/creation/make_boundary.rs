use crate::boundary::{BoundaryId, BoundaryKind, BoundaryStore};
use crate::error::Result;
use crate::math::Matrix3;
use crate::path::BuildPath;

/// Builds a boundary from a path string and registers it in the store.
///
/// Connectors in the path resolve against boundaries already in the store,
/// so boundaries can be chained end to end in registration order.
pub struct MakeBoundary {
    name: String,
    kind: BoundaryKind,
    path: BuildPath,
}

impl MakeBoundary {
    /// Creates a new `MakeBoundary` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: BoundaryKind, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            path: BuildPath::new(path),
        }
    }

    /// Sets the affine transform applied to the path coordinates.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix3) -> Self {
        self.path = self.path.with_transform(transform);
        self
    }

    /// Reverses the boundary direction, which flips its normals.
    #[must_use]
    pub fn flip_normals(mut self, flip: bool) -> Self {
        self.path = self.path.flip_normals(flip);
        self
    }

    /// Executes the operation, returning the new boundary's ID.
    ///
    /// # Errors
    ///
    /// Returns the path errors of [`BuildPath::execute`], or
    /// `BoundaryError::DuplicateName` if the name is taken.
    pub fn execute(&self, store: &mut BoundaryStore) -> Result<BoundaryId> {
        let spline = self.path.execute(store)?;
        store.add_boundary(self.name.clone(), self.kind, spline)
    }
}
