use crate::geometry::Spline;

slotmap::new_key_type! {
    /// Unique identifier for a boundary in the boundary store.
    pub struct BoundaryId;
}

/// Physical role of a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Fixed-potential wall (Dirichlet). Only these occlude visibility tests.
    Dirichlet,
    /// Fixed-flux surface.
    Neumann,
    /// Symmetry plane.
    Symmetry,
    /// Purely geometric curve with no physical surface.
    Virtual,
}

impl BoundaryKind {
    /// Returns `true` for physical walls.
    #[must_use]
    pub fn is_wall(self) -> bool {
        self == Self::Dirichlet
    }
}

/// Data associated with a registered boundary.
#[derive(Debug, Clone)]
pub struct BoundaryData {
    /// Unique boundary name, used by `name:FIRST` / `name:LAST` connectors.
    pub name: String,
    /// Physical role of the boundary.
    pub kind: BoundaryKind,
    /// The boundary geometry. Its segments carry this boundary's id.
    pub spline: Spline,
}
