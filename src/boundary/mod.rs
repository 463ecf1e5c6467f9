mod data;

pub use data::{BoundaryData, BoundaryId, BoundaryKind};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{BoundaryError, Result};
use crate::geometry::{Segment, Spline};

/// Resolves boundary names used by path connectors.
pub trait ConnectorSource {
    /// Returns the spline registered under `name`.
    fn find_spline(&self, name: &str) -> Option<&Spline>;
}

/// Answers whether a segment is part of a physical wall.
pub trait WallQuery {
    /// Returns `true` if `segment` belongs to a wall (Dirichlet) boundary.
    fn is_wall(&self, segment: &Segment) -> bool;
}

/// Treats every segment as a wall, for splines not registered in a store.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllWalls;

impl WallQuery for AllWalls {
    fn is_wall(&self, _segment: &Segment) -> bool {
        true
    }
}

/// Central arena that owns all boundaries.
///
/// Segments refer back to their boundary through a [`BoundaryId`], so a
/// spline never holds a reference to the object that owns it.
#[derive(Debug, Default)]
pub struct BoundaryStore {
    boundaries: SlotMap<BoundaryId, BoundaryData>,
    names: HashMap<String, BoundaryId>,
}

impl BoundaryStore {
    /// Creates a new, empty boundary store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a boundary and returns its ID.
    ///
    /// Every segment of `spline` is stamped with the new ID.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::DuplicateName` if `name` is already taken.
    pub fn add_boundary(
        &mut self,
        name: impl Into<String>,
        kind: BoundaryKind,
        mut spline: Spline,
    ) -> Result<BoundaryId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(BoundaryError::DuplicateName(name).into());
        }
        let id = self.boundaries.insert_with_key(|id| {
            spline.assign_boundary(id);
            BoundaryData {
                name: name.clone(),
                kind,
                spline,
            }
        });
        tracing::debug!(%name, ?kind, "registered boundary");
        self.names.insert(name, id);
        Ok(id)
    }

    /// Returns a reference to the boundary data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary is not in the store.
    pub fn boundary(&self, id: BoundaryId) -> Result<&BoundaryData> {
        self.boundaries
            .get(id)
            .ok_or_else(|| BoundaryError::NotFound(format!("{id:?}")).into())
    }

    /// Looks up a boundary ID by name.
    #[must_use]
    pub fn id_by_name(&self, name: &str) -> Option<BoundaryId> {
        self.names.get(name).copied()
    }

    /// Looks up a boundary by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&BoundaryData> {
        self.id_by_name(name).and_then(|id| self.boundaries.get(id))
    }

    /// Iterates over all boundaries.
    pub fn iter(&self) -> impl Iterator<Item = (BoundaryId, &BoundaryData)> {
        self.boundaries.iter()
    }

    /// Number of registered boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Returns `true` if no boundaries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Collects every segment of every boundary, in registration order.
    #[must_use]
    pub fn all_segments(&self) -> Vec<&Segment> {
        self.boundaries
            .values()
            .flat_map(|b| b.spline.segments())
            .collect()
    }
}

impl ConnectorSource for BoundaryStore {
    fn find_spline(&self, name: &str) -> Option<&Spline> {
        self.by_name(name).map(|b| &b.spline)
    }
}

impl ConnectorSource for HashMap<String, Spline> {
    fn find_spline(&self, name: &str) -> Option<&Spline> {
        self.get(name)
    }
}

impl WallQuery for BoundaryStore {
    fn is_wall(&self, segment: &Segment) -> bool {
        segment
            .boundary()
            .and_then(|id| self.boundaries.get(id))
            .is_some_and(|b| b.kind.is_wall())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Spline {
        Spline::line(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn add_and_lookup_by_name() {
        let mut store = BoundaryStore::new();
        let id = store
            .add_boundary("anode", BoundaryKind::Dirichlet, line(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(store.id_by_name("anode"), Some(id));
        assert_eq!(store.boundary(id).unwrap().name, "anode");
        assert!(store.find_spline("anode").is_some());
        assert!(store.find_spline("cathode").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut store = BoundaryStore::new();
        store
            .add_boundary("wall", BoundaryKind::Dirichlet, line(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        let err = store
            .add_boundary("wall", BoundaryKind::Neumann, line(0.0, 1.0, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::BoundlineError::Boundary(BoundaryError::DuplicateName(_))
        ));
    }

    #[test]
    fn segments_are_stamped_with_owner() {
        let mut store = BoundaryStore::new();
        let id = store
            .add_boundary("wall", BoundaryKind::Dirichlet, line(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        let seg = &store.boundary(id).unwrap().spline.segments()[0];
        assert_eq!(seg.boundary(), Some(id));
        assert!(store.is_wall(seg));
    }

    #[test]
    fn only_dirichlet_is_wall() {
        let mut store = BoundaryStore::new();
        let open = store
            .add_boundary("inlet", BoundaryKind::Neumann, line(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        let seg = &store.boundary(open).unwrap().spline.segments()[0];
        assert!(!store.is_wall(seg));

        let loose = line(0.0, 0.0, 1.0, 1.0);
        assert!(!store.is_wall(&loose.segments()[0]));
        assert!(AllWalls.is_wall(&loose.segments()[0]));
    }
}
