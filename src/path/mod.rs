//! SVG-like path language for building boundary splines.
//!
//! ```text
//! M x y                  move the current position
//! L x y                  linear segment to (x, y)
//! C k1x k1y k2x k2y x y  cubic segment to (x, y) with control points k1, k2
//! S x y [x y ...]        smooth cubic run through the listed points
//! Z                      sub-path marker, emits nothing
//! ```
//!
//! A smooth run continues across further `S` and `Z` commands and ends at
//! the next `M`, `L` or `C`.
//!
//! Lowercase commands take coordinates relative to the current position.
//! In place of a coordinate pair, `name:FIRST` or `name:LAST` picks the end
//! point of an already registered boundary.
//!
//! Unlike SVG, `S` only lists the knots; control points are solved for so
//! that the run passes through every knot with a continuous tangent.

mod interpreter;
pub mod lexer;

use crate::boundary::ConnectorSource;
use crate::error::{PathError, Result};
use crate::geometry::Spline;
use crate::math::Matrix3;

use interpreter::Interpreter;

/// Builds a [`Spline`] from a path string.
pub struct BuildPath {
    path: String,
    transform: Matrix3,
    flip_normals: bool,
}

impl BuildPath {
    /// Creates a new `BuildPath` operation with the identity transform.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            transform: Matrix3::identity(),
            flip_normals: false,
        }
    }

    /// Sets the affine transform applied to every coordinate pair.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix3) -> Self {
        self.transform = transform;
        self
    }

    /// Reverses the connectivity, which flips the normals.
    #[must_use]
    pub fn flip_normals(mut self, flip: bool) -> Self {
        self.flip_normals = flip;
        self
    }

    /// Executes the build, resolving connectors against `connectors`.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Syntax` for malformed input (including a `C` with
    /// fewer than six numbers), `PathError::UnresolvedConnector` or
    /// `PathError::UnknownConnector` for bad cross-references, and
    /// `PathError::Empty` if the path emits no segments.
    pub fn execute<C: ConnectorSource + ?Sized>(&self, connectors: &C) -> Result<Spline> {
        tracing::debug!(path = %self.path, flip_normals = self.flip_normals, "building path");

        let tokens = lexer::tokenize(&self.path)?;
        let segments =
            Interpreter::new(&tokens, &self.transform, self.flip_normals, connectors).run()?;
        if segments.is_empty() {
            return Err(PathError::Empty(self.path.clone()).into());
        }

        let spline = Spline::from_segments(segments)?;
        tracing::debug!(
            segments = spline.num_segments(),
            length = spline.length(),
            "path built"
        );
        Ok(spline)
    }
}
