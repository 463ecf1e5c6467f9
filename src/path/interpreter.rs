use crate::boundary::ConnectorSource;
use crate::error::{PathError, Result};
use crate::geometry::Segment;
use crate::math::transform_2d::transform_point;
use crate::math::tridiagonal::smooth_control_points;
use crate::math::{Matrix3, Point2};

use super::lexer::{Command, ConnectorEnd, Token};

/// Interpreter state: what a coordinate pair means when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Move,
    Linear,
    Cubic,
    Smooth,
}

/// Walks a token stream, emitting segments in path order.
pub(super) struct Interpreter<'a, C: ConnectorSource + ?Sized> {
    tokens: &'a [Token<'a>],
    cursor: usize,
    transform: &'a Matrix3,
    flip_normals: bool,
    connectors: &'a C,
    mode: Mode,
    relative: bool,
    current: Point2,
    knots: Vec<Point2>,
    segments: Vec<Segment>,
}

impl<'a, C: ConnectorSource + ?Sized> Interpreter<'a, C> {
    pub(super) fn new(
        tokens: &'a [Token<'a>],
        transform: &'a Matrix3,
        flip_normals: bool,
        connectors: &'a C,
    ) -> Self {
        Self {
            tokens,
            cursor: 0,
            transform,
            flip_normals,
            connectors,
            mode: Mode::Move,
            relative: false,
            current: Point2::origin(),
            knots: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Runs the state machine to the end of input.
    ///
    /// Segments come back in final order: reversed if normals are flipped.
    pub(super) fn run(mut self) -> Result<Vec<Segment>> {
        while let Some(token) = self.next_token() {
            match token {
                Token::Command { command, relative } => self.enter(*command, *relative)?,
                Token::Number(x) => {
                    let x = *x;
                    let y = self.expect_number("y coordinate")?;
                    let point = self.map_coordinate(x, y);
                    self.on_point(point)?;
                }
                Token::Connector { name, end } => {
                    let point = self.resolve_connector(name, *end)?;
                    self.on_point(point)?;
                }
            }
        }
        self.flush_smooth()?;

        if self.flip_normals {
            self.segments.reverse();
        }
        Ok(self.segments)
    }

    fn next_token(&mut self) -> Option<&'a Token<'a>> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn expect_number(&mut self, what: &str) -> Result<f64> {
        match self.next_token() {
            Some(Token::Number(v)) => Ok(*v),
            other => Err(PathError::Syntax {
                token: other.map_or_else(|| "<end of path>".to_owned(), |t| format!("{t:?}")),
                reason: format!("expected {what}"),
            }
            .into()),
        }
    }

    /// `M`, `L` and `C` end the pending smooth run. A repeated `S` extends it,
    /// and `Z` leaves it open.
    fn enter(&mut self, command: Command, relative: bool) -> Result<()> {
        match command {
            // Sub-path marker only; the next `M` starts the new sub-path.
            Command::Close => return Ok(()),
            Command::Smooth if self.mode == Mode::Smooth => {}
            Command::Smooth => {
                self.switch_mode(Mode::Smooth)?;
                self.knots.push(self.current);
            }
            Command::Move => self.switch_mode(Mode::Move)?,
            Command::Line => self.switch_mode(Mode::Linear)?,
            Command::Cubic => self.switch_mode(Mode::Cubic)?,
        }
        self.relative = relative;
        Ok(())
    }

    fn switch_mode(&mut self, mode: Mode) -> Result<()> {
        self.flush_smooth()?;
        self.mode = mode;
        Ok(())
    }

    /// Applies the transform, then the relative offset from the current position.
    fn map_coordinate(&self, x: f64, y: f64) -> Point2 {
        let p = transform_point(self.transform, &Point2::new(x, y));
        if self.relative {
            p + self.current.coords
        } else {
            p
        }
    }

    fn resolve_connector(&self, name: &str, end: ConnectorEnd) -> Result<Point2> {
        let spline = self
            .connectors
            .find_spline(name)
            .ok_or_else(|| PathError::UnresolvedConnector(name.to_owned()))?;
        // A reversed build walks the other boundary from its far end.
        let point = match (end, self.flip_normals) {
            (ConnectorEnd::First, false) | (ConnectorEnd::Last, true) => spline.first_point(),
            (ConnectorEnd::Last, false) | (ConnectorEnd::First, true) => spline.last_point(),
        };
        Ok(point)
    }

    fn on_point(&mut self, point: Point2) -> Result<()> {
        let end = match self.mode {
            Mode::Move => {
                // Implicit line-to for any further pairs, as in SVG.
                self.mode = Mode::Linear;
                point
            }
            Mode::Linear => {
                self.push_linear(self.current, point);
                point
            }
            Mode::Cubic => {
                let k1 = point;
                let k2x = self.expect_number("second control point x")?;
                let k2y = self.expect_number("second control point y")?;
                let x = self.expect_number("cubic end point x")?;
                let y = self.expect_number("cubic end point y")?;
                let k2 = self.map_coordinate(k2x, k2y);
                let end = self.map_coordinate(x, y);
                self.push_cubic(self.current, k1, k2, end);
                end
            }
            Mode::Smooth => {
                self.knots.push(point);
                point
            }
        };
        self.current = end;
        Ok(())
    }

    fn push_linear(&mut self, x1: Point2, x2: Point2) {
        let segment = if self.flip_normals {
            Segment::linear(x2, x1)
        } else {
            Segment::linear(x1, x2)
        };
        self.segments.push(segment);
    }

    fn push_cubic(&mut self, x1: Point2, p1: Point2, p2: Point2, x2: Point2) {
        let segment = if self.flip_normals {
            Segment::cubic(x2, p2, p1, x1)
        } else {
            Segment::cubic(x1, p1, p2, x2)
        };
        self.segments.push(segment);
    }

    /// Converts the pending smooth knots into a chain of cubic segments.
    fn flush_smooth(&mut self) -> Result<()> {
        let knots = std::mem::take(&mut self.knots);
        match knots.len() {
            0 | 1 => return Ok(()),
            // A lone span has no neighbour to be smooth against.
            2 => {
                self.push_linear(knots[0], knots[1]);
                return Ok(());
            }
            _ => {}
        }
        let controls = smooth_control_points(&knots)?;
        for (i, (p1, p2)) in controls.into_iter().enumerate() {
            self.push_cubic(knots[i], p1, p2, knots[i + 1]);
        }
        Ok(())
    }
}
