use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::math::Point2;

/// Coordinate convention of the simulation domain.
///
/// Selects which formulas the area, strip and sampling queries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DomainType {
    /// Planar `(x, y)`.
    #[default]
    Xy,
    /// Axisymmetric, radius on axis 0: points are `(r, z)`.
    Rz,
    /// Axisymmetric, radius on axis 1: points are `(z, r)`.
    Zr,
}

impl DomainType {
    /// Returns the index of the radial coordinate, or `None` for planar domains.
    #[must_use]
    pub fn radius_axis(self) -> Option<usize> {
        match self {
            Self::Xy => None,
            Self::Rz => Some(0),
            Self::Zr => Some(1),
        }
    }

    /// Returns the radial coordinate of `point`, or `None` for planar domains.
    #[must_use]
    pub fn radius(self, point: &Point2) -> Option<f64> {
        self.radius_axis().map(|j| point[j])
    }

    /// Returns `true` for the revolved (`RZ`/`ZR`) conventions.
    #[must_use]
    pub fn is_axisymmetric(self) -> bool {
        self.radius_axis().is_some()
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xy => "XY",
            Self::Rz => "RZ",
            Self::Zr => "ZR",
        };
        f.write_str(name)
    }
}

impl FromStr for DomainType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" => Ok(Self::Xy),
            "RZ" => Ok(Self::Rz),
            "ZR" => Ok(Self::Zr),
            _ => Err(GeometryError::UnknownDomainType(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("xy".parse::<DomainType>().unwrap(), DomainType::Xy);
        assert_eq!(" RZ ".parse::<DomainType>().unwrap(), DomainType::Rz);
        assert_eq!("Zr".parse::<DomainType>().unwrap(), DomainType::Zr);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "XYZ".parse::<DomainType>().unwrap_err();
        assert!(matches!(err, GeometryError::UnknownDomainType(ref s) if s == "XYZ"));
    }

    #[test]
    fn radius_axis_per_convention() {
        let p = Point2::new(2.0, 5.0);
        assert_eq!(DomainType::Xy.radius(&p), None);
        assert_eq!(DomainType::Rz.radius(&p), Some(2.0));
        assert_eq!(DomainType::Zr.radius(&p), Some(5.0));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in [DomainType::Xy, DomainType::Rz, DomainType::Zr] {
            assert_eq!(d.to_string().parse::<DomainType>().unwrap(), d);
        }
    }
}
