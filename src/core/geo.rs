//! Great-circle distance and compass bearing between two points
//!
//! Feedback for a wrong guess is "how far" and "which way" the hidden target
//! lies from the guessed country. Both are computed from the `(lat, lng)`
//! coordinates each country carries.

use std::fmt;

/// Mean Earth radius used by the haversine formula, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Axis tolerance (degrees) for the bearing classification
///
/// A difference at or below this value counts as "close" on that axis.
pub const BEARING_TOLERANCE_DEG: f64 = 4.0;

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees
    ///
    /// Returns `None` unless both values are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    ///
    /// # Examples
    /// ```
    /// use countrdle::core::Coordinates;
    ///
    /// assert!(Coordinates::new(46.0, 2.0).is_some());
    /// assert!(Coordinates::new(f64::NAN, 2.0).is_none());
    /// assert!(Coordinates::new(91.0, 0.0).is_none());
    /// ```
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);

        valid.then_some(Self { lat, lng })
    }

    /// Latitude in degrees
    #[inline]
    #[must_use]
    pub const fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    #[inline]
    #[must_use]
    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.lat, self.lng)
    }
}

/// One of the eight compass directions shown as an arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bearing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Bearing {
    /// Arrow glyph pointing in this direction
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '↑',
            Self::NorthEast => '↗',
            Self::East => '→',
            Self::SouthEast => '↘',
            Self::South => '↓',
            Self::SouthWest => '↙',
            Self::West => '←',
            Self::NorthWest => '↖',
        }
    }

    /// Short compass label (`N`, `NE`, ...)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arrow())
    }
}

/// Great-circle distance between two points, rounded to whole kilometres
///
/// Uses the haversine formula with [`EARTH_RADIUS_KM`].
///
/// # Examples
/// ```
/// use countrdle::core::{Coordinates, distance_km};
///
/// let paris = Coordinates::new(48.86, 2.35).unwrap();
/// assert_eq!(distance_km(paris, paris), 0);
/// ```
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> u32 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    // abs() keeps the result bit-identical when the arguments are swapped
    let d_lat = (b.lat - a.lat).abs().to_radians();
    let d_lng = (b.lng - a.lng).abs().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();

    (EARTH_RADIUS_KM * c).round() as u32
}

/// Direction in which `target` lies as seen from `guess`
///
/// Each axis counts as "close" when its absolute difference is at most
/// [`BEARING_TOLERANCE_DEG`]. When both axes are close, or both are far, the
/// result is a diagonal. Otherwise the far axis alone decides the direction.
/// A zero difference counts as south / east.
///
/// # Examples
/// ```
/// use countrdle::core::{Bearing, Coordinates, bearing_arrow};
///
/// let target = Coordinates::new(20.0, 0.0).unwrap();
/// let guess = Coordinates::new(0.0, 0.0).unwrap();
/// assert_eq!(bearing_arrow(target, guess), Bearing::North);
/// ```
#[must_use]
pub fn bearing_arrow(target: Coordinates, guess: Coordinates) -> Bearing {
    let lat_diff = target.lat - guess.lat;
    let lng_diff = target.lng - guess.lng;

    let is_top = lat_diff > 0.0;
    let is_left = lng_diff < 0.0;

    let lat_close = lat_diff.abs() <= BEARING_TOLERANCE_DEG;
    let lng_close = lng_diff.abs() <= BEARING_TOLERANCE_DEG;

    if lat_close == lng_close {
        return match (is_top, is_left) {
            (true, true) => Bearing::NorthWest,
            (true, false) => Bearing::NorthEast,
            (false, true) => Bearing::SouthWest,
            (false, false) => Bearing::SouthEast,
        };
    }

    if lng_close {
        // Only the north/south axis is far
        if is_top { Bearing::North } else { Bearing::South }
    } else if is_left {
        Bearing::West
    } else {
        Bearing::East
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn coordinates_reject_out_of_range() {
        assert!(Coordinates::new(-90.0, -180.0).is_some());
        assert!(Coordinates::new(90.0, 180.0).is_some());
        assert!(Coordinates::new(90.1, 0.0).is_none());
        assert!(Coordinates::new(0.0, -180.5).is_none());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn distance_identical_points_is_zero() {
        for (lat, lng) in [(0.0, 0.0), (46.0, 2.0), (-33.9, 151.2), (90.0, 0.0)] {
            assert_eq!(distance_km(at(lat, lng), at(lat, lng)), 0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            at(46.0, 2.0),
            at(51.0, 9.0),
            at(-14.0, -51.0),
            at(35.0, 138.0),
            at(-27.0, 133.0),
            at(64.0, -150.0),
        ];

        for &a in &points {
            for &b in &points {
                assert_eq!(distance_km(a, b), distance_km(b, a));
            }
        }
    }

    #[test]
    fn distance_france_germany() {
        // 5 degrees of latitude and 7 of longitude around 48N
        let d = distance_km(at(46.0, 2.0), at(51.0, 9.0));
        assert!((740..=780).contains(&d), "got {d}");
    }

    #[test]
    fn distance_quarter_meridian() {
        // Equator to pole is a quarter of the circumference
        let d = distance_km(at(0.0, 0.0), at(90.0, 0.0));
        assert_eq!(d, 10_008);
    }

    #[test]
    fn distance_antipodes_is_half_circumference() {
        let d = distance_km(at(0.0, 0.0), at(0.0, 180.0));
        assert_eq!(d, 20_015);
    }

    #[test]
    fn bearing_same_point_is_south_east() {
        assert_eq!(bearing_arrow(at(10.0, 10.0), at(10.0, 10.0)), Bearing::SouthEast);
    }

    #[test]
    fn bearing_single_far_axis_is_cardinal() {
        let origin = at(0.0, 0.0);
        assert_eq!(bearing_arrow(at(20.0, 0.0), origin), Bearing::North);
        assert_eq!(bearing_arrow(at(-20.0, 3.0), origin), Bearing::South);
        assert_eq!(bearing_arrow(at(2.0, 30.0), origin), Bearing::East);
        assert_eq!(bearing_arrow(at(-4.0, -30.0), origin), Bearing::West);
    }

    #[test]
    fn bearing_both_far_is_diagonal() {
        let origin = at(0.0, 0.0);
        assert_eq!(bearing_arrow(at(20.0, 20.0), origin), Bearing::NorthEast);
        assert_eq!(bearing_arrow(at(20.0, -20.0), origin), Bearing::NorthWest);
        assert_eq!(bearing_arrow(at(-20.0, 20.0), origin), Bearing::SouthEast);
        assert_eq!(bearing_arrow(at(-20.0, -20.0), origin), Bearing::SouthWest);
    }

    #[test]
    fn bearing_both_close_is_diagonal() {
        let origin = at(0.0, 0.0);
        assert_eq!(bearing_arrow(at(1.0, 1.0), origin), Bearing::NorthEast);
        assert_eq!(bearing_arrow(at(-1.0, -1.0), origin), Bearing::SouthWest);
    }

    #[test]
    fn bearing_tolerance_boundary_is_inclusive() {
        let origin = at(0.0, 0.0);
        // Exactly 4 degrees is still close
        assert_eq!(bearing_arrow(at(4.0, 20.0), origin), Bearing::East);
        // Just above 4 degrees is far on both axes
        assert_eq!(bearing_arrow(at(4.5, 20.0), origin), Bearing::NorthEast);
    }

    #[test]
    fn bearing_france_from_germany() {
        assert_eq!(bearing_arrow(at(46.0, 2.0), at(51.0, 9.0)), Bearing::SouthWest);
    }

    #[test]
    fn bearing_labels_and_arrows() {
        assert_eq!(Bearing::North.label(), "N");
        assert_eq!(Bearing::SouthWest.label(), "SW");
        assert_eq!(Bearing::East.to_string(), "→");
    }
}
