use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::trace;

use crate::error::Error;
use crate::units::direction;

/// A point given in signed decimal degrees (negative latitude = South, negative longitude =
/// West). Ranges are not checked.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        calc_bearing(self.lat, self.lon, other.lat, other.lon)
    }

    pub fn direction_to(&self, other: &Coordinate) -> &'static str {
        calc_nsew(self.lat, self.lon, other.lat, other.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',');
        let (lat, lon) = match (fields.next(), fields.next(), fields.next()) {
            (Some(lat), Some(lon), None) => (lat, lon),
            (_, None, _) => return Err(Error::invalid_coordinate(s, "expected 'lat,lon'")),
            _ => return Err(Error::invalid_coordinate(s, "too many fields")),
        };
        let parse = |name: &str, field: &str| -> Result<f64, Error> {
            let value: f64 = field
                .trim()
                .parse()
                .map_err(|e| Error::invalid_coordinate(s, format!("{name}: {e}")))?;
            if !value.is_finite() {
                return Err(Error::invalid_coordinate(s, format!("{name} is not finite")));
            }
            Ok(value)
        };
        Ok(Self::new(parse("latitude", lat)?, parse("longitude", lon)?))
    }
}

/// Initial great-circle bearing from point 1 to point 2, in degrees within (-180, 180].
///
/// Coincident points give 0.
pub fn calc_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lon = (lon2 - lon1).to_radians();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());

    let x = lat2.cos() * d_lon.sin();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    trace!(x, y, "bearing terms");

    // atan2 keeps the quadrant
    x.atan2(y).to_degrees()
}

/// Direction of point 2 as seen from point 1, as one of the eight compass labels.
pub fn calc_nsew(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> &'static str {
    direction::bearing_to_label(calc_bearing(lat1, lon1, lat2, lon2))
}
