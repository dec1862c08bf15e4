// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Distance, Geodesic};

use crate::error::Error;
use crate::fc;
use crate::measurements::Length;

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the distance from this point to the `other`.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid.
    pub fn dist(&self, other: &Coordinate) -> Length {
        let distance_m = Geodesic.distance((*self).into(), (*other).into());
        Length::m(distance_m as f32)
    }

    pub fn from_dms(latitude: (i8, u8, u8), longitude: (i16, u8, u8)) -> Self {
        Self {
            latitude: latitude.0.signum() as f64
                * fc::dms_to_decimal(latitude.0.unsigned_abs(), latitude.1, latitude.2),
            longitude: longitude.0.signum() as f64
                * fc::dms_to_decimal(longitude.0.unsigned_abs() as u8, longitude.1, longitude.2),
        }
    }

    /// Formats the coordinate as used in ICAO route descriptions with degrees
    /// and minutes, e.g. `4620N07805W`.
    pub fn to_icao(&self) -> String {
        let (lat_deg, lat_min) = fc::decimal_to_dm(self.latitude);
        let (lon_deg, lon_min) = fc::decimal_to_dm(self.longitude);

        format!(
            "{lat_deg:02}{lat_min:02}{}{lon_deg:03}{lon_min:02}{}",
            if self.latitude < 0.0 { 'S' } else { 'N' },
            if self.longitude < 0.0 { 'W' } else { 'E' },
        )
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parses a coordinate of a route description.
    ///
    /// The coordinate is expected in one of the formats of ICAO Doc. 4444:
    /// - Degrees only with 7 characters, e.g. `46N078W`
    /// - Degrees and minutes with 11 characters, e.g. `4620N07805W`
    /// - Degrees, minutes and seconds with 15 characters, e.g.
    ///   `462013N0780544W`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidCoordinate(s.to_string());

        if !s.is_ascii() {
            return Err(err());
        }

        // digits of latitude and longitude per format
        let (lat_len, lon_len) = match s.len() {
            7 => (2, 3),
            11 => (4, 5),
            15 => (6, 7),
            _ => return Err(err()),
        };

        let bytes = s.as_bytes();
        let lat_hemisphere = bytes[lat_len];
        let lon_hemisphere = bytes[lat_len + 1 + lon_len];

        let lat_sign = match lat_hemisphere {
            b'N' => 1.0,
            b'S' => -1.0,
            _ => return Err(err()),
        };

        let lon_sign = match lon_hemisphere {
            b'E' => 1.0,
            b'W' => -1.0,
            _ => return Err(err()),
        };

        let lat = dms(&s[..lat_len], 2).ok_or_else(err)?;
        let lon = dms(&s[lat_len + 1..lat_len + 1 + lon_len], 3).ok_or_else(err)?;

        if lat > 90.0 || lon > 180.0 {
            return Err(err());
        }

        Ok(Self::new(lat_sign * lat, lon_sign * lon))
    }
}

/// Reads degrees with `deg_len` digits followed by optional minutes and
/// seconds of two digits each.
fn dms(s: &str, deg_len: usize) -> Option<f64> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<u8> {
        match s.get(range) {
            Some(v) if !v.is_empty() => v.parse::<u8>().ok(),
            _ => Some(0),
        }
    };

    let degree = field(0..deg_len)?;
    let minutes = field(deg_len..deg_len + 2)?;
    let seconds = field(deg_len + 2..deg_len + 4)?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some(fc::dms_to_decimal(degree, minutes, seconds))
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}
