// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

use super::{Airport, Fix, Station, Waypoint};
use crate::geom::Coordinate;
use crate::MagneticVariation;

/// A point of a route resolved against the navigation data.
///
/// Besides the records of the navigation data, a route can contain named user
/// points and plain coordinates which have no database id.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavAid {
    Airport(Rc<Airport>),
    Vor(Rc<Station>),
    Ndb(Rc<Station>),
    Waypoint(Rc<Waypoint>),
    UserPoint { name: String, coordinate: Point<f64> },
    Coordinate(Point<f64>),
}

impl NavAid {
    /// The database id of the record or `None` for user points and
    /// coordinates.
    pub fn id(&self) -> Option<u32> {
        match self {
            Self::Airport(aprt) => Some(aprt.id),
            Self::Vor(station) | Self::Ndb(station) => Some(station.id),
            Self::Waypoint(wp) => Some(wp.id),
            Self::UserPoint { .. } | Self::Coordinate(_) => None,
        }
    }

    pub fn mag_var(&self) -> Option<MagneticVariation> {
        match self {
            Self::Airport(aprt) => aprt.mag_var,
            Self::Vor(station) | Self::Ndb(station) => station.mag_var,
            Self::Waypoint(wp) => wp.mag_var,
            Self::UserPoint { .. } | Self::Coordinate(_) => None,
        }
    }

    pub fn is_airport(&self) -> bool {
        matches!(self, Self::Airport(_))
    }

    /// Returns `true` if both reference the same point.
    ///
    /// Records are compared by their database id, user points and coordinates
    /// by their position.
    pub fn is_same(&self, other: &NavAid) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                self.ident() == other.ident() && self.coordinate() == other.coordinate()
            }
            _ => false,
        }
    }
}

impl Fix for NavAid {
    fn ident(&self) -> String {
        match self {
            Self::Airport(aprt) => aprt.ident(),
            Self::Vor(station) | Self::Ndb(station) => station.ident(),
            Self::Waypoint(wp) => wp.ident(),
            Self::UserPoint { name, .. } => name.clone(),
            Self::Coordinate(point) => Coordinate::from(*point).to_icao(),
        }
    }

    fn coordinate(&self) -> Point<f64> {
        match self {
            Self::Airport(aprt) => aprt.coordinate,
            Self::Vor(station) | Self::Ndb(station) => station.coordinate,
            Self::Waypoint(wp) => wp.coordinate,
            Self::UserPoint { coordinate, .. } => *coordinate,
            Self::Coordinate(point) => *point,
        }
    }
}

impl fmt::Display for NavAid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Airport(_) => write!(f, "airport {}", self.ident()),
            Self::Vor(_) => write!(f, "VOR {}", self.ident()),
            Self::Ndb(_) => write!(f, "NDB {}", self.ident()),
            Self::Waypoint(_) => write!(f, "waypoint {}", self.ident()),
            Self::UserPoint { .. } => write!(f, "user point {}", self.ident()),
            Self::Coordinate(_) => write!(f, "coordinate {}", self.ident()),
        }
    }
}
