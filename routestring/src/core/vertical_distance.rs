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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod constants {
    pub const METER_IN_FEET: f32 = 3.28084;
}

/// A vertical distance.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum VerticalDistance {
    /// Absolute Altitude as distance above ground level in feet.
    Agl(u16),

    /// Altitude in feet with reference to a local air pressure.
    Altitude(u16),

    /// Flight level in hundreds of feet as altitude at standard air pressure.
    Fl(u16),

    /// Ground level.
    Gnd,

    /// True Altitude as distance above mean sea level.
    Msl(u16),

    /// An unlimited vertical distance.
    Unlimited,
}

impl VerticalDistance {
    /// Returns the level in feet, if it has a finite value.
    pub fn feet(&self) -> Option<u32> {
        match self {
            Self::Fl(n) => Some(*n as u32 * 100),
            Self::Agl(n) | Self::Altitude(n) | Self::Msl(n) => Some(*n as u32),
            Self::Gnd => Some(0),
            Self::Unlimited => None,
        }
    }

    /// Formats the level as used in the ICAO flight plan.
    ///
    /// Flight levels are written as `F350` and altitudes in hundreds of feet
    /// as `A045`. Returns `None` for vertical distances that have no ICAO
    /// level representation like AGL or unlimited, and for flight levels
    /// above `F999`.
    pub fn to_icao(&self) -> Option<String> {
        match self {
            Self::Fl(n) if *n <= 999 => Some(format!("F{n:03}")),
            Self::Altitude(n) | Self::Msl(n) => {
                Some(format!("A{:03}", (*n as f32 / 100.0).round() as u16))
            }
            _ => None,
        }
    }
}

impl FromStr for VerticalDistance {
    type Err = Error;

    /// Parses a string `s` to return a VerticalDistance.
    ///
    /// The string should be according to ICAO Doc. 4444 Annex 2:
    /// - Flight level, expressed as F followed by 3 figures e.g. `F085`
    /// - Standard metric level in tens of metres, expressed by S followed by 4
    ///   figures e.g. `S1130`
    /// - Altitude in hundreds of feet, expressed as A followed by 3 figures
    ///   e.g. `A045`
    /// - Altitude in tens of metres, expressed as M followed by 4 figures e.g.
    ///   `M0840`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        macro_rules! value {
            ($s:expr, $len:expr) => {
                $s.get(1..)
                    .filter(|v| v.len() == $len && v.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|v| v.parse::<u16>().ok())
                    .ok_or(Error::UnexpectedString)
            };
        }

        match s.get(0..1).unwrap_or_default() {
            // first character is the unit
            "F" => Ok(Self::Fl(value!(s, 3)?)),
            "S" => Ok(Self::Fl(
                // value in tens of meter or hundreds of feet
                (value!(s, 4)? as f32 * constants::METER_IN_FEET / 10.0).round() as u16,
            )),
            "A" => value!(s, 3)? // value in hundredth of feet
                .checked_mul(100)
                .map(Self::Altitude)
                .ok_or(Error::UnexpectedString),
            "M" => Ok(Self::Altitude(
                // value in tens of meter
                (value!(s, 4)? as f32 * 10.0 * constants::METER_IN_FEET).round() as u16,
            )),
            _ => Err(Error::UnexpectedString),
        }
    }
}

impl fmt::Display for VerticalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalDistance::Gnd => write!(f, "GND"),
            VerticalDistance::Fl(value) => write!(f, "FL{value}"),
            VerticalDistance::Agl(value) => write!(f, "{value} AGL"),
            VerticalDistance::Msl(value) => write!(f, "{value} MSL"),
            VerticalDistance::Altitude(value) => write!(f, "{value} ALT"),
            VerticalDistance::Unlimited => write!(f, "unlimited"),
        }
    }
}
