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

//! Route word classification.
//!
//! Reading a route is done in two phases: **Text → Lexer → Words → Reader →
//! Flight plan**.
//!
//! The [`Lexer`] classifies each cleaned word solely by its format, without
//! any knowledge of the navigation data or the surrounding words:
//!
//! - `"DCT"` → `Word::Direct`
//! - `"SID"`, `"STAR"` → `Word::GenericSid`, `Word::GenericStar`
//! - `"N0420F350"` → `Word::Cruise`
//! - `"4630N07815W"` → `Word::Coordinate`
//! - `"DEEZZ5.CANDR"` → `Word::Procedure`
//! - `"ALB"`, `"J121"`, `"KJFK"`, `"ALB/N0420F350"` → `Word::Ident`
//!
//! The reader resolves the words against the navigation data, which decides
//! whether an ident is an airport, an airway, a procedure or a fix.

use std::fmt;
use std::str::FromStr;

use geo::Point;

use crate::error::Error;
use crate::fp::FlightRules;
use crate::geom::Coordinate;
use crate::measurements::Speed;
use crate::VerticalDistance;

/// A cruise speed and level instruction like `N0420F350`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cruise {
    pub speed: Speed,
    /// The cruise level or `None` for `VFR`.
    pub level: Option<VerticalDistance>,
}

impl Cruise {
    pub fn rules(&self) -> FlightRules {
        match self.level {
            Some(_) => FlightRules::Ifr,
            None => FlightRules::Vfr,
        }
    }
}

impl FromStr for Cruise {
    type Err = Error;

    /// Parses a speed followed by a level or `VFR`.
    ///
    /// The speed is `N` (knots) or `K` (km/h) with 4 or 3 figures or `M`
    /// (Mach) with 3 figures. The level is one of the [vertical distances]
    /// used in ICAO flight plans.
    ///
    /// [vertical distances]: VerticalDistance#impl-FromStr-for-VerticalDistance
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidCruise(s.to_string());

        // the level starts with a letter
        let speed_len = 1 + s
            .bytes()
            .skip(1)
            .take_while(|b| b.is_ascii_digit())
            .count();

        let (speed, level) = s.split_at_checked(speed_len).ok_or_else(err)?;
        let speed: Speed = speed.parse().map_err(|_| err())?;

        let level = match level {
            "VFR" => None,
            level => Some(level.parse().map_err(|_| err())?),
        };

        Ok(Self { speed, level })
    }
}

impl fmt::Display for Cruise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speed = self
            .speed
            .to_icao()
            .unwrap_or_else(|| self.speed.to_string());
        let level = self.level.and_then(|level| level.to_icao());
        write!(f, "{speed}{}", level.as_deref().unwrap_or("VFR"))
    }
}

/// A word of a route classified by its format.
#[derive(Clone, PartialEq, Debug)]
pub(super) enum Word {
    Direct,
    GenericSid,
    GenericStar,
    Cruise(Cruise),
    Coordinate {
        point: Point<f64>,
        text: String,
        cruise: Option<Cruise>,
    },
    /// A procedure with transition separated by a dot. The order of both
    /// depends on the procedure.
    Procedure { first: String, second: String },
    Ident {
        ident: String,
        cruise: Option<Cruise>,
    },
}

impl Word {
    /// Returns `true` if the word is a point, procedure or airway and not an
    /// instruction.
    pub(super) fn is_significant(&self) -> bool {
        matches!(
            self,
            Self::Coordinate { .. } | Self::Procedure { .. } | Self::Ident { .. }
        )
    }

    pub(super) fn ident(&self) -> Option<&str> {
        match self {
            Self::Ident { ident, .. } => Some(ident),
            _ => None,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "DCT"),
            Self::GenericSid => write!(f, "SID"),
            Self::GenericStar => write!(f, "STAR"),
            Self::Cruise(cruise) => write!(f, "{cruise}"),
            Self::Coordinate { text, .. } => write!(f, "{text}"),
            Self::Procedure { first, second } => write!(f, "{first}.{second}"),
            Self::Ident { ident, .. } => write!(f, "{ident}"),
        }
    }
}

pub(super) struct Lexer;

impl Lexer {
    /// Classifies the cleaned `words`.
    pub(super) fn lex<S: AsRef<str>>(words: &[S]) -> Vec<Word> {
        words.iter().map(|s| Self::classify(s.as_ref())).collect()
    }

    fn classify(s: &str) -> Word {
        match s {
            "DCT" => return Word::Direct,
            "SID" => return Word::GenericSid,
            "STAR" => return Word::GenericStar,
            _ => (),
        }

        if let Ok(cruise) = s.parse::<Cruise>() {
            return Word::Cruise(cruise);
        }

        // a point can be followed by a change of speed and level
        let (point, cruise) = match s.split_once('/') {
            Some((point, suffix)) => match suffix.parse::<Cruise>() {
                Ok(cruise) => (point, Some(cruise)),
                // not a cruise instruction, so the whole word is unknown
                Err(_) => (s, None),
            },
            None => (s, None),
        };

        if let Ok(coordinate) = point.parse::<Coordinate>() {
            return Word::Coordinate {
                point: coordinate.into(),
                text: point.to_string(),
                cruise,
            };
        }

        if cruise.is_none() {
            if let Some((first, second)) = s.split_once('.') {
                return Word::Procedure {
                    first: first.to_string(),
                    second: second.to_string(),
                };
            }
        }

        Word::Ident {
            ident: point.to_string(),
            cruise,
        }
    }
}
