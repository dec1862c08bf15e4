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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A problem found while reading a route.
///
/// Reading continues after each problem, so a route can yield several
/// diagnostics. Informational diagnostics describe a decision the reader made
/// and are only recorded in [report](super::RouteStringOptions::REPORT)
/// mode.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// The word is not a known airport, navaid or waypoint.
    UnknownIdent(String),

    /// Several fixes share the ident and the one closest to the previous
    /// point was used.
    AmbiguousIdent {
        ident: String,
        candidates: usize,
        chosen: String,
    },

    /// The airway doesn't connect the previous point with the next word.
    NoAirwaySegment {
        airway: String,
        from: Option<String>,
        to: Option<String>,
    },

    /// The airport has no such SID, STAR or transition.
    UnknownProcedure { airport: String, name: String },

    /// The airport has no such runway.
    UnknownRunway { airport: String, runway: String },

    /// The coordinate was replaced by a nearby fix.
    SnappedCoordinate { coordinate: String, ident: String },

    /// The word after the destination is not a known airport.
    UnknownAlternate(String),

    /// The route doesn't start with a departure airport.
    NoDeparture(String),

    /// The route doesn't end with a destination airport.
    NoDestination(String),
}

impl Diagnostic {
    /// Returns `true` if the diagnostic is informational and no error.
    pub fn is_info(&self) -> bool {
        matches!(
            self,
            Self::AmbiguousIdent { .. }
                | Self::SnappedCoordinate { .. }
                | Self::NoDeparture(_)
                | Self::NoDestination(_)
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdent(ident) => write!(f, "{ident} not found"),
            Self::AmbiguousIdent {
                ident,
                candidates,
                chosen,
            } => write!(
                f,
                "{ident} is ambiguous with {candidates} matches, using the nearest {chosen}"
            ),
            Self::NoAirwaySegment { airway, from, to } => match (from, to) {
                (Some(from), Some(to)) => {
                    write!(f, "airway {airway} doesn't connect {from} with {to}")
                }
                (None, _) => write!(f, "airway {airway} has no point to start from"),
                (Some(from), None) => write!(f, "airway {airway} has no exit after {from}"),
            },
            Self::UnknownProcedure { airport, name } => {
                write!(f, "procedure {name} not found for {airport}")
            }
            Self::UnknownRunway { airport, runway } => {
                write!(f, "runway {runway} not found for {airport}")
            }
            Self::SnappedCoordinate { coordinate, ident } => {
                write!(f, "coordinate {coordinate} replaced by {ident}")
            }
            Self::UnknownAlternate(ident) => write!(f, "alternate {ident} not found"),
            Self::NoDeparture(word) => {
                write!(f, "route starts with {word} instead of the departure airport")
            }
            Self::NoDestination(word) => {
                write!(f, "route ends with {word} instead of the destination airport")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_word() {
        assert_eq!(
            Diagnostic::UnknownIdent(String::from("UNKNOWNFIX")).to_string(),
            "UNKNOWNFIX not found"
        );
        assert_eq!(
            Diagnostic::NoAirwaySegment {
                airway: String::from("J121"),
                from: Some(String::from("ALB")),
                to: Some(String::from("XYZ")),
            }
            .to_string(),
            "airway J121 doesn't connect ALB with XYZ"
        );
    }

    #[test]
    fn severity() {
        assert!(!Diagnostic::UnknownIdent(String::from("X")).is_info());
        assert!(Diagnostic::SnappedCoordinate {
            coordinate: String::from("4630N07815W"),
            ident: String::from("ABC"),
        }
        .is_info());
        assert!(Diagnostic::NoDeparture(String::from("ALB")).is_info());
    }
}
