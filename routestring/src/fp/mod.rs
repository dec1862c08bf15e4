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

//! Flight plan.
//!
//! A [`Flightplan`] is the ordered list of points flown from the departure to
//! the destination airport, together with the cruise performance and the
//! alternates. It is created from a route description or assembled with the
//! [`FlightplanBuilder`].

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Speed;
use crate::nd::{Airport, Fix, NavAid, ProcedureKind, Runway};
use crate::VerticalDistance;

mod builder;

pub use builder::FlightplanBuilder;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightRules {
    #[default]
    Ifr,
    Vfr,
}

/// How an entry of the flight plan is reached from its predecessor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Via {
    /// Direct connection between the points.
    Direct,
    /// The point is reached along the named airway.
    Airway(String),
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "DCT"),
            Self::Airway(name) => write!(f, "{name}"),
        }
    }
}

/// The procedure to which an entry belongs.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcedureTag {
    pub kind: ProcedureKind,
    pub name: String,
    pub transition: Option<String>,
}

/// A point of the flight plan.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightplanEntry {
    pub navaid: NavAid,
    /// How the point is reached from the previous entry.
    pub via: Option<Via>,
    /// Set if the point is part of a SID or STAR.
    pub procedure: Option<ProcedureTag>,
    /// Level to be flown from this point on.
    pub level: Option<VerticalDistance>,
}

impl FlightplanEntry {
    pub fn new(navaid: NavAid) -> Self {
        Self {
            navaid,
            via: None,
            procedure: None,
            level: None,
        }
    }

    pub fn via(mut self, via: Via) -> Self {
        self.via = Some(via);
        self
    }

    pub fn procedure(mut self, tag: ProcedureTag) -> Self {
        self.procedure = Some(tag);
        self
    }

    pub fn level(mut self, level: VerticalDistance) -> Self {
        self.level = Some(level);
        self
    }

    pub fn ident(&self) -> String {
        self.navaid.ident()
    }

    /// Returns the airway on which this point is reached.
    pub fn airway(&self) -> Option<&str> {
        match &self.via {
            Some(Via::Airway(name)) => Some(name),
            _ => None,
        }
    }
}

/// A flight plan with the entries in flight order.
///
/// If the flight plan has a departure airport, it is the first entry. The
/// destination airport is always the last entry. Alternates are not part of
/// the entries.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flightplan {
    entries: Vec<FlightplanEntry>,
    rules: FlightRules,
    cruise_level: Option<VerticalDistance>,
    cruise_speed: Option<Speed>,
    origin: Option<Rc<Airport>>,
    takeoff_rwy: Option<Runway>,
    destination: Option<Rc<Airport>>,
    landing_rwy: Option<Runway>,
    alternates: Vec<Rc<Airport>>,
}

impl Flightplan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FlightplanEntry] {
        &self.entries
    }

    /// Returns the entries between departure and destination airport.
    pub fn enroute(&self) -> &[FlightplanEntry] {
        let start = usize::from(self.origin.is_some()).min(self.entries.len());
        let end = self
            .entries
            .len()
            .saturating_sub(usize::from(self.destination.is_some()))
            .max(start);
        &self.entries[start..end]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn rules(&self) -> FlightRules {
        self.rules
    }

    pub fn cruise_level(&self) -> Option<VerticalDistance> {
        self.cruise_level
    }

    pub fn cruise_speed(&self) -> Option<Speed> {
        self.cruise_speed
    }

    pub fn origin(&self) -> Option<&Rc<Airport>> {
        self.origin.as_ref()
    }

    pub fn takeoff_rwy(&self) -> Option<&Runway> {
        self.takeoff_rwy.as_ref()
    }

    pub fn destination(&self) -> Option<&Rc<Airport>> {
        self.destination.as_ref()
    }

    pub fn landing_rwy(&self) -> Option<&Runway> {
        self.landing_rwy.as_ref()
    }

    pub fn alternates(&self) -> &[Rc<Airport>] {
        &self.alternates
    }

    /// Returns the identifiers of all entries in flight order.
    pub fn idents(&self) -> Vec<String> {
        self.entries.iter().map(FlightplanEntry::ident).collect()
    }
}
