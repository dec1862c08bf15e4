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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

use super::Fix;
use crate::MagneticVariation;

/// The region where the waypoint is located.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    /// An enroute fix that can be used anywhere in a route.
    Enroute,
    /// The terminal area to which the fix belongs with the airport ident as
    /// value. Such fixes are only reached through the airport's procedures.
    TerminalArea(String),
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub(crate) id: u32,
    pub(crate) fix_ident: String,
    pub(crate) coordinate: Point<f64>,
    pub(crate) mag_var: Option<MagneticVariation>,
    pub(crate) region: Region,
}

impl Waypoint {
    /// Creates an enroute waypoint.
    pub fn new(fix_ident: &str, coordinate: Point<f64>) -> Self {
        Self {
            id: 0,
            fix_ident: fix_ident.to_string(),
            coordinate,
            mag_var: None,
            region: Region::Enroute,
        }
    }

    /// Creates a waypoint of the terminal area of the airport `airport_ident`.
    pub fn terminal(airport_ident: &str, fix_ident: &str, coordinate: Point<f64>) -> Self {
        Self {
            region: Region::TerminalArea(airport_ident.to_string()),
            ..Self::new(fix_ident, coordinate)
        }
    }

    pub fn with_mag_var(mut self, mag_var: MagneticVariation) -> Self {
        self.mag_var = Some(mag_var);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The terminal area of the waypoint.
    ///
    /// Returns `None` if the waypoint is not within a terminal area.
    pub fn terminal_area(&self) -> Option<&str> {
        match &self.region {
            Region::TerminalArea(ident) => Some(ident),
            Region::Enroute => None,
        }
    }
}

impl Fix for Waypoint {
    fn ident(&self) -> String {
        self.fix_ident.clone()
    }

    fn coordinate(&self) -> Point<f64> {
        self.coordinate
    }
}
