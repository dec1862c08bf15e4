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

/// A runway end of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    /// The designator without the `RW` prefix, e.g. `33` or `09L`.
    pub designator: String,
    pub coordinate: Point<f64>,
}

impl Runway {
    pub fn new(designator: &str, coordinate: Point<f64>) -> Self {
        Self {
            designator: designator.to_string(),
            coordinate,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub(crate) id: u32,
    pub(crate) icao_ident: String,
    pub(crate) name: String,
    pub(crate) coordinate: Point<f64>,
    pub(crate) mag_var: Option<MagneticVariation>,
    pub(crate) runways: Vec<Runway>,
}

impl Airport {
    /// Creates an airport without runways.
    ///
    /// The database id is assigned when the airport is added to the
    /// [navigation data](super::NavigationDataBuilder).
    pub fn new(icao_ident: &str, name: &str, coordinate: Point<f64>) -> Self {
        Self {
            id: 0,
            icao_ident: icao_ident.to_string(),
            name: name.to_string(),
            coordinate,
            mag_var: None,
            runways: Vec::new(),
        }
    }

    pub fn with_mag_var(mut self, mag_var: MagneticVariation) -> Self {
        self.mag_var = Some(mag_var);
        self
    }

    pub fn with_runway(mut self, rwy: Runway) -> Self {
        self.runways.push(rwy);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mag_var(&self) -> Option<MagneticVariation> {
        self.mag_var
    }

    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    /// Returns the runway with the `designator`.
    pub fn runway(&self, designator: &str) -> Option<&Runway> {
        self.runways.iter().find(|rwy| rwy.designator == designator)
    }
}

impl Fix for Airport {
    fn ident(&self) -> String {
        self.icao_ident.clone()
    }

    fn coordinate(&self) -> Point<f64> {
        self.coordinate
    }
}
