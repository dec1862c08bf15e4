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

/// A radio navigation station like a VOR or an NDB.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    pub(crate) id: u32,
    pub(crate) ident: String,
    pub(crate) name: String,
    /// Frequency in kHz for NDBs and MHz for VORs.
    pub(crate) frequency: f32,
    pub(crate) coordinate: Point<f64>,
    pub(crate) mag_var: Option<MagneticVariation>,
}

impl Station {
    pub fn new(ident: &str, name: &str, frequency: f32, coordinate: Point<f64>) -> Self {
        Self {
            id: 0,
            ident: ident.to_string(),
            name: name.to_string(),
            frequency,
            coordinate,
            mag_var: None,
        }
    }

    pub fn with_mag_var(mut self, mag_var: MagneticVariation) -> Self {
        self.mag_var = Some(mag_var);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl Fix for Station {
    fn ident(&self) -> String {
        self.ident.clone()
    }

    fn coordinate(&self) -> Point<f64> {
        self.coordinate
    }
}
