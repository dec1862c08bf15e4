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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The magnetic variation (declination) at a point.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum MagneticVariation {
    /// Variation in degrees east of true north.
    East(f32),
    /// Variation in degrees west of true north.
    West(f32),
    /// Used at high latitudes where headings are referenced to true north.
    OrientedToTrueNorth,
}

impl MagneticVariation {
    /// Returns the variation in degrees with east being positive.
    pub fn degrees(&self) -> f32 {
        match self {
            Self::East(value) => *value,
            Self::West(value) => -*value,
            Self::OrientedToTrueNorth => 0.0,
        }
    }
}

impl From<f32> for MagneticVariation {
    /// Creates the variation from degrees with east being positive.
    fn from(degrees: f32) -> Self {
        if degrees < 0.0 {
            Self::West(-degrees)
        } else {
            Self::East(degrees)
        }
    }
}
