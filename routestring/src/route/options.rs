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

use bitflags::bitflags;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

bitflags! {
    /// Options controlling how route descriptions are written and read.
    ///
    /// The options are independent flags which are combined as set union. They
    /// are persisted as integer with [`bits`](Self::bits) and restored with
    /// [`from_settings`](Self::from_settings).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct RouteStringOptions: u32 {
        /// Write departure and destination airport.
        const START_AND_DEST = 1 << 0;
        /// Write `DCT` between two fixes that are not connected by an airway.
        const DCT = 1 << 1;
        /// Write the cruise speed and level after the departure airport.
        const ALT_AND_SPEED = 1 << 2;
        /// Write all fixes of an airway instead of the airway name.
        const NO_AIRWAYS = 1 << 3;
        /// Write the alternates after the destination airport.
        const ALTERNATES = 1 << 4;
        /// Write SIDs and STARs with their names.
        const SID_STAR = 1 << 5;
        /// Write the generic words `SID` and `STAR` instead of the names.
        const SID_STAR_GENERIC = 1 << 6;
        /// Write the fixes of SIDs and STARs.
        const SID_STAR_NONE = 1 << 7;
        /// Write STARs with the transition first as in `TRANS.STAR`.
        const STAR_REV_TRANSITION = 1 << 8;
        /// Separate procedure and transition by space instead of a dot.
        const SID_STAR_SPACE = 1 << 9;
        /// Read trailing airports after the destination as alternates.
        const READ_ALTERNATES = 1 << 10;
        /// Read the first and last word as any fix instead of as departure
        /// and destination airport.
        const READ_NO_AIRPORTS = 1 << 11;
        /// Replace coordinates by the nearest enroute fix.
        const READ_MATCH_WAYPOINTS = 1 << 12;
        /// Report informational messages in addition to errors.
        const REPORT = 1 << 13;

        const DEFAULT = Self::START_AND_DEST.bits()
            | Self::ALT_AND_SPEED.bits()
            | Self::SID_STAR.bits()
            | Self::ALTERNATES.bits()
            | Self::READ_ALTERNATES.bits();
    }
}

/// How SIDs and STARs are written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SidStarMode {
    /// Procedure and transition names.
    Names,
    /// The words `SID` and `STAR`.
    Generic,
    /// The fixes of the procedure.
    Fixes,
}

impl RouteStringOptions {
    /// Restores options persisted as integer.
    ///
    /// Falls back to the [default](Self::DEFAULT) if nothing was persisted.
    /// Unknown bits, e.g. written by a newer version, are dropped.
    pub fn from_settings(bits: Option<u32>) -> Self {
        match bits {
            None => Self::DEFAULT,
            Some(bits) => Self::try_from(bits).unwrap_or_else(|e| {
                warn!("{e}, dropping them");
                Self::from_bits_truncate(bits)
            }),
        }
    }

    /// Returns the SID and STAR mode, where names take precedence over the
    /// generic words which take precedence over fixes.
    pub fn sid_star_mode(&self) -> SidStarMode {
        if self.contains(Self::SID_STAR) {
            SidStarMode::Names
        } else if self.contains(Self::SID_STAR_GENERIC) {
            SidStarMode::Generic
        } else {
            SidStarMode::Fixes
        }
    }
}

impl Default for RouteStringOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for RouteStringOptions {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(Error::InvalidOptions(bits))
    }
}
