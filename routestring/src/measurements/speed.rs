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

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};
use crate::error::Error;

/// Speed unit with _m/s_ as SI unit.
///
/// Mach is converted with the speed of sound at ISA sea-level conditions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum SpeedUnit {
    MetersPerSecond,
    Knots,
    KilometersPerHour,
    Mach,
}

impl UnitOfMeasure<f32> for SpeedUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Speed
    }

    fn si() -> Self {
        Self::MetersPerSecond
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::Knots => "kt",
            Self::KilometersPerHour => "km/h",
            Self::Mach => "Ma",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::MetersPerSecond => value,
            Self::Knots => value * constants::METER_PER_SECONDS_IN_KNOTS,
            Self::KilometersPerHour => value * constants::KILOMETERS_PER_HOUR_IN_METER_PER_SECONDS,
            Self::Mach => value / constants::SPEED_OF_SOUND_ISA_SL,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::MetersPerSecond => *value,
            Self::Knots => value / constants::METER_PER_SECONDS_IN_KNOTS,
            Self::KilometersPerHour => value / constants::KILOMETERS_PER_HOUR_IN_METER_PER_SECONDS,
            Self::Mach => value * constants::SPEED_OF_SOUND_ISA_SL,
        }
    }
}

pub type Speed = Measurement<f32, SpeedUnit>;

impl Speed {
    pub fn kt(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::Knots,
        }
    }

    pub fn kmh(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::KilometersPerHour,
        }
    }

    pub fn mach(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::Mach,
        }
    }

    /// Formats the speed as used in the ICAO flight plan.
    ///
    /// Knots are written as `N0107`, kilometers per hour as `K0200` and Mach
    /// in hundredths as `M082`. Speeds in m/s are written in knots. Returns
    /// `None` if the speed doesn't fit into the figures of its unit.
    pub fn to_icao(&self) -> Option<String> {
        let figures = |value: f32, max: f32| {
            let value = value.round();
            (0.0..=max).contains(&value).then_some(value as u32)
        };

        match self.unit {
            SpeedUnit::Knots => figures(self.value, 9999.0).map(|v| format!("N{v:04}")),
            SpeedUnit::KilometersPerHour => {
                figures(self.value, 9999.0).map(|v| format!("K{v:04}"))
            }
            SpeedUnit::Mach => figures(self.value * 100.0, 999.0).map(|v| format!("M{v:03}")),
            SpeedUnit::MetersPerSecond => self.convert_to(SpeedUnit::Knots).to_icao(),
        }
    }
}

impl FromStr for Speed {
    type Err = Error;

    /// Parses a string `s` to return a Speed.
    ///
    /// The string should be according to ICAO Doc. 4444 Annex 2:
    /// - Knots, expressed as N followed by 4 figures e.g. `N0485`
    /// - Kilometers per hour, expressed as K followed by 4 figures e.g. `K0830`
    /// - Mach number in hundredths, expressed as M followed by 3 figures e.g.
    ///   `M082`
    ///
    /// Knots and kilometers per hour are also read without the leading zero,
    /// e.g. `N420`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let figures = |len: std::ops::RangeInclusive<usize>| -> Result<f32, Error> {
            match s.get(1..) {
                Some(value)
                    if len.contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit()) =>
                {
                    value.parse::<f32>().map_err(|_| Error::UnexpectedString)
                }
                _ => Err(Error::UnexpectedString),
            }
        };

        match s.get(0..1).unwrap_or_default() {
            "N" => Ok(Self::kt(figures(3..=4)?)),
            "K" => Ok(Self::kmh(figures(3..=4)?)),
            "M" => Ok(Self::mach(figures(3..=3)? / 100.0)),
            _ => Err(Error::UnexpectedString),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_from_str() {
        assert_eq!("N0107".parse::<Speed>(), Ok(Speed::kt(107.0)));
        assert_eq!("K0830".parse::<Speed>(), Ok(Speed::kmh(830.0)));
        assert_eq!("M082".parse::<Speed>(), Ok(Speed::mach(0.82)));
        assert_eq!("N420".parse::<Speed>(), Ok(Speed::kt(420.0)));
        assert_eq!("N42".parse::<Speed>(), Err(Error::UnexpectedString));
        assert_eq!("N04200".parse::<Speed>(), Err(Error::UnexpectedString));
        assert_eq!("N01A7".parse::<Speed>(), Err(Error::UnexpectedString));
        assert_eq!("X0107".parse::<Speed>(), Err(Error::UnexpectedString));
    }

    #[test]
    fn speed_to_icao() {
        assert_eq!(Speed::kt(420.0).to_icao().as_deref(), Some("N0420"));
        assert_eq!(Speed::kmh(830.0).to_icao().as_deref(), Some("K0830"));
        assert_eq!(Speed::mach(0.82).to_icao().as_deref(), Some("M082"));
        assert_eq!(
            Speed::from_si(100.0, SpeedUnit::MetersPerSecond)
                .to_icao()
                .as_deref(),
            Some("N0194")
        );
    }

    #[test]
    fn speed_too_fast_for_icao() {
        assert_eq!(Speed::kt(12000.0).to_icao(), None);
        assert_eq!(Speed::mach(10.5).to_icao(), None);
        assert_eq!(Speed::kt(9999.0).to_icao().as_deref(), Some("N9999"));
    }
}
