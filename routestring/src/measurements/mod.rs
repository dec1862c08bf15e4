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

//! Physical measurements with a unit.
//!
//! Every measurement is stored in the unit it was created with and converts
//! through the quantity's SI unit when another unit is requested.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod constants;
mod length;
mod speed;

pub use length::{Length, LengthUnit};
pub use speed::{Speed, SpeedUnit};

/// The physical quantity a unit measures.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Length,
    Speed,
}

/// A unit of measure which can be converted to and from its SI unit.
pub trait UnitOfMeasure<T>: Copy {
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    fn symbol(&self) -> &'static str;

    /// Converts the SI `value` into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts the `value` given in this unit into the SI unit.
    fn to_si(&self, value: &T) -> T;
}

/// A value with a unit of measure.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<T, U> Measurement<T, U>
where
    T: Copy,
    U: UnitOfMeasure<T>,
{
    /// Creates a measurement from a value in SI unit, converted to `unit`.
    pub fn from_si(value: T, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the value in SI unit.
    pub fn to_si(&self) -> T {
        self.unit.to_si(&self.value)
    }

    /// Returns the measurement converted to another `unit`.
    pub fn convert_to(&self, unit: U) -> Self {
        Self::from_si(self.to_si(), unit)
    }
}

impl<T, U> fmt::Display for Measurement<T, U>
where
    T: fmt::Display,
    U: UnitOfMeasure<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
