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

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A string doesn't match the expected format.
    UnexpectedString,
    /// A word of a route can't be read as cruise speed and level.
    InvalidCruise(String),
    /// A word of a route can't be read as coordinate.
    InvalidCoordinate(String),
    /// Options persisted as integer contain unknown bits.
    InvalidOptions(u32),
    /// An airway or procedure references a fix that is not part of the
    /// navigation data.
    UnknownFix { ident: String, reference: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString => write!(f, "unexpected string"),
            Self::InvalidCruise(s) => {
                write!(f, "\"{s}\" is not a valid cruise speed and level")
            }
            Self::InvalidCoordinate(s) => write!(f, "\"{s}\" is not a valid coordinate"),
            Self::InvalidOptions(bits) => {
                write!(f, "options {bits:#x} contain unknown flags")
            }
            Self::UnknownFix { ident, reference } => {
                write!(f, "unknown fix {ident} referenced by {reference}")
            }
        }
    }
}

impl error::Error for Error {}
