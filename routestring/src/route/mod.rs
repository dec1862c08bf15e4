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

//! Route descriptions.
//!
//! A route description is a space separated list of words as used in field
//! 15 of the ICAO flight plan:
//!
//! ```text
//! KJFK N0420F350 DEEZZ5.CANDR DCT ALB J121 BOS ROBUC1 KBOS KPVD
//! ```
//!
//! The route starts with the departure airport followed by the cruise speed
//! and level. After an optional SID, the enroute part is composed of fixes,
//! coordinates and airways where `DCT` marks a direct connection between two
//! fixes. The route ends with an optional STAR, the destination airport and
//! the alternates.
//!
//! [`read_route`] resolves each word against the [navigation data] and
//! returns the [`Flightplan`] with all problems found as [`Diagnostic`]s.
//! [`write_route`] does the opposite. Both are controlled by the
//! [`RouteStringOptions`].
//!
//! [navigation data]: crate::nd::NavigationQuery

use crate::fp::Flightplan;
use crate::measurements::Speed;
use crate::nd::NavigationQuery;

mod clean;
mod diagnostic;
mod options;
mod reader;
mod token;
mod writer;

pub use clean::clean_route_string;
pub use diagnostic::Diagnostic;
pub use options::{RouteStringOptions, SidStarMode};
pub use reader::{RouteRead, RouteStringReader};
pub use token::Cruise;
use token::{Lexer, Word};
pub use writer::RouteStringWriter;

/// Reads the route `s` with the navigation data `nd`.
///
/// This is a shortcut for [`RouteStringReader::read`] with the default snap
/// radius.
pub fn read_route<N>(s: &str, nd: &N, options: RouteStringOptions) -> RouteRead
where
    N: NavigationQuery + ?Sized,
{
    RouteStringReader::new(nd, options).read(s)
}

/// Writes the flight plan `fp` as route description.
///
/// This is a shortcut for [`RouteStringWriter::write`].
pub fn write_route(fp: &Flightplan, speed: Option<Speed>, options: RouteStringOptions) -> String {
    RouteStringWriter::new(options).write(fp, speed)
}
