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

//! Route descriptions to flight plans and back.
//!
//! A route description is the compact text a pilot types or pastes to
//! describe a flight, e.g.
//!
//! ```text
//! KJFK N0420F350 DCT ALB J121 BOS KBOS
//! ```
//!
//! The [`route`] module reads such a description into a [`Flightplan`] by
//! resolving every word against the [navigation data] and writes a flight
//! plan back into text. Reading never fails: words that can't be resolved are
//! reported as [`Diagnostic`]s and the reader continues with the next word.
//!
//! The navigation data is not owned by this crate. Anything implementing
//! [`NavigationQuery`] can be used, while [`NavigationData`] provides an
//! in-memory implementation.
//!
//! [navigation data]: nd::NavigationQuery
//! [`Flightplan`]: fp::Flightplan
//! [`Diagnostic`]: route::Diagnostic
//! [`NavigationQuery`]: nd::NavigationQuery
//! [`NavigationData`]: nd::NavigationData

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod core;
pub mod error;
pub mod fc;
pub mod fp;
pub mod geom;
pub mod measurements;
pub mod nd;
pub mod route;

#[cfg(feature = "geojson")]
mod geojson;

pub use crate::core::*;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fp::{FlightRules, Flightplan, FlightplanBuilder, FlightplanEntry, Via};
    pub use crate::geom::Coordinate;
    pub use crate::measurements::{Length, LengthUnit, Speed, SpeedUnit};
    pub use crate::nd::{
        Airport, Fix, NavAid, NavigationData, NavigationDataBuilder, NavigationQuery,
        ProcedureKind,
    };
    pub use crate::route::{
        clean_route_string, read_route, write_route, Diagnostic, RouteRead, RouteStringOptions,
        RouteStringReader, RouteStringWriter,
    };
    pub use crate::{MagneticVariation, VerticalDistance};
}
