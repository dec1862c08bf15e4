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

//! Navigation Data.
//!
//! The route reader and writer don't own any navigation data. They query it
//! through the [`NavigationQuery`] trait, which is implemented in memory by
//! [`NavigationData`].

use std::collections::HashMap;
use std::rc::Rc;

use geo::{Distance, Geodesic, Point};

use crate::error::Error;
use crate::measurements::Length;

mod airport;
mod airway;
mod builder;
mod fix;
mod index;
mod navaid;
mod procedure;
mod station;
mod waypoint;

pub use airport::{Airport, Runway};
pub use airway::{Airway, AirwayKind};
pub use builder::NavigationDataBuilder;
pub use fix::Fix;
use index::NavAidIndex;
pub use navaid::NavAid;
pub use procedure::{Procedure, ProcedureKind, Transition};
pub use station::Station;
pub use waypoint::{Region, Waypoint};

/// Read-only queries against navigation data.
///
/// All queries use identifiers as written in a route description. A query
/// must return the same answer for the duration of reading or writing one
/// route.
pub trait NavigationQuery {
    /// Returns the airport with the ICAO `ident`.
    fn airport(&self, ident: &str) -> Option<Rc<Airport>>;

    /// Returns all enroute navaids (VOR, NDB and waypoints) with the `ident`.
    fn navaids(&self, ident: &str) -> Vec<NavAid>;

    /// Returns `true` if an airway with the `name` exists.
    fn is_airway(&self, name: &str) -> bool;

    /// Returns the fixes flown on the airway `name` from the fix `from` to
    /// the fix with the ident `to`.
    ///
    /// The fixes after `from` up to and including `to` are returned in flight
    /// order or `None` if no fragment of the airway connects both fixes.
    fn airway_segment(&self, name: &str, from: &NavAid, to: &str) -> Option<Vec<NavAid>>;

    /// Returns the fixes of the procedure `name` of the `airport` in flight
    /// order, optionally joined with the fixes of the `transition`.
    fn procedure(
        &self,
        airport: &Airport,
        kind: ProcedureKind,
        name: &str,
        transition: Option<&str>,
    ) -> Option<Vec<NavAid>>;

    /// Returns the enroute navaid closest to the `point` within the `radius`.
    fn nearest_waypoint(&self, point: &Point<f64>, radius: Length) -> Option<NavAid>;
}

/// Returns the candidate closest to the `reference` point.
///
/// Equally distant candidates are ranked by ascending database id, where
/// points without id come last. Without a reference the candidate with the
/// lowest id is returned.
pub fn closest<'a>(
    candidates: impl IntoIterator<Item = &'a NavAid>,
    reference: Option<Point<f64>>,
) -> Option<&'a NavAid> {
    let dist = |navaid: &NavAid| {
        reference.map_or(0.0, |p| Geodesic.distance(p, navaid.coordinate()))
    };
    let id = |navaid: &NavAid| navaid.id().unwrap_or(u32::MAX);

    candidates
        .into_iter()
        .min_by(|a, b| dist(a).total_cmp(&dist(b)).then_with(|| id(a).cmp(&id(b))))
}

/// In-memory navigation data.
///
/// The navigation data is created with the [`NavigationDataBuilder`].
#[derive(Clone, Debug, Default)]
pub struct NavigationData {
    airports: HashMap<String, Rc<Airport>>,
    navaids: HashMap<String, Vec<NavAid>>,
    airways: HashMap<String, Vec<Airway>>,
    procedures: HashMap<String, Vec<Procedure>>,
    navaid_index: NavAidIndex,
    errors: Vec<Error>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all fragments of the airway `name`.
    pub fn airways(&self, name: &str) -> &[Airway] {
        self.airways.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns all procedures of the airport `ident`.
    pub fn procedures(&self, ident: &str) -> &[Procedure] {
        self.procedures.get(ident).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the errors that occurred while building the navigation data.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl NavigationQuery for NavigationData {
    fn airport(&self, ident: &str) -> Option<Rc<Airport>> {
        self.airports.get(ident).cloned()
    }

    fn navaids(&self, ident: &str) -> Vec<NavAid> {
        self.navaids.get(ident).cloned().unwrap_or_default()
    }

    fn is_airway(&self, name: &str) -> bool {
        self.airways.contains_key(name)
    }

    fn airway_segment(&self, name: &str, from: &NavAid, to: &str) -> Option<Vec<NavAid>> {
        self.airways(name)
            .iter()
            .find_map(|airway| airway.segment(from, to))
    }

    fn procedure(
        &self,
        airport: &Airport,
        kind: ProcedureKind,
        name: &str,
        transition: Option<&str>,
    ) -> Option<Vec<NavAid>> {
        self.procedures(&airport.ident())
            .iter()
            .find(|procedure| procedure.kind == kind && procedure.name == name)
            .and_then(|procedure| procedure.fixes(transition))
    }

    fn nearest_waypoint(&self, point: &Point<f64>, radius: Length) -> Option<NavAid> {
        self.navaid_index.nearest(point, radius).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(id: u32, ident: &str, lat: f64, lon: f64) -> NavAid {
        let mut wp = Waypoint::new(ident, coord!(lat, lon));
        wp.id = id;
        NavAid::Waypoint(Rc::new(wp))
    }

    #[test]
    fn closest_to_reference() {
        let candidates = [waypoint(1, "ABC", 42.0, -74.0), waypoint(2, "ABC", 44.0, -71.0)];

        let near_boston = closest(&candidates, Some(coord!(42.36, -71.01)));
        assert_eq!(near_boston.and_then(NavAid::id), Some(2));

        let near_albany = closest(&candidates, Some(coord!(42.75, -73.80)));
        assert_eq!(near_albany.and_then(NavAid::id), Some(1));
    }

    #[test]
    fn closest_by_id_on_tie() {
        let candidates = [waypoint(7, "ABC", 42.0, -74.0), waypoint(3, "ABC", 42.0, -74.0)];

        assert_eq!(
            closest(&candidates, Some(coord!(40.0, -70.0))).and_then(NavAid::id),
            Some(3)
        );
        assert_eq!(closest(&candidates, None).and_then(NavAid::id), Some(3));
    }
}
