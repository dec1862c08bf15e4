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

use std::collections::HashMap;
use std::rc::Rc;

use geo::Point;
use log::{debug, warn};

use super::*;

type TerminalWaypoints = HashMap<String, Vec<Rc<Waypoint>>>;

/// An airway fragment whose fixes are resolved when the data is built.
struct AirwayDefinition {
    name: String,
    kind: AirwayKind,
    fixes: Vec<String>,
}

/// A procedure whose fixes are resolved when the data is built.
struct ProcedureDefinition {
    airport_ident: String,
    kind: ProcedureKind,
    name: String,
    fixes: Vec<String>,
    transitions: Vec<(String, Vec<String>)>,
}

/// Navigation data factory, which is used to build [navigation data].
///
/// Records get their database id in the order they are added. Airways and
/// procedures reference their fixes by ident. The references are resolved
/// when the navigation data is built, so the order in which records are added
/// doesn't matter.
///
/// ```
/// use routestring::coord;
/// use routestring::prelude::*;
/// use routestring::nd::{AirwayKind, Station, Waypoint};
///
/// let mut builder = NavigationDataBuilder::new();
/// builder.add_airport(Airport::new("KJFK", "JOHN F KENNEDY INTL", coord!(40.6398, -73.7789)));
/// builder.add_vor(Station::new("ALB", "ALBANY", 115.3, coord!(42.7474, -73.8031)));
/// builder.add_waypoint(Waypoint::new("CAM", coord!(42.9943, -73.3450)));
/// builder.add_airway("J121", AirwayKind::Jet, &["ALB", "CAM"]);
///
/// let nd = builder.build();
/// assert!(nd.is_airway("J121"));
/// assert!(nd.errors().is_empty());
/// ```
///
/// [navigation data]: super::NavigationData
#[derive(Default)]
pub struct NavigationDataBuilder {
    next_id: u32,
    airports: HashMap<String, Airport>,
    runways: HashMap<String, Vec<Runway>>,
    navaids: Vec<NavAid>,
    terminal_waypoints: TerminalWaypoints,
    airways: Vec<AirwayDefinition>,
    procedures: Vec<ProcedureDefinition>,
    errors: Vec<Error>,
}

impl NavigationDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> NavigationData {
        // add unassigned runways to airports
        self.runways.iter_mut().for_each(|(ident, rwys)| {
            if let Some(arpt) = self.airports.get_mut(ident) {
                arpt.runways.append(rwys);
            }
        });

        let airports: HashMap<String, Rc<Airport>> = self
            .airports
            .into_iter()
            .map(|(ident, arpt)| (ident, Rc::new(arpt)))
            .collect();

        let mut navaids: HashMap<String, Vec<NavAid>> = HashMap::new();
        for navaid in &self.navaids {
            navaids
                .entry(navaid.ident())
                .or_default()
                .push(navaid.clone());
        }

        let mut airways: HashMap<String, Vec<Airway>> = HashMap::new();
        for def in self.airways {
            let fixes = resolve_fixes(&def.fixes, &[], &navaids, None, &def.name, &mut self.errors);

            airways.entry(def.name.clone()).or_default().push(Airway {
                name: def.name,
                kind: def.kind,
                fixes,
            });
        }

        let mut procedures: HashMap<String, Vec<Procedure>> = HashMap::new();
        for def in self.procedures {
            let terminal = self
                .terminal_waypoints
                .get(&def.airport_ident)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let reference = airports.get(&def.airport_ident).map(|arpt| arpt.coordinate);
            let name = format!("{} {} {}", def.airport_ident, def.kind, def.name);

            let fixes = resolve_fixes(
                &def.fixes,
                terminal,
                &navaids,
                reference,
                &name,
                &mut self.errors,
            );
            let transitions = def
                .transitions
                .iter()
                .map(|(trans, idents)| Transition {
                    name: trans.clone(),
                    fixes: resolve_fixes(
                        idents,
                        terminal,
                        &navaids,
                        reference,
                        &format!("{name}.{trans}"),
                        &mut self.errors,
                    ),
                })
                .collect();

            procedures
                .entry(def.airport_ident.clone())
                .or_default()
                .push(Procedure {
                    airport_ident: def.airport_ident,
                    kind: def.kind,
                    name: def.name,
                    fixes,
                    transitions,
                });
        }

        let navaid_index = NavAidIndex::new(self.navaids.iter());

        debug!(
            "navigation data built: {} airports, {} navaids, {} airways, {} errors",
            airports.len(),
            self.navaids.len(),
            airways.len(),
            self.errors.len()
        );

        NavigationData {
            airports,
            navaids,
            airways,
            procedures,
            navaid_index,
            errors: self.errors,
        }
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_airport(&mut self, mut arpt: Airport) {
        arpt.id = self.next_id();
        self.airports.insert(arpt.ident(), arpt);
    }

    pub fn add_runway(&mut self, ident: &str, rwy: Runway) {
        match self.airports.get_mut(ident) {
            Some(arpt) => arpt.runways.push(rwy),
            // in case we have already a runway but no airport
            None => self.runways.entry(ident.to_string()).or_default().push(rwy),
        }
    }

    pub fn add_vor(&mut self, mut vor: Station) {
        vor.id = self.next_id();
        self.navaids.push(NavAid::Vor(Rc::new(vor)));
    }

    pub fn add_ndb(&mut self, mut ndb: Station) {
        ndb.id = self.next_id();
        self.navaids.push(NavAid::Ndb(Rc::new(ndb)));
    }

    pub fn add_waypoint(&mut self, mut wp: Waypoint) {
        wp.id = self.next_id();
        match &wp.region {
            Region::Enroute => self.navaids.push(NavAid::Waypoint(Rc::new(wp))),
            Region::TerminalArea(ident) => {
                self.terminal_waypoints
                    .entry(ident.clone())
                    .or_default()
                    .push(Rc::new(wp));
            }
        }
    }

    /// Adds an airway fragment through the enroute fixes with the idents
    /// `fixes`.
    pub fn add_airway(&mut self, name: &str, kind: AirwayKind, fixes: &[&str]) {
        self.airways.push(AirwayDefinition {
            name: name.to_string(),
            kind,
            fixes: fixes.iter().map(|s| s.to_string()).collect(),
        });
    }

    /// Adds a procedure of the airport `airport_ident`.
    ///
    /// The fixes are looked up in the airport's terminal area first.
    pub fn add_procedure(
        &mut self,
        airport_ident: &str,
        kind: ProcedureKind,
        name: &str,
        fixes: &[&str],
    ) {
        self.procedure_mut(airport_ident, kind, name).fixes =
            fixes.iter().map(|s| s.to_string()).collect();
    }

    /// Adds the transition `transition` to a procedure.
    pub fn add_transition(
        &mut self,
        airport_ident: &str,
        kind: ProcedureKind,
        name: &str,
        transition: &str,
        fixes: &[&str],
    ) {
        self.procedure_mut(airport_ident, kind, name).transitions.push((
            transition.to_string(),
            fixes.iter().map(|s| s.to_string()).collect(),
        ));
    }

    fn procedure_mut(
        &mut self,
        airport_ident: &str,
        kind: ProcedureKind,
        name: &str,
    ) -> &mut ProcedureDefinition {
        let pos = self.procedures.iter().position(|def| {
            def.airport_ident == airport_ident && def.kind == kind && def.name == name
        });

        let i = match pos {
            Some(i) => i,
            None => {
                self.procedures.push(ProcedureDefinition {
                    airport_ident: airport_ident.to_string(),
                    kind,
                    name: name.to_string(),
                    fixes: Vec::new(),
                    transitions: Vec::new(),
                });
                self.procedures.len() - 1
            }
        };

        &mut self.procedures[i]
    }

    pub fn add_error<E>(&mut self, e: E)
    where
        E: Into<Error>,
    {
        self.errors.push(e.into());
    }
}

/// Resolves the fix `idents` of an airway or procedure.
///
/// Terminal waypoints take precedence over enroute navaids. Of equally named
/// fixes the one closest to the previous fix is used. Unknown fixes are
/// skipped and reported as error.
fn resolve_fixes(
    idents: &[String],
    terminal: &[Rc<Waypoint>],
    navaids: &HashMap<String, Vec<NavAid>>,
    mut reference: Option<Point<f64>>,
    referenced_by: &str,
    errors: &mut Vec<Error>,
) -> Vec<NavAid> {
    let mut fixes = Vec::with_capacity(idents.len());

    for ident in idents {
        let terminal_candidates: Vec<NavAid> = terminal
            .iter()
            .filter(|wp| &wp.fix_ident == ident)
            .map(|wp| NavAid::Waypoint(Rc::clone(wp)))
            .collect();

        let candidates = if terminal_candidates.is_empty() {
            navaids.get(ident).map(Vec::as_slice).unwrap_or_default()
        } else {
            terminal_candidates.as_slice()
        };

        match closest(candidates, reference) {
            Some(fix) => {
                reference = Some(fix.coordinate());
                fixes.push(fix.clone());
            }
            None => {
                warn!("unknown fix {ident} referenced by {referenced_by}");
                errors.push(Error::UnknownFix {
                    ident: ident.clone(),
                    reference: referenced_by.to_string(),
                });
            }
        }
    }

    fixes
}
