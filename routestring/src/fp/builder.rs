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

use log::debug;

use super::*;

/// Flight plan factory, which is used to build a [`Flightplan`].
///
/// The departure airport becomes the first and the destination airport the
/// last entry of the flight plan, regardless of the order in which the
/// entries are added.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FlightplanBuilder {
    entries: Vec<FlightplanEntry>,
    rules: FlightRules,
    cruise_level: Option<VerticalDistance>,
    cruise_speed: Option<Speed>,
    origin: Option<(Rc<Airport>, Option<Runway>)>,
    destination: Option<(Rc<Airport>, Option<Runway>, Option<Via>)>,
    alternates: Vec<Rc<Airport>>,
}

impl FlightplanBuilder {
    /// Creates a new builder.
    pub fn new() -> FlightplanBuilder {
        Self::default()
    }

    pub fn build(&self) -> Flightplan {
        let mut entries = Vec::with_capacity(self.entries.len() + 2);

        if let Some((aprt, _)) = &self.origin {
            entries.push(FlightplanEntry::new(NavAid::Airport(Rc::clone(aprt))));
        }

        entries.extend(self.entries.iter().cloned());

        if let Some((aprt, _, via)) = &self.destination {
            entries.push(FlightplanEntry {
                via: via.clone(),
                ..FlightplanEntry::new(NavAid::Airport(Rc::clone(aprt)))
            });
        }

        debug!(
            "flight plan built: {} entries, {} alternates",
            entries.len(),
            self.alternates.len()
        );

        Flightplan {
            entries,
            rules: self.rules,
            cruise_level: self.cruise_level,
            cruise_speed: self.cruise_speed,
            origin: self.origin.as_ref().map(|(aprt, _)| Rc::clone(aprt)),
            takeoff_rwy: self.origin.as_ref().and_then(|(_, rwy)| rwy.clone()),
            destination: self.destination.as_ref().map(|(aprt, _, _)| Rc::clone(aprt)),
            landing_rwy: self.destination.as_ref().and_then(|(_, rwy, _)| rwy.clone()),
            alternates: self.alternates.clone(),
        }
    }

    pub fn origin(&mut self, aprt: Rc<Airport>, rwy: Option<Runway>) -> &mut Self {
        self.origin = Some((aprt, rwy));
        self
    }

    /// Sets the destination which is reached `via` from the last entry.
    pub fn destination(
        &mut self,
        aprt: Rc<Airport>,
        rwy: Option<Runway>,
        via: Option<Via>,
    ) -> &mut Self {
        self.destination = Some((aprt, rwy, via));
        self
    }

    pub fn entry(&mut self, entry: FlightplanEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn alternate(&mut self, aprt: Rc<Airport>) -> &mut Self {
        self.alternates.push(aprt);
        self
    }

    pub fn rules(&mut self, rules: FlightRules) -> &mut Self {
        self.rules = rules;
        self
    }

    pub fn cruise_level(&mut self, level: VerticalDistance) -> &mut Self {
        self.cruise_level = Some(level);
        self
    }

    pub fn cruise_speed(&mut self, speed: Speed) -> &mut Self {
        self.cruise_speed = Some(speed);
        self
    }

    /// Returns the last point added, which is the departure airport if no
    /// other entry was added yet.
    pub fn last(&self) -> Option<NavAid> {
        self.entries
            .last()
            .map(|entry| entry.navaid.clone())
            .or_else(|| {
                self.origin
                    .as_ref()
                    .map(|(aprt, _)| NavAid::Airport(Rc::clone(aprt)))
            })
    }
}
