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

use super::{RouteStringOptions, SidStarMode};
use crate::fp::{FlightRules, Flightplan, FlightplanEntry, ProcedureTag};
use crate::geom::Coordinate;
use crate::measurements::Speed;
use crate::nd::{Airport, Fix, NavAid, ProcedureKind, Runway};

/// Writes flight plans as route descriptions.
///
/// The words written are controlled by the [options]. Writing the same flight
/// plan with the same options always returns the same route.
///
/// [options]: RouteStringOptions
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RouteStringWriter {
    options: RouteStringOptions,
}

impl RouteStringWriter {
    pub fn new(options: RouteStringOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RouteStringOptions {
        self.options
    }

    /// Writes the flight plan `fp` with the cruise `speed`.
    ///
    /// If no speed is given, the cruise speed of the flight plan is used.
    pub fn write(&self, fp: &Flightplan, speed: Option<Speed>) -> String {
        let speed = speed.or(fp.cruise_speed());
        let start_and_dest = self.options.contains(RouteStringOptions::START_AND_DEST);

        let mut words: Vec<String> = Vec::with_capacity(fp.len() + 4);
        // whether the previous word is a fix, which is required for DCT
        let mut after_fix = false;

        if start_and_dest {
            if let Some(origin) = fp.origin() {
                words.push(airport_word(origin, fp.takeoff_rwy()));
                after_fix = true;
            }
        }

        if self.options.contains(RouteStringOptions::ALT_AND_SPEED) {
            if let Some(cruise) = cruise_word(fp, speed) {
                words.push(cruise);
            }
        }

        let entries = fp.enroute();
        let mut k = 0;

        while k < entries.len() {
            let entry = &entries[k];

            if let Some(tag) = &entry.procedure {
                if let Some(procedure) = self.procedure_words(tag) {
                    // all fixes of the procedure are written as one
                    k += entries[k..]
                        .iter()
                        .take_while(|e| e.procedure.as_ref() == Some(tag))
                        .count();

                    words.extend(procedure);
                    after_fix = false;
                    continue;
                }
            }

            if let Some(airway) = entry.airway() {
                if !self.options.contains(RouteStringOptions::NO_AIRWAYS) {
                    // consecutive fixes on the airway end at the exit fix
                    let count = entries[k..]
                        .iter()
                        .take_while(|e| e.airway() == Some(airway) && e.procedure.is_none())
                        .count();
                    k += count;

                    words.push(airway.to_string());
                    words.push(self.fix_word(&entries[k - 1], speed));
                    after_fix = true;
                    continue;
                }
            }

            if self.options.contains(RouteStringOptions::DCT)
                && after_fix
                && entry.airway().is_none()
            {
                words.push(String::from("DCT"));
            }

            words.push(self.fix_word(entry, speed));
            after_fix = true;
            k += 1;
        }

        if start_and_dest {
            if let Some(destination) = fp.destination() {
                let reached_by_airway = fp
                    .entries()
                    .last()
                    .is_some_and(|entry| entry.airway().is_some());

                if self.options.contains(RouteStringOptions::DCT) && after_fix && !reached_by_airway
                {
                    words.push(String::from("DCT"));
                }

                words.push(airport_word(destination, fp.landing_rwy()));
            }
        }

        if self.options.contains(RouteStringOptions::ALTERNATES) {
            words.extend(fp.alternates().iter().map(|aprt| aprt.ident()));
        }

        let route = words.join(" ");
        debug!("route written: {route}");
        route
    }

    /// Returns the words of a procedure or `None` if the fixes of the
    /// procedure should be written.
    fn procedure_words(&self, tag: &ProcedureTag) -> Option<Vec<String>> {
        match self.options.sid_star_mode() {
            SidStarMode::Fixes => None,
            SidStarMode::Generic => Some(vec![tag.kind.to_string()]),
            SidStarMode::Names => {
                let Some(trans) = &tag.transition else {
                    return Some(vec![tag.name.clone()]);
                };

                let (first, second) = match tag.kind {
                    ProcedureKind::Star
                        if self.options.contains(RouteStringOptions::STAR_REV_TRANSITION) =>
                    {
                        (trans, &tag.name)
                    }
                    _ => (&tag.name, trans),
                };

                if self.options.contains(RouteStringOptions::SID_STAR_SPACE) {
                    Some(vec![first.clone(), second.clone()])
                } else {
                    Some(vec![format!("{first}.{second}")])
                }
            }
        }
    }

    /// Returns the fix with the level to be flown from it on, e.g.
    /// `ALB/N0420F370`.
    fn fix_word(&self, entry: &FlightplanEntry, speed: Option<Speed>) -> String {
        let ident = match &entry.navaid {
            // user points are unknown to the navigation data
            NavAid::UserPoint { coordinate, .. } => Coordinate::from(*coordinate).to_icao(),
            navaid => navaid.ident(),
        };

        if !self.options.contains(RouteStringOptions::ALT_AND_SPEED) {
            return ident;
        }

        let speed = speed.and_then(|speed| speed.to_icao());
        match (speed, entry.level.and_then(|level| level.to_icao())) {
            (Some(speed), Some(level)) => format!("{ident}/{speed}{level}"),
            _ => ident,
        }
    }
}

fn airport_word(aprt: &Airport, rwy: Option<&Runway>) -> String {
    match rwy {
        Some(rwy) => format!("{}{}", aprt.ident(), rwy.designator),
        None => aprt.ident(),
    }
}

/// Returns the cruise speed and level as e.g. `N0420F350`, or `N0107VFR` for
/// VFR flights without level. Returns `None` if speed or level can't be
/// written in ICAO format.
fn cruise_word(fp: &Flightplan, speed: Option<Speed>) -> Option<String> {
    let speed = speed?.to_icao()?;

    let level = match (fp.cruise_level().and_then(|level| level.to_icao()), fp.rules()) {
        (Some(level), _) => level,
        (None, FlightRules::Vfr) => String::from("VFR"),
        (None, FlightRules::Ifr) => return None,
    };

    Some(format!("{speed}{level}"))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::fp::{FlightplanBuilder, Via};
    use crate::nd::Station;
    use crate::VerticalDistance;

    fn airport(ident: &str) -> Rc<Airport> {
        Rc::new(Airport::new(ident, ident, coord!(40.0, -73.0)))
    }

    fn fix(ident: &str) -> FlightplanEntry {
        FlightplanEntry::new(NavAid::Vor(Rc::new(Station::new(
            ident,
            ident,
            115.3,
            coord!(42.0, -73.0),
        ))))
    }

    fn sid(ident: &str, transition: Option<&str>) -> FlightplanEntry {
        fix(ident).procedure(ProcedureTag {
            kind: ProcedureKind::Sid,
            name: String::from("DEEZZ5"),
            transition: transition.map(str::to_string),
        })
    }

    fn star(ident: &str) -> FlightplanEntry {
        fix(ident).procedure(ProcedureTag {
            kind: ProcedureKind::Star,
            name: String::from("ROBUC1"),
            transition: Some(String::from("CAM")),
        })
    }

    fn airway_route() -> Flightplan {
        FlightplanBuilder::new()
            .origin(airport("KJFK"), None)
            .entry(fix("ALB").via(Via::Direct))
            .entry(fix("CAM").via(Via::Airway(String::from("J121"))))
            .entry(fix("BOS").via(Via::Airway(String::from("J121"))))
            .entry(fix("ABC"))
            .destination(airport("KBOS"), None, Some(Via::Direct))
            .alternate(airport("KPVD"))
            .cruise_level(VerticalDistance::Fl(350))
            .build()
    }

    #[test]
    fn writes_cruise_after_departure() {
        let fp = FlightplanBuilder::new()
            .origin(airport("KJFK"), None)
            .entry(fix("ALB"))
            .destination(airport("KBOS"), None, None)
            .cruise_level(VerticalDistance::Fl(350))
            .build();

        let writer = RouteStringWriter::new(
            RouteStringOptions::START_AND_DEST | RouteStringOptions::ALT_AND_SPEED,
        );
        assert_eq!(
            writer.write(&fp, Some(Speed::kt(420.0))),
            "KJFK N0420F350 ALB KBOS"
        );
    }

    #[test]
    fn skips_cruise_out_of_icao_range() {
        let fp = FlightplanBuilder::new()
            .origin(airport("KJFK"), None)
            .entry(fix("ALB").level(VerticalDistance::Fl(1000)))
            .destination(airport("KBOS"), None, None)
            .cruise_level(VerticalDistance::Fl(1000))
            .build();

        let writer = RouteStringWriter::new(RouteStringOptions::DEFAULT);
        assert_eq!(writer.write(&fp, Some(Speed::kt(420.0))), "KJFK ALB KBOS");

        let fp = FlightplanBuilder::new()
            .origin(airport("KJFK"), None)
            .destination(airport("KBOS"), None, None)
            .cruise_level(VerticalDistance::Fl(350))
            .build();
        assert_eq!(writer.write(&fp, Some(Speed::kt(12000.0))), "KJFK KBOS");
    }

    #[test]
    fn writes_vfr_cruise() {
        let fp = FlightplanBuilder::new()
            .origin(airport("EDDH"), None)
            .destination(airport("EDHL"), None, None)
            .rules(FlightRules::Vfr)
            .cruise_speed(Speed::kt(107.0))
            .build();

        let writer = RouteStringWriter::new(RouteStringOptions::DEFAULT);
        assert_eq!(writer.write(&fp, None), "EDDH N0107VFR EDHL");
    }

    #[test]
    fn collapses_airways() {
        let writer =
            RouteStringWriter::new(RouteStringOptions::START_AND_DEST | RouteStringOptions::DCT);
        assert_eq!(
            writer.write(&airway_route(), None),
            "KJFK DCT ALB J121 BOS DCT ABC DCT KBOS"
        );
    }

    #[test]
    fn writes_airway_fixes() {
        let writer =
            RouteStringWriter::new(RouteStringOptions::NO_AIRWAYS | RouteStringOptions::DCT);
        assert_eq!(writer.write(&airway_route(), None), "ALB CAM BOS DCT ABC");
    }

    #[test]
    fn writes_alternates_and_levels() {
        let mut fp = airway_route();
        let writer = RouteStringWriter::new(RouteStringOptions::DEFAULT);
        assert_eq!(
            writer.write(&fp, Some(Speed::mach(0.78))),
            "KJFK M078F350 ALB J121 BOS ABC KBOS KPVD"
        );

        fp = FlightplanBuilder::new()
            .entry(fix("ALB"))
            .entry(fix("ABC").level(VerticalDistance::Fl(370)))
            .build();
        assert_eq!(
            writer.write(&fp, Some(Speed::kt(420.0))),
            "ALB ABC/N0420F370"
        );
    }

    #[test]
    fn writes_procedures() {
        let fp = FlightplanBuilder::new()
            .origin(airport("KJFK"), None)
            .entry(sid("RNGRR", Some("CANDR")))
            .entry(sid("CANDR", Some("CANDR")))
            .entry(fix("ALB").via(Via::Direct))
            .entry(star("CAM"))
            .entry(star("BOSOX"))
            .destination(airport("KBOS"), None, None)
            .build();

        let options = RouteStringOptions::START_AND_DEST | RouteStringOptions::DCT;

        let writer = RouteStringWriter::new(options | RouteStringOptions::SID_STAR);
        assert_eq!(writer.write(&fp, None), "KJFK DEEZZ5.CANDR ALB ROBUC1.CAM KBOS");

        let writer = RouteStringWriter::new(
            options
                | RouteStringOptions::SID_STAR
                | RouteStringOptions::SID_STAR_SPACE
                | RouteStringOptions::STAR_REV_TRANSITION,
        );
        assert_eq!(writer.write(&fp, None), "KJFK DEEZZ5 CANDR ALB CAM ROBUC1 KBOS");

        let writer = RouteStringWriter::new(options | RouteStringOptions::SID_STAR_GENERIC);
        assert_eq!(writer.write(&fp, None), "KJFK SID ALB STAR KBOS");

        let writer = RouteStringWriter::new(options | RouteStringOptions::SID_STAR_NONE);
        assert_eq!(
            writer.write(&fp, None),
            "KJFK DCT RNGRR DCT CANDR DCT ALB DCT CAM DCT BOSOX DCT KBOS"
        );
    }

    #[test]
    fn writes_runways() {
        let eddh = Airport::new("EDDH", "HAMBURG", coord!(53.63, 9.99))
            .with_runway(crate::nd::Runway::new("33", coord!(53.62, 10.0)));
        let rwy = eddh.runway("33").cloned();

        let fp = FlightplanBuilder::new()
            .origin(Rc::new(eddh), rwy)
            .destination(airport("EDHL"), None, None)
            .build();

        let writer = RouteStringWriter::new(RouteStringOptions::START_AND_DEST);
        assert_eq!(writer.write(&fp, None), "EDDH33 EDHL");
    }
}
