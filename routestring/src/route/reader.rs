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

use std::rc::Rc;

use log::{debug, trace, warn};

use super::{clean_route_string, Cruise, Diagnostic, Lexer, RouteStringOptions, Word};
use crate::fp::{FlightRules, Flightplan, FlightplanBuilder, FlightplanEntry, ProcedureTag, Via};
use crate::geom::Coordinate;
use crate::measurements::{Length, Speed};
use crate::nd::{closest, Airport, Fix, NavAid, NavigationQuery, ProcedureKind, Runway};
use crate::VerticalDistance;

/// Radius within which coordinates are replaced by a fix.
const DEFAULT_SNAP_RADIUS_NM: f32 = 1.0;

/// The result of reading a route.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RouteRead {
    pub flightplan: Flightplan,
    /// Problems found in the route in the order of the words.
    pub diagnostics: Vec<Diagnostic>,
    /// Speed of the last cruise instruction.
    pub speed: Option<Speed>,
    /// Level of the last cruise instruction.
    pub level: Option<VerticalDistance>,
    /// Whether the last cruise instruction includes a level.
    pub altitude_included: bool,
}

impl RouteRead {
    /// Returns the diagnostics as human readable messages.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Reads route descriptions into flight plans.
///
/// Each word of the route is resolved against the navigation data `nd`. The
/// reader never fails. Words that can't be resolved are skipped and reported
/// as [`Diagnostic`].
///
/// ```
/// use routestring::coord;
/// use routestring::prelude::*;
/// use routestring::nd::Station;
///
/// let mut builder = NavigationDataBuilder::new();
/// builder.add_airport(Airport::new("KJFK", "JOHN F KENNEDY INTL", coord!(40.6398, -73.7789)));
/// builder.add_vor(Station::new("ALB", "ALBANY", 115.3, coord!(42.7474, -73.8031)));
/// let nd = builder.build();
///
/// let reader = RouteStringReader::new(&nd, RouteStringOptions::DEFAULT);
/// let read = reader.read("KJFK DCT ALB");
///
/// assert_eq!(read.flightplan.idents(), vec!["KJFK", "ALB"]);
/// assert!(read.diagnostics.is_empty());
/// ```
pub struct RouteStringReader<'a, N: NavigationQuery + ?Sized> {
    nd: &'a N,
    options: RouteStringOptions,
    snap_radius: Length,
}

impl<'a, N: NavigationQuery + ?Sized> RouteStringReader<'a, N> {
    pub fn new(nd: &'a N, options: RouteStringOptions) -> Self {
        Self {
            nd,
            options,
            snap_radius: Length::nm(DEFAULT_SNAP_RADIUS_NM),
        }
    }

    /// Sets the radius within which coordinates are replaced by the nearest
    /// fix if [`READ_MATCH_WAYPOINTS`] is set.
    ///
    /// [`READ_MATCH_WAYPOINTS`]: RouteStringOptions::READ_MATCH_WAYPOINTS
    pub fn with_snap_radius(mut self, radius: Length) -> Self {
        self.snap_radius = radius;
        self
    }

    pub fn options(&self) -> RouteStringOptions {
        self.options
    }

    /// Reads the route `s` into a new flight plan.
    pub fn read(&self, s: &str) -> RouteRead {
        let words = clean_route_string(s);
        debug!("route read: {:?}", words);

        let mut parse = Parse::new(self, Lexer::lex(&words));
        parse.run();
        parse.finish()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    ExpectStart,
    ExpectBody,
    ExpectEnd,
    ExpectAlternates,
    Done,
}

/// An airport found for a word with optional runway suffix.
struct AirportMatch {
    aprt: Rc<Airport>,
    rwy: Option<Runway>,
    unknown_rwy: Option<String>,
}

/// The state of reading one route.
struct Parse<'r, 'a, N: NavigationQuery + ?Sized> {
    reader: &'r RouteStringReader<'a, N>,
    /// Words without cruise instructions and generic procedure words.
    items: Vec<Word>,
    i: usize,
    /// Index of the destination or the number of items if there is none.
    end: usize,
    first_sig: Option<usize>,
    last_sig: Option<usize>,
    second_last_sig: Option<usize>,
    origin: Option<Rc<Airport>>,
    destination: Option<Rc<Airport>>,
    builder: FlightplanBuilder,
    via: Option<Via>,
    diagnostics: Vec<Diagnostic>,
    rules: FlightRules,
    speed: Option<Speed>,
    level: Option<VerticalDistance>,
}

impl<'r, 'a, N: NavigationQuery + ?Sized> Parse<'r, 'a, N> {
    fn new(reader: &'r RouteStringReader<'a, N>, words: Vec<Word>) -> Self {
        let mut rules = FlightRules::default();
        let mut speed = None;
        let mut level = None;
        let mut items = Vec::with_capacity(words.len());

        for word in words {
            match word {
                // the last instruction sets the cruise speed and level
                Word::Cruise(cruise) => {
                    trace!("cruise instruction {cruise}");
                    rules = cruise.rules();
                    speed = Some(cruise.speed);
                    level = cruise.level;
                }
                Word::GenericSid | Word::GenericStar => trace!("skipping generic {word}"),
                word => items.push(word),
            }
        }

        let end = items.len();

        Self {
            reader,
            items,
            i: 0,
            end,
            first_sig: None,
            last_sig: None,
            second_last_sig: None,
            origin: None,
            destination: None,
            builder: FlightplanBuilder::new(),
            via: None,
            diagnostics: Vec::new(),
            rules,
            speed,
            level,
        }
    }

    fn nd(&self) -> &'a N {
        self.reader.nd
    }

    fn options(&self) -> RouteStringOptions {
        self.reader.options
    }

    fn run(&mut self) {
        let mut state = State::ExpectStart;

        while state != State::Done {
            let next = match state {
                State::ExpectStart => self.start(),
                State::ExpectBody if self.i < self.end => {
                    self.body();
                    State::ExpectBody
                }
                State::ExpectBody => State::ExpectEnd,
                State::ExpectEnd => self.destination(),
                State::ExpectAlternates => self.alternates(),
                State::Done => State::Done,
            };

            if next != state {
                trace!("{state:?} -> {next:?} at word {}", self.i);
            }

            state = next;
        }
    }

    fn finish(mut self) -> RouteRead {
        self.builder.rules(self.rules);
        if let Some(speed) = self.speed {
            self.builder.cruise_speed(speed);
        }
        if let Some(level) = self.level {
            self.builder.cruise_level(level);
        }

        let flightplan = self.builder.build();

        debug!(
            "route read: {} entries, {} alternates, {} diagnostics",
            flightplan.len(),
            flightplan.alternates().len(),
            self.diagnostics.len()
        );

        RouteRead {
            flightplan,
            diagnostics: self.diagnostics,
            speed: self.speed,
            level: self.level,
            altitude_included: self.level.is_some(),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_info() && !self.options().contains(RouteStringOptions::REPORT) {
            trace!("{diagnostic}");
            return;
        }

        debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /////////////////////////////////////////////////////////////////////////
    // States
    /////////////////////////////////////////////////////////////////////////

    fn start(&mut self) -> State {
        if !self.options().contains(RouteStringOptions::READ_NO_AIRPORTS) {
            let found = self
                .items
                .first()
                .and_then(Word::ident)
                .and_then(|ident| self.find_airport(ident));

            match found {
                Some(m) => {
                    let (aprt, rwy) = self.take_airport(m);
                    debug!(
                        "origin set to {} (rwy {:?})",
                        aprt.ident(),
                        rwy.as_ref().map(|r| &r.designator)
                    );
                    self.builder.origin(Rc::clone(&aprt), rwy);
                    self.origin = Some(aprt);
                    self.i = 1;
                }
                None => {
                    if let Some(word) = self.items.first() {
                        warn!("route starts with {word} instead of the departure airport");
                    }
                }
            }
        }

        if self.origin.is_none() {
            if let Some(word) = self.items.first().map(ToString::to_string) {
                self.report(Diagnostic::NoDeparture(word));
            }
        }

        self.plan_end();
        self.plan_procedures();

        State::ExpectBody
    }

    fn body(&mut self) {
        match self.items[self.i].clone() {
            Word::Direct => {
                self.via = Some(Via::Direct);
                self.i += 1;
            }
            Word::Procedure { first, second } => self.dotted_procedure(&first, &second),
            Word::Coordinate {
                point,
                text,
                cruise,
            } => self.coordinate(point, &text, cruise),
            Word::Ident { ident, cruise } => self.ident(&ident, cruise),
            Word::Cruise(_) | Word::GenericSid | Word::GenericStar => self.i += 1,
        }
    }

    fn destination(&mut self) -> State {
        let Some(word) = self.items.get(self.end) else {
            if let Some(word) = self.items.last().map(ToString::to_string) {
                self.report(Diagnostic::NoDestination(word));
            }
            return State::Done;
        };

        let found = word.ident().and_then(|ident| self.find_airport(ident));

        match found {
            Some(m) => {
                let (aprt, rwy) = self.take_airport(m);
                debug!(
                    "destination set to {} (rwy {:?})",
                    aprt.ident(),
                    rwy.as_ref().map(|r| &r.designator)
                );
                let via = self.via.take();
                self.builder.destination(aprt, rwy, via);
                self.i = self.end + 1;
                State::ExpectAlternates
            }
            None => State::Done,
        }
    }

    fn alternates(&mut self) -> State {
        while let Some(word) = self.items.get(self.i).cloned() {
            self.i += 1;

            let aprt = word.ident().and_then(|ident| self.nd().airport(ident));
            match aprt {
                Some(aprt) => {
                    debug!("alternate {} added", aprt.ident());
                    self.builder.alternate(aprt);
                }
                None => {
                    // the first unknown alternate invalidates the remainder
                    self.report(Diagnostic::UnknownAlternate(word.to_string()));
                    while let Some(word) = self.items.get(self.i).cloned() {
                        self.i += 1;
                        if word.is_significant() {
                            self.report(Diagnostic::UnknownAlternate(word.to_string()));
                        }
                    }
                }
            }
        }

        State::Done
    }

    /////////////////////////////////////////////////////////////////////////
    // Planning
    /////////////////////////////////////////////////////////////////////////

    /// Finds the destination airport and where the alternates start.
    ///
    /// The route must end with a known airport. With alternates the
    /// destination is the first known airport of the trailing words that
    /// look like airports. Otherwise it's the last word.
    fn plan_end(&mut self) {
        let n = self.items.len();
        self.end = n;

        if self.options().contains(RouteStringOptions::READ_NO_AIRPORTS) {
            return;
        }

        let airport_at = |k: usize| {
            self.items[k]
                .ident()
                .and_then(|ident| self.find_airport(ident))
                .map(|m| (k, m.aprt))
        };

        let last = n.checked_sub(1).filter(|&k| k >= self.i);

        let destination = match last.and_then(airport_at) {
            Some(last) if self.options().contains(RouteStringOptions::READ_ALTERNATES) => {
                let mut run = last.0;
                while run > self.i && self.is_airport_like(&self.items[run - 1]) {
                    run -= 1;
                }

                (run..n).find_map(airport_at)
            }
            last => last,
        };

        match destination {
            Some((k, aprt)) => {
                self.end = k;
                self.destination = Some(aprt);
            }
            None => {
                if n > self.i {
                    warn!("route doesn't end with a destination airport");
                }
            }
        }
    }

    /// Finds the words adjacent to the departure and destination where SIDs
    /// and STARs are expected.
    fn plan_procedures(&mut self) {
        let mut significant = (self.i..self.end).filter(|&k| self.items[k].is_significant());
        self.first_sig = significant.next();

        let mut significant = (self.i..self.end)
            .rev()
            .filter(|&k| self.items[k].is_significant());
        self.last_sig = significant.next();
        self.second_last_sig = significant.next();
    }

    /// Returns `true` if the word is a known airport or is formed like an
    /// ICAO location indicator.
    fn is_airport_like(&self, word: &Word) -> bool {
        match word.ident() {
            Some(ident) => {
                self.find_airport(ident).is_some()
                    || (ident.len() == 4 && ident.bytes().all(|b| b.is_ascii_uppercase()))
            }
            None => false,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Body words
    /////////////////////////////////////////////////////////////////////////

    fn ident(&mut self, ident: &str, cruise: Option<Cruise>) {
        if self.airway(ident) {
            return;
        }

        if self.origin.is_some() && Some(self.i) == self.first_sig && self.sid(ident) {
            return;
        }

        if self.destination.is_some()
            && (Some(self.i) == self.last_sig || Some(self.i) == self.second_last_sig)
            && self.star(ident)
        {
            return;
        }

        self.i += 1;

        match self.fix(ident) {
            Some(navaid) => self.push(navaid, cruise),
            None if self.nd().is_airway(ident) => {
                let from = self.builder.last().map(|navaid| navaid.ident());
                let to = self.items.get(self.i).and_then(Word::ident).map(str::to_string);
                self.report(Diagnostic::NoAirwaySegment {
                    airway: ident.to_string(),
                    from,
                    to,
                });
            }
            None => self.report(Diagnostic::UnknownIdent(ident.to_string())),
        }
    }

    /// Reads the airway `name` with the next word as exit fix.
    fn airway(&mut self, name: &str) -> bool {
        if self.i + 1 >= self.end || !self.nd().is_airway(name) {
            return false;
        }

        let Some(Word::Ident { ident: to, cruise }) = self.items.get(self.i + 1).cloned() else {
            return false;
        };

        let Some(from) = self.builder.last() else {
            return false;
        };

        let Some(fixes) = self.nd().airway_segment(name, &from, &to) else {
            return false;
        };

        trace!("airway {name} from {} to {to} with {} fixes", from.ident(), fixes.len());

        let count = fixes.len();
        for (k, fix) in fixes.into_iter().enumerate() {
            let mut entry = FlightplanEntry::new(fix).via(Via::Airway(name.to_string()));
            if k + 1 == count {
                entry.level = cruise.and_then(|cruise| cruise.level);
            }
            self.builder.entry(entry);
        }

        self.via = None;
        self.i += 2;
        true
    }

    fn sid(&mut self, name: &str) -> bool {
        let Some(origin) = self.origin.clone() else {
            return false;
        };

        if self.options().contains(RouteStringOptions::SID_STAR_SPACE) {
            if let Some(trans) = self.next_ident() {
                if let Some(fixes) =
                    self.nd()
                        .procedure(&origin, ProcedureKind::Sid, name, Some(trans.as_str()))
                {
                    self.push_procedure(fixes, ProcedureKind::Sid, name, Some(trans.as_str()));
                    self.i += 2;
                    return true;
                }
            }
        }

        match self.nd().procedure(&origin, ProcedureKind::Sid, name, None) {
            Some(fixes) => {
                self.push_procedure(fixes, ProcedureKind::Sid, name, None);
                self.i += 1;
                true
            }
            None => false,
        }
    }

    fn star(&mut self, name: &str) -> bool {
        let Some(destination) = self.destination.clone() else {
            return false;
        };

        if self.options().contains(RouteStringOptions::SID_STAR_SPACE)
            && Some(self.i) == self.second_last_sig
            && Some(self.i + 1) == self.last_sig
        {
            if let Some(other) = self.next_ident() {
                // either STAR TRANS or TRANS STAR
                for (star, trans) in [(name, other.as_str()), (other.as_str(), name)] {
                    if let Some(fixes) =
                        self.nd()
                            .procedure(&destination, ProcedureKind::Star, star, Some(trans))
                    {
                        self.push_procedure(fixes, ProcedureKind::Star, star, Some(trans));
                        self.i += 2;
                        return true;
                    }
                }
            }
        }

        if Some(self.i) != self.last_sig {
            return false;
        }

        match self.nd().procedure(&destination, ProcedureKind::Star, name, None) {
            Some(fixes) => {
                self.push_procedure(fixes, ProcedureKind::Star, name, None);
                self.i += 1;
                true
            }
            None => false,
        }
    }

    /// Reads `SID.TRANS`, `STAR.TRANS` or `TRANS.STAR`.
    fn dotted_procedure(&mut self, first: &str, second: &str) {
        self.i += 1;
        let at = self.i - 1;

        if Some(at) == self.first_sig {
            if let Some(origin) = self.origin.clone() {
                if let Some(fixes) = self
                    .nd()
                    .procedure(&origin, ProcedureKind::Sid, first, Some(second))
                {
                    self.push_procedure(fixes, ProcedureKind::Sid, first, Some(second));
                    return;
                }
            }
        }

        if Some(at) == self.last_sig {
            if let Some(destination) = self.destination.clone() {
                for (star, trans) in [(first, second), (second, first)] {
                    if let Some(fixes) =
                        self.nd()
                            .procedure(&destination, ProcedureKind::Star, star, Some(trans))
                    {
                        self.push_procedure(fixes, ProcedureKind::Star, star, Some(trans));
                        return;
                    }
                }
            }
        }

        let airport = if Some(at) == self.last_sig && self.destination.is_some() {
            self.destination.as_ref()
        } else if Some(at) == self.first_sig {
            self.origin.as_ref()
        } else {
            None
        };

        let name = format!("{first}.{second}");
        match airport.map(|aprt| aprt.ident()) {
            Some(airport) => self.report(Diagnostic::UnknownProcedure { airport, name }),
            None => self.report(Diagnostic::UnknownIdent(name)),
        }
    }

    fn coordinate(&mut self, point: geo::Point<f64>, text: &str, cruise: Option<Cruise>) {
        self.i += 1;

        let snapped = if self.options().contains(RouteStringOptions::READ_MATCH_WAYPOINTS) {
            self.nd().nearest_waypoint(&point, self.reader.snap_radius)
        } else {
            None
        };

        let navaid = match snapped {
            Some(navaid) => {
                self.report(Diagnostic::SnappedCoordinate {
                    coordinate: text.to_string(),
                    ident: navaid.ident(),
                });
                navaid
            }
            None => NavAid::Coordinate(point),
        };

        self.push(navaid, cruise);
    }

    /////////////////////////////////////////////////////////////////////////
    // Helpers
    /////////////////////////////////////////////////////////////////////////

    /// Resolves the `ident` against the navaids and airports.
    ///
    /// Of several navaids with the same ident, the one closest to the
    /// previous point is used.
    fn fix(&mut self, ident: &str) -> Option<NavAid> {
        let candidates = self.nd().navaids(ident);

        match candidates.len() {
            0 => self.nd().airport(ident).map(NavAid::Airport),
            1 => candidates.into_iter().next(),
            count => {
                let reference = self.builder.last().map(|navaid| navaid.coordinate());
                let chosen = closest(&candidates, reference).cloned();

                if let Some(navaid) = &chosen {
                    self.report(Diagnostic::AmbiguousIdent {
                        ident: ident.to_string(),
                        candidates: count,
                        chosen: Coordinate::from(navaid.coordinate()).to_icao(),
                    });
                }

                chosen
            }
        }
    }

    /// Resolves an airport ident with an optional runway suffix like `EDDH33`.
    fn find_airport(&self, ident: &str) -> Option<AirportMatch> {
        if let Some(aprt) = self.nd().airport(ident) {
            return Some(AirportMatch {
                aprt,
                rwy: None,
                unknown_rwy: None,
            });
        }

        let (ident, designator) = ident.split_at_checked(4)?;
        if designator.is_empty() {
            return None;
        }

        let aprt = self.nd().airport(ident)?;
        let rwy = aprt.runway(designator).cloned();
        let unknown_rwy = rwy.is_none().then(|| designator.to_string());

        Some(AirportMatch {
            aprt,
            rwy,
            unknown_rwy,
        })
    }

    fn take_airport(&mut self, m: AirportMatch) -> (Rc<Airport>, Option<Runway>) {
        if let Some(runway) = m.unknown_rwy {
            self.report(Diagnostic::UnknownRunway {
                airport: m.aprt.ident(),
                runway,
            });
        }

        (m.aprt, m.rwy)
    }

    fn next_ident(&self) -> Option<String> {
        self.items
            .get(self.i + 1)
            .filter(|_| self.i + 1 < self.end)
            .and_then(Word::ident)
            .map(str::to_string)
    }

    fn push(&mut self, navaid: NavAid, cruise: Option<Cruise>) {
        trace!("{navaid} added");

        let mut entry = FlightplanEntry::new(navaid);
        entry.via = self.via.take();
        entry.level = cruise.and_then(|cruise| cruise.level);
        self.builder.entry(entry);
    }

    fn push_procedure(
        &mut self,
        fixes: Vec<NavAid>,
        kind: ProcedureKind,
        name: &str,
        transition: Option<&str>,
    ) {
        trace!("{kind} {name} ({transition:?}) with {} fixes", fixes.len());

        let tag = ProcedureTag {
            kind,
            name: name.to_string(),
            transition: transition.map(str::to_string),
        };

        self.via = None;

        for fix in fixes {
            // a procedure can start at the fix we are already at
            if self.builder.last().is_some_and(|last| last.is_same(&fix)) {
                continue;
            }

            self.builder
                .entry(FlightplanEntry::new(fix).procedure(tag.clone()));
        }
    }
}
