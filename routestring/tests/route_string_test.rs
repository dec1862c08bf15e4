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

use routestring::coord;
use routestring::nd::{AirwayKind, Runway, Station, Waypoint};
use routestring::prelude::*;

// New York to Boston with
// - ALB VOR and the waypoint CAM on J121 to the BOS VOR
// - two waypoints ABC, one next to New York and one next to Boston
// - SID DEEZZ5 of KJFK with transition CANDR
// - STAR ROBUC1 of KBOS with transition CAM
fn navigation_data() -> NavigationData {
    let mut builder = NavigationDataBuilder::new();

    builder.add_airport(
        Airport::new("KJFK", "JOHN F KENNEDY INTL", coord!(40.6398, -73.7789))
            .with_runway(Runway::new("04L", coord!(40.6222, -73.7856)))
            .with_runway(Runway::new("22R", coord!(40.6424, -73.7619))),
    );
    builder.add_airport(Airport::new(
        "KBOS",
        "GENERAL EDWARD LAWRENCE LOGAN INTL",
        coord!(42.3629, -71.0064),
    ));
    builder.add_runway("KBOS", Runway::new("04R", coord!(42.3540, -71.0110)));
    builder.add_airport(Airport::new(
        "KPVD",
        "THEODORE FRANCIS GREEN STATE",
        coord!(41.7240, -71.4283),
    ));
    builder.add_airport(Airport::new("KALB", "ALBANY INTL", coord!(42.7483, -73.8017)));

    builder.add_vor(Station::new("ALB", "ALBANY", 115.3, coord!(42.7474, -73.8031)));
    builder.add_vor(Station::new("BOS", "BOSTON", 112.7, coord!(42.3574, -70.9894)));
    builder.add_waypoint(Waypoint::new("CAM", coord!(42.9943, -73.3450)));
    builder.add_waypoint(Waypoint::new("CANDR", coord!(40.9, -73.6)));
    builder.add_waypoint(Waypoint::new("ABC", coord!(41.0, -73.5)));
    builder.add_waypoint(Waypoint::new("ABC", coord!(42.5, -71.3)));

    builder.add_waypoint(Waypoint::terminal("KJFK", "RNGRR", coord!(40.7, -73.7)));
    builder.add_waypoint(Waypoint::terminal("KBOS", "ROBUC", coord!(42.7, -71.3)));
    builder.add_waypoint(Waypoint::terminal("KBOS", "BOSOX", coord!(42.5, -71.1)));

    builder.add_airway("J121", AirwayKind::Jet, &["ALB", "CAM", "BOS"]);

    builder.add_procedure("KJFK", ProcedureKind::Sid, "DEEZZ5", &["RNGRR"]);
    builder.add_transition("KJFK", ProcedureKind::Sid, "DEEZZ5", "CANDR", &["RNGRR", "CANDR"]);
    builder.add_procedure("KBOS", ProcedureKind::Star, "ROBUC1", &["ROBUC", "BOSOX"]);
    builder.add_transition("KBOS", ProcedureKind::Star, "ROBUC1", "CAM", &["CAM", "ROBUC"]);

    let nd = builder.build();
    assert!(nd.errors().is_empty(), "should have no errors: {:?}", nd.errors());
    nd
}

fn read(s: &str, options: RouteStringOptions) -> RouteRead {
    read_route(s, &navigation_data(), options)
}

#[test]
fn reads_direct_route() {
    let read = read("KJFK DCT ALB", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB"]);
    assert!(matches!(fp.entries()[0].navaid, NavAid::Airport(_)));
    assert!(matches!(fp.entries()[1].navaid, NavAid::Vor(_)));
    assert_eq!(fp.entries()[1].via, Some(Via::Direct));
    assert_eq!(fp.origin().map(|aprt| aprt.ident()), Some(String::from("KJFK")));
    assert!(read.diagnostics.is_empty(), "{:?}", read.diagnostics);
}

#[test]
fn skips_unknown_fix() {
    let read = read("KJFK UNKNOWNFIX KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.idents(), vec!["KJFK", "KBOS"]);
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::UnknownIdent(String::from("UNKNOWNFIX"))]
    );
    assert!(read.messages()[0].contains("UNKNOWNFIX"));
}

#[test]
fn reads_empty_route() {
    for s in ["", "   ", " ,.;/ "] {
        let read = read(s, RouteStringOptions::DEFAULT);

        assert!(read.flightplan.is_empty());
        assert!(read.diagnostics.is_empty());
        assert_eq!(read.speed, None);
        assert!(!read.altitude_included);
    }
}

#[test]
fn reads_airway_and_cruise() {
    let read = read(
        "kjfk n0420f350 dct alb j121 bos kbos",
        RouteStringOptions::DEFAULT,
    );
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "CAM", "BOS", "KBOS"]);
    assert_eq!(fp.entries()[2].airway(), Some("J121"));
    assert_eq!(fp.entries()[3].airway(), Some("J121"));
    assert_eq!(fp.destination().map(|aprt| aprt.ident()), Some(String::from("KBOS")));

    assert_eq!(read.speed, Some(Speed::kt(420.0)));
    assert_eq!(read.level, Some(VerticalDistance::Fl(350)));
    assert!(read.altitude_included);
    assert_eq!(fp.cruise_level(), Some(VerticalDistance::Fl(350)));
    assert!(read.diagnostics.is_empty(), "{:?}", read.diagnostics);
}

#[test]
fn reads_airway_against_its_direction() {
    let read = read("KBOS BOS J121 ALB KJFK", RouteStringOptions::DEFAULT);
    assert_eq!(read.flightplan.idents(), vec!["KBOS", "BOS", "CAM", "ALB", "KJFK"]);
}

#[test]
fn reports_airway_mismatch() {
    let read = read("KJFK ALB J121 XYZ KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.idents(), vec!["KJFK", "ALB", "KBOS"]);
    assert_eq!(
        read.diagnostics,
        vec![
            Diagnostic::NoAirwaySegment {
                airway: String::from("J121"),
                from: Some(String::from("ALB")),
                to: Some(String::from("XYZ")),
            },
            Diagnostic::UnknownIdent(String::from("XYZ")),
        ]
    );
}

#[test]
fn round_trip() {
    let options = RouteStringOptions::START_AND_DEST | RouteStringOptions::DCT;
    let first = read("KJFK DCT ALB J121 BOS ABC KBOS", options);

    let route = write_route(&first.flightplan, None, options);
    assert_eq!(route, "KJFK DCT ALB J121 BOS DCT ABC DCT KBOS");

    let second = read(&route, options);
    assert_eq!(second.flightplan.idents(), first.flightplan.idents());

    let coordinates = |read: &RouteRead| -> Vec<_> {
        read.flightplan
            .entries()
            .iter()
            .map(|entry| (entry.navaid.coordinate(), entry.airway().map(str::to_string)))
            .collect()
    };
    assert_eq!(coordinates(&second), coordinates(&first));
}

#[test]
fn writes_cruise_after_departure() {
    let mut fp = FlightplanBuilder::new();
    let nd = navigation_data();

    fp.origin(nd.airport("KJFK").expect("KJFK should exist"), None)
        .entry(FlightplanEntry::new(nd.navaids("ALB")[0].clone()))
        .destination(nd.airport("KBOS").expect("KBOS should exist"), None, None)
        .cruise_level(VerticalDistance::Fl(350));

    let route = write_route(&fp.build(), Some(Speed::kt(420.0)), RouteStringOptions::DEFAULT);
    let words: Vec<&str> = route.split(' ').collect();

    assert_eq!(words[0], "KJFK");
    assert_eq!(words[1], "N0420F350");
}

#[test]
fn resolves_ambiguous_ident_by_distance() {
    let options = RouteStringOptions::DEFAULT | RouteStringOptions::REPORT;

    for _ in 0..3 {
        let from_new_york = read("KJFK ABC KBOS", options);
        let abc = &from_new_york.flightplan.entries()[1].navaid;
        assert_eq!(abc.coordinate(), coord!(41.0, -73.5));
        assert_eq!(
            from_new_york.diagnostics,
            vec![Diagnostic::AmbiguousIdent {
                ident: String::from("ABC"),
                candidates: 2,
                chosen: String::from("4100N07330W"),
            }]
        );

        let from_boston = read("KBOS ABC KJFK", options);
        let abc = &from_boston.flightplan.entries()[1].navaid;
        assert_eq!(abc.coordinate(), coord!(42.5, -71.3));
    }

    // informational messages only in report mode
    let read = read("KJFK ABC KBOS", RouteStringOptions::DEFAULT);
    assert!(read.diagnostics.is_empty());
}

#[test]
fn reads_dotted_procedures() {
    let read = read("KJFK DEEZZ5.CANDR ALB ROBUC1.CAM KBOS", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(
        fp.idents(),
        vec!["KJFK", "RNGRR", "CANDR", "ALB", "CAM", "ROBUC", "BOSOX", "KBOS"]
    );
    assert_eq!(
        fp.entries()[1].procedure.as_ref().map(|tag| tag.kind),
        Some(ProcedureKind::Sid)
    );
    assert_eq!(
        fp.entries()[5].procedure.as_ref().map(|tag| tag.name.as_str()),
        Some("ROBUC1")
    );
    assert!(read.diagnostics.is_empty(), "{:?}", read.diagnostics);

    // procedures are written with their names again
    assert_eq!(
        write_route(fp, None, RouteStringOptions::DEFAULT),
        "KJFK DEEZZ5.CANDR ALB ROBUC1.CAM KBOS"
    );
}

#[test]
fn reads_space_separated_procedures() {
    let options = RouteStringOptions::DEFAULT | RouteStringOptions::SID_STAR_SPACE;
    let dotted = read("KJFK DEEZZ5.CANDR ALB ROBUC1.CAM KBOS", RouteStringOptions::DEFAULT);

    for s in [
        "KJFK DEEZZ5 CANDR ALB CAM ROBUC1 KBOS",
        "KJFK SID DEEZZ5 CANDR ALB ROBUC1 CAM STAR KBOS",
    ] {
        let read = read(s, options);
        assert_eq!(read.flightplan.idents(), dotted.flightplan.idents(), "{s}");
        assert!(read.diagnostics.is_empty(), "{s}: {:?}", read.diagnostics);
    }
}

#[test]
fn reads_transition_before_star() {
    let star_first = read("KJFK DEEZZ5.CANDR ALB ROBUC1.CAM KBOS", RouteStringOptions::DEFAULT);
    let trans_first = read("KJFK DEEZZ5.CANDR ALB CAM.ROBUC1 KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(trans_first.flightplan.idents(), star_first.flightplan.idents());
    assert!(trans_first.diagnostics.is_empty(), "{:?}", trans_first.diagnostics);

    let options = RouteStringOptions::START_AND_DEST
        | RouteStringOptions::SID_STAR
        | RouteStringOptions::STAR_REV_TRANSITION;
    let route = write_route(&trans_first.flightplan, None, options);
    assert_eq!(route, "KJFK DEEZZ5.CANDR ALB CAM.ROBUC1 KBOS");

    let written = read(&route, options);
    assert_eq!(written.flightplan.idents(), star_first.flightplan.idents());
    assert!(written.diagnostics.is_empty(), "{:?}", written.diagnostics);
}

#[test]
fn reports_unknown_procedure() {
    let read = read("KJFK DEEZZ5.XYZ ALB KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.idents(), vec!["KJFK", "ALB", "KBOS"]);
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::UnknownProcedure {
            airport: String::from("KJFK"),
            name: String::from("DEEZZ5.XYZ"),
        }]
    );
}

#[test]
fn reads_runways() {
    let read = read("KJFK04L DCT ALB KBOS99", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "KBOS"]);
    assert_eq!(fp.takeoff_rwy().map(|rwy| rwy.designator.as_str()), Some("04L"));
    assert_eq!(fp.landing_rwy(), None);
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::UnknownRunway {
            airport: String::from("KBOS"),
            runway: String::from("99"),
        }]
    );
}

#[test]
fn reads_alternates() {
    let read = read("KJFK ALB KBOS KPVD KALB", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "KBOS"]);
    let alternates: Vec<_> = fp.alternates().iter().map(|aprt| aprt.ident()).collect();
    assert_eq!(alternates, vec!["KPVD", "KALB"]);

    assert_eq!(
        write_route(fp, None, RouteStringOptions::DEFAULT),
        "KJFK ALB KBOS KPVD KALB"
    );
}

#[test]
fn reports_unknown_alternates() {
    let read = read("KJFK ALB KBOS KPVD XXXX KALB", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.alternates().len(), 1);
    assert_eq!(
        read.diagnostics,
        vec![
            Diagnostic::UnknownAlternate(String::from("XXXX")),
            Diagnostic::UnknownAlternate(String::from("KALB")),
        ]
    );
}

#[test]
fn reads_last_airport_as_destination_without_alternates() {
    let read = read("KJFK ALB KBOS KPVD", RouteStringOptions::START_AND_DEST);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "KBOS", "KPVD"]);
    assert_eq!(fp.destination().map(|aprt| aprt.ident()), Some(String::from("KPVD")));
    assert!(fp.alternates().is_empty());
}

#[test]
fn reads_airports_as_fixes() {
    let options = RouteStringOptions::DEFAULT | RouteStringOptions::READ_NO_AIRPORTS;
    let read = read("KJFK DCT ALB KBOS KPVD", options);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "KBOS", "KPVD"]);
    assert_eq!(fp.origin(), None);
    assert_eq!(fp.destination(), None);
    assert!(fp.alternates().is_empty());
}

#[test]
fn no_airports_changes_nothing_without_airports() {
    for s in [
        "ALB J121 BOS",
        "ABC DCT 4100N07330W CAM",
        "UNKNOWN ALB",
        "ALB KBOS XXXX",
        "ALB KBOS KPVD XXXX",
    ] {
        for options in [
            RouteStringOptions::DEFAULT,
            RouteStringOptions::DEFAULT | RouteStringOptions::REPORT,
            RouteStringOptions::START_AND_DEST,
        ] {
            assert_eq!(
                read(s, options),
                read(s, options | RouteStringOptions::READ_NO_AIRPORTS),
                "{s}"
            );
        }
    }
}

#[test]
fn reads_destination_only_at_the_end() {
    let read = read("ALB KBOS XXXX", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["ALB", "KBOS"]);
    assert_eq!(fp.destination(), None);
    assert!(fp.alternates().is_empty());
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::UnknownIdent(String::from("XXXX"))]
    );
}

#[test]
fn reports_missing_airports() {
    let options = RouteStringOptions::DEFAULT | RouteStringOptions::REPORT;

    assert_eq!(
        read("KJFK DCT ALB", options).diagnostics,
        vec![Diagnostic::NoDestination(String::from("ALB"))]
    );
    assert_eq!(
        read("ALB DCT KBOS", options).diagnostics,
        vec![Diagnostic::NoDeparture(String::from("ALB"))]
    );

    // informational messages only in report mode
    assert!(read("ALB CAM", RouteStringOptions::DEFAULT).diagnostics.is_empty());
}

#[test]
fn reads_coordinates() {
    let read = read("KJFK 4100N07330W 46N078W KBOS", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert!(matches!(fp.entries()[1].navaid, NavAid::Coordinate(_)));
    assert_eq!(fp.entries()[1].navaid.coordinate(), coord!(41.0, -73.5));
    assert_eq!(fp.entries()[2].navaid.coordinate(), coord!(46.0, -78.0));

    assert_eq!(
        write_route(fp, None, RouteStringOptions::DEFAULT),
        "KJFK 4100N07330W 4600N07800W KBOS"
    );
}

#[test]
fn snaps_coordinates_to_waypoints() {
    let options = RouteStringOptions::DEFAULT
        | RouteStringOptions::READ_MATCH_WAYPOINTS
        | RouteStringOptions::REPORT;
    let read = read("KJFK 4100N07330W 46N078W KBOS", options);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ABC", "4600N07800W", "KBOS"]);
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::SnappedCoordinate {
            coordinate: String::from("4100N07330W"),
            ident: String::from("ABC"),
        }]
    );
}

#[test]
fn snap_radius_is_configurable() {
    let nd = navigation_data();
    let options = RouteStringOptions::DEFAULT | RouteStringOptions::READ_MATCH_WAYPOINTS;

    // ABC is about 3 NM away
    let s = "KJFK 4103N07330W KBOS";

    let read = RouteStringReader::new(&nd, options).read(s);
    assert!(matches!(read.flightplan.entries()[1].navaid, NavAid::Coordinate(_)));

    let read = RouteStringReader::new(&nd, options)
        .with_snap_radius(Length::nm(5.0))
        .read(s);
    assert_eq!(read.flightplan.entries()[1].ident(), "ABC");
}

#[test]
fn reads_level_change_at_fix() {
    let read = read("KJFK ALB/N0450F370 KBOS", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.idents(), vec!["KJFK", "ALB", "KBOS"]);
    assert_eq!(fp.entries()[1].level, Some(VerticalDistance::Fl(370)));
    assert!(!read.altitude_included);
}

#[test]
fn reads_cruise_without_leading_zero() {
    let read = read("KJFK N420F350 ALB KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.idents(), vec!["KJFK", "ALB", "KBOS"]);
    assert_eq!(read.speed, Some(Speed::kt(420.0)));
    assert_eq!(read.level, Some(VerticalDistance::Fl(350)));
    assert!(read.altitude_included);
    assert!(read.diagnostics.is_empty(), "{:?}", read.diagnostics);

    // written in the four figure form
    assert_eq!(
        write_route(&read.flightplan, None, RouteStringOptions::DEFAULT),
        "KJFK N0420F350 ALB KBOS"
    );
}

#[test]
fn reads_malformed_instruction_as_ident() {
    let read = read("KJFK N42F350 KBOS", RouteStringOptions::DEFAULT);

    assert_eq!(read.flightplan.idents(), vec!["KJFK", "KBOS"]);
    assert_eq!(read.speed, None);
    assert_eq!(
        read.diagnostics,
        vec![Diagnostic::UnknownIdent(String::from("N42F350"))]
    );
}

#[test]
fn reads_vfr_flight() {
    let read = read("KJFK N0107VFR ALB KALB", RouteStringOptions::DEFAULT);
    let fp = &read.flightplan;

    assert_eq!(fp.rules(), FlightRules::Vfr);
    assert_eq!(read.speed, Some(Speed::kt(107.0)));
    assert!(!read.altitude_included);
    assert_eq!(
        write_route(fp, None, RouteStringOptions::DEFAULT),
        "KJFK N0107VFR ALB KALB"
    );
}

#[test]
fn reads_through_trait_object() {
    let nd = navigation_data();
    let query: &dyn NavigationQuery = &nd;

    let read = read_route("KJFK DCT ALB J121 BOS KBOS", query, RouteStringOptions::DEFAULT);
    assert_eq!(read.flightplan.len(), 5);
}
