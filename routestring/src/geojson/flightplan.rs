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

use geo::BoundingRect;
use geojson::{Feature, GeoJson, Geometry, Value};

use super::rect_to_bbox;
use crate::fp::Flightplan;
use crate::nd::Fix;

impl Flightplan {
    /// Returns the flight plan as GeoJSON feature with a line string through
    /// all entries.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let coords: Vec<geo::Coord<f64>> = self
            .entries()
            .iter()
            .map(|entry| entry.navaid.coordinate().into())
            .collect();

        let line = geo::LineString::from(coords);

        GeoJson::Feature(Feature {
            bbox: line.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(&line))),
            id: None,
            properties: None,
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::fp::{FlightplanBuilder, FlightplanEntry};
    use crate::nd::{Airport, NavAid};

    #[test]
    fn line_string_through_entries() {
        let fp = FlightplanBuilder::new()
            .origin(Rc::new(Airport::new("EDDH", "HAMBURG", coord!(53.5, 10.0))), None)
            .entry(FlightplanEntry::new(NavAid::Coordinate(coord!(54.0, 9.0))))
            .destination(Rc::new(Airport::new("EDHL", "LUEBECK", coord!(53.8, 10.7))), None, None)
            .build();

        let GeoJson::Feature(feature) = fp.to_geojson() else {
            panic!("should be a feature");
        };

        assert_eq!(feature.bbox, Some(vec![9.0, 53.5, 10.7, 54.0]));
        assert!(matches!(
            feature.geometry.map(|geometry| geometry.value),
            Some(Value::LineString(coords)) if coords.len() == 3
        ));
    }
}
