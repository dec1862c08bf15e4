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

//! Spatial indexing for efficient navaid queries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Distance, Geodesic, Point};
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use super::{closest, Fix, NavAid};
use crate::measurements::{Length, LengthUnit};

/// Approximate conversion factor: 1 nautical mile ≈ 1/60 degree.
const NM_TO_DEG: f64 = 1.0 / 60.0;

/// Spatial index for efficient navaid proximity queries using an R-tree.
///
/// Indexes enroute navaids by their coordinates for fast radius-based
/// searches.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavAidIndex {
    tree: RTree<GeomWithData<Point<f64>, NavAid>>,
}

impl NavAidIndex {
    /// Creates an index from an iterator of navaids.
    pub fn new<'a>(navaids: impl Iterator<Item = &'a NavAid>) -> Self {
        let entries = navaids
            .map(|navaid| GeomWithData::new(navaid.coordinate(), navaid.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns navaids within the given radius of a coordinate.
    ///
    /// The radius is converted to an approximate degree-based bounding box
    /// for the R-tree query. Results are then filtered by actual geodesic
    /// distance.
    pub fn within_radius(
        &self,
        coord: &Point<f64>,
        radius: Length,
    ) -> impl Iterator<Item = &NavAid> {
        let radius_nm = *radius.convert_to(LengthUnit::NauticalMiles).value() as f64;
        let radius_deg = radius_nm * NM_TO_DEG;

        // degrees of longitude get smaller towards the poles
        let lat_rad = coord.y().to_radians();
        let lon_expansion = if lat_rad.cos().abs() > 0.01 {
            radius_deg / lat_rad.cos()
        } else {
            radius_deg * 100.0
        };

        let envelope = AABB::from_corners(
            Point::new(coord.x() - lon_expansion, coord.y() - radius_deg),
            Point::new(coord.x() + lon_expansion, coord.y() + radius_deg),
        );

        let center = *coord;
        let radius_m = radius.to_si() as f64;

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(move |entry| Geodesic.distance(center, *entry.geom()) <= radius_m)
            .map(|entry| &entry.data)
    }

    /// Returns the navaid closest to the coordinate within the radius.
    pub fn nearest(&self, coord: &Point<f64>, radius: Length) -> Option<&NavAid> {
        closest(self.within_radius(coord, radius), Some(*coord))
    }
}
