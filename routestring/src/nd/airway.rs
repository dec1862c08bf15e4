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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Fix, NavAid};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirwayKind {
    /// Low altitude airway.
    Victor,
    /// High altitude airway.
    Jet,
    Both,
}

/// A fragment of an airway.
///
/// An airway can be split into several fragments that share the same name,
/// e.g. if parts of it are not connected.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airway {
    pub(crate) name: String,
    pub(crate) kind: AirwayKind,
    pub(crate) fixes: Vec<NavAid>,
}

impl Airway {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AirwayKind {
        self.kind
    }

    pub fn fixes(&self) -> &[NavAid] {
        &self.fixes
    }

    /// Returns the fixes flown when entering the airway at `from` and leaving
    /// it at the fix with the ident `to`.
    ///
    /// The fixes after `from` up to and including `to` are returned in flight
    /// order. Airways can be flown in both directions.
    pub fn segment(&self, from: &NavAid, to: &str) -> Option<Vec<NavAid>> {
        let start = self.fixes.iter().position(|fix| fix.is_same(from))?;

        if let Some(end) = self.fixes[start + 1..]
            .iter()
            .position(|fix| fix.ident() == to)
        {
            return Some(self.fixes[start + 1..=start + 1 + end].to_vec());
        }

        let end = self.fixes[..start]
            .iter()
            .rposition(|fix| fix.ident() == to)?;

        Some(self.fixes[end..start].iter().rev().cloned().collect())
    }
}
