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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::NavAid;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcedureKind {
    /// Standard instrument departure.
    Sid,
    /// Standard terminal arrival route.
    Star,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sid => write!(f, "SID"),
            Self::Star => write!(f, "STAR"),
        }
    }
}

/// A named path connecting a procedure with the enroute structure.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub(crate) name: String,
    pub(crate) fixes: Vec<NavAid>,
}

impl Transition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixes(&self) -> &[NavAid] {
        &self.fixes
    }
}

/// A departure or arrival procedure of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Procedure {
    pub(crate) airport_ident: String,
    pub(crate) kind: ProcedureKind,
    pub(crate) name: String,
    pub(crate) fixes: Vec<NavAid>,
    pub(crate) transitions: Vec<Transition>,
}

impl Procedure {
    pub fn airport_ident(&self) -> &str {
        &self.airport_ident
    }

    pub fn kind(&self) -> ProcedureKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transition(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|trans| trans.name == name)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the fixes of the procedure joined with the fixes of the
    /// `transition` in flight order.
    ///
    /// A SID is flown before its transition while a STAR is flown after it.
    /// The fix where both join is included once. Returns `None` if the
    /// procedure has no such transition.
    pub fn fixes(&self, transition: Option<&str>) -> Option<Vec<NavAid>> {
        let Some(name) = transition else {
            return Some(self.fixes.clone());
        };

        let trans = self.transition(name)?;

        let (first, second) = match self.kind {
            ProcedureKind::Sid => (&self.fixes, &trans.fixes),
            ProcedureKind::Star => (&trans.fixes, &self.fixes),
        };

        let skip = match (first.last(), second.first()) {
            (Some(a), Some(b)) if a.is_same(b) => 1,
            _ => 0,
        };

        let mut fixes = first.clone();
        fixes.extend(second.iter().skip(skip).cloned());
        Some(fixes)
    }
}
