// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Extra strings which are added to a catalog on request.
//!
//! Some strings are only ever built at runtime, for example the month
//! names used when formatting dates. The extras are small JavaScript
//! sources which are extracted like any other input file.

use crate::error::{Error, Result};

/// A bundle of extra strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extra {
    pub name: &'static str,
    /// Path used for the locations of the strings.
    pub path: &'static str,
    pub source: &'static str,
}

const EXTRAS: &[Extra] = &[Extra {
    name: "date",
    path: "extras/date.js",
    source: include_str!("extras/date.js"),
}];

/// Look up the bundle called `name`.
pub fn find(name: &str) -> Result<&'static Extra> {
    EXTRAS
        .iter()
        .find(|extra| extra.name == name)
        .ok_or_else(|| Error::UnknownExtra {
            name: String::from(name),
            available: names().collect::<Vec<_>>().join(", "),
        })
}

/// Names of all bundles.
pub fn names() -> impl Iterator<Item = &'static str> {
    EXTRAS.iter().map(|extra| extra.name)
}
