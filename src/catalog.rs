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

//! Deduplicate raw extraction matches into catalog entries.
//!
//! Every call site found by the extractor produces one [`RawMatch`].
//! Matches which describe the same message (same plural flag, same
//! msgid and same context) collapse into a single [`CatalogEntry`]
//! which collects all the locations and comments of its call sites.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A single translatable call site, as found by the extractor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// The singular string, unescaped.
    pub single: String,
    /// The plural string, if the call site used a plural form.
    pub plural: Option<String>,
    /// The disambiguating context (`msgctxt`).
    pub context: Option<String>,
    /// Location of the call site, formatted as `path:lineno`.
    pub line: Option<String>,
    /// Comment for translators.
    pub comment: Option<String>,
}

impl RawMatch {
    /// Create a match for a singular string without any metadata.
    pub fn new<S: Into<String>>(single: S) -> Self {
        Self {
            single: single.into(),
            ..Default::default()
        }
    }

    pub fn with_plural<S: Into<String>>(mut self, plural: S) -> Self {
        self.plural = Some(plural.into());
        self
    }

    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_line<S: Into<String>>(mut self, line: S) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn key(&self) -> MatchKey {
        MatchKey::new(&self.single, self.plural.as_deref(), self.context.as_deref())
    }
}

/// One unique message of the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub single: String,
    pub plural: Option<String>,
    pub context: Option<String>,
    /// Distinct locations, in the order they were first seen.
    pub locations: Vec<String>,
    /// Distinct comments, in the order they were first seen.
    pub comments: Vec<String>,
}

impl CatalogEntry {
    fn key(&self) -> MatchKey {
        MatchKey::new(&self.single, self.plural.as_deref(), self.context.as_deref())
    }

    /// Merge the location and comment of `raw` into this entry.
    ///
    /// The strings of the entry itself are never changed.
    fn absorb(&mut self, raw: RawMatch) {
        if let Some(line) = raw.line {
            push_unique(&mut self.locations, line);
        }
        if let Some(comment) = raw.comment {
            push_unique(&mut self.comments, comment);
        }
    }
}

impl From<RawMatch> for CatalogEntry {
    fn from(raw: RawMatch) -> Self {
        Self {
            single: raw.single,
            plural: raw.plural.filter(|plural| !plural.is_empty()),
            context: raw.context.filter(|context| !context.is_empty()),
            locations: raw.line.into_iter().collect(),
            comments: raw.comment.into_iter().collect(),
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Identity of a message.
///
/// Plural messages are identified by their plural string, so a
/// singular `"Cat"` and a plural `"Cat"` never collide. An empty
/// plural or context counts as no plural or context at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MatchKey {
    is_plural: bool,
    msgid: String,
    context: String,
}

impl MatchKey {
    fn new(single: &str, plural: Option<&str>, context: Option<&str>) -> Self {
        let plural = plural.filter(|plural| !plural.is_empty());
        Self {
            is_plural: plural.is_some(),
            msgid: String::from(plural.unwrap_or(single)),
            context: String::from(context.unwrap_or_default()),
        }
    }
}

/// An insertion-ordered set of catalog entries.
///
/// The catalog always reserves the key of the header entry (empty
/// msgid, no context) so that empty strings found in the sources are
/// absorbed instead of showing up as a second header.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: HashMap<MatchKey, usize>,
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let header = CatalogEntry::default();
        let mut index = HashMap::new();
        index.insert(header.key(), 0);
        Self {
            index,
            entries: vec![header],
        }
    }

    /// Add a match, either as a new entry or merged into an existing one.
    pub fn add(&mut self, raw: RawMatch) {
        match self.index.entry(raw.key()) {
            Entry::Occupied(slot) => self.entries[*slot.get()].absorb(raw),
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(CatalogEntry::from(raw));
            }
        }
    }

    /// The entries in first-occurrence order, without the header.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries[1..]
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        let mut entries = self.entries;
        entries.remove(0);
        entries
    }
}

impl FromIterator<RawMatch> for Catalog {
    fn from_iter<I: IntoIterator<Item = RawMatch>>(iter: I) -> Self {
        iter.into_iter().fold(Catalog::new(), |mut catalog, raw| {
            catalog.add(raw);
            catalog
        })
    }
}

impl Extend<RawMatch> for Catalog {
    fn extend<I: IntoIterator<Item = RawMatch>>(&mut self, iter: I) {
        for raw in iter {
            self.add(raw);
        }
    }
}

/// Deduplicate `matches` into unique catalog entries.
///
/// # Examples
///
/// ```
/// use pot_xgettext::{normalize, RawMatch};
///
/// let entries = normalize(vec![
///     RawMatch::new("Hello"),
///     RawMatch::new("Hello").with_line("a.js:3"),
///     RawMatch::new("Hello").with_line("a.js:9"),
/// ]);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].locations, vec!["a.js:3", "a.js:9"]);
/// ```
pub fn normalize<I: IntoIterator<Item = RawMatch>>(matches: I) -> Vec<CatalogEntry> {
    matches.into_iter().collect::<Catalog>().into_entries()
}
