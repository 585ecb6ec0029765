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

//! Write catalog entries as a GNU Gettext POT file.
//!
//! Reference for the format:
//! <https://www.gnu.org/software/gettext/manual/gettext.html#PO-Files>.
//! String literals are wrapped at 79 columns the same way as
//! `xgettext` and `msgmerge` do, so that the generated files diff
//! cleanly against files touched by the standard tools.

use crate::catalog::CatalogEntry;
use crate::config::{Config, CopyrightNotice};
use chrono::{DateTime, SecondsFormat, Utc};

/// Maximum width of a line in the POT file.
pub const MAX_COLUMNS: usize = 79;

/// Characters after which a long literal may be broken.
const SEPARATORS: [char; 4] = [' ', '/', ',', ';'];

const BANNER: &str = "# THIS IS A GENERATED FILE. DO NOT EDIT DIRECTLY.\n";

/// Options controlling the header of the POT file.
#[derive(Debug, Clone, PartialEq)]
pub struct PotOptions {
    /// Comment lines written right after the banner.
    pub copyright_notice: Option<CopyrightNotice>,
    /// Replaces the whole default header block when set.
    pub pot_header: Option<String>,
    pub project_name: Option<String>,
    pub project_bugs_url: Option<String>,
    pub creation_date: DateTime<Utc>,
}

impl PotOptions {
    /// Options with an empty header, created now.
    pub fn new() -> Self {
        Self {
            copyright_notice: None,
            pot_header: None,
            project_name: None,
            project_bugs_url: None,
            creation_date: Utc::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            copyright_notice: config.copyright_notice.clone(),
            pot_header: config.pot_header.clone(),
            project_name: config.project_name.clone(),
            project_bugs_url: config.project_bugs_url.clone(),
            ..Self::new()
        }
    }

    fn default_header(&self) -> String {
        [
            String::from("msgid \"\""),
            String::from("msgstr \"\""),
            format!(
                "\"Project-Id-Version: _s {}\\n\"",
                self.project_name.as_deref().unwrap_or_default()
            ),
            format!(
                "\"Report-Msgid-Bugs-To: {}\\n\"",
                self.project_bugs_url.as_deref().unwrap_or_default()
            ),
            format!(
                "\"POT-Creation-Date: {}\\n\"",
                self.creation_date
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            String::from("\"MIME-Version: 1.0\\n\""),
            String::from("\"Content-Type: text/plain; charset=UTF-8\\n\""),
            String::from("\"Content-Transfer-Encoding: 8bit\\n\""),
            String::from("\"PO-Revision-Date: 2014-MO-DA HO:MI+ZONE\\n\""),
            String::from("\"Last-Translator: FULL NAME <EMAIL@ADDRESS>\\n\""),
            String::from("\"Language-Team: LANGUAGE <LL@li.org>\\n\""),
            String::new(),
        ]
        .join("\n")
    }
}

impl Default for PotOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn `text` into a quoted gettext string literal.
///
/// # Examples
///
/// ```
/// use pot_xgettext::pot::quote;
///
/// assert_eq!(quote("Say \"hi\"\n"), r#""Say \"hi\"\n""#);
/// ```
pub fn quote(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(ch),
        }
    }
    literal.push('"');
    literal
}

/// Split a quoted string literal into lines of at most
/// [`MAX_COLUMNS`] characters.
///
/// The literal is assumed to start at `column`, typically right after
/// a keyword such as `msgid `. A literal which does not fit there is
/// moved to its own line after an empty `""` line. Lines are broken
/// after a space, `/`, `,` or `;`. A word which is too long for a
/// single line is kept whole and the line overflows.
///
/// # Examples
///
/// ```
/// use pot_xgettext::pot::wrap_literal;
///
/// assert_eq!(wrap_literal("\"Short\"", "msgid ".len()), "\"Short\"");
///
/// let literal = "\"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
///                sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.\"";
/// assert_eq!(
///     wrap_literal(literal, "msgid ".len()),
///     "\"\"\n\
///      \"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \"\n\
///      \"tempor incididunt ut labore et dolore magna aliqua.\""
/// );
/// ```
pub fn wrap_literal(literal: &str, column: usize) -> String {
    let mut line = literal.chars().collect::<Vec<_>>();
    let mut wrapped = String::with_capacity(literal.len() + 8);

    if column > 0 {
        if column + line.len() <= MAX_COLUMNS {
            return String::from(literal);
        }
        wrapped.push_str("\"\"\n");
    }

    while line.len() > MAX_COLUMNS {
        let Some(split) = find_break(&line) else {
            break;
        };
        wrapped.extend(&line[..=split]);
        wrapped.push_str("\"\n");
        line[split] = '"';
        line.drain(..split);
    }
    wrapped.extend(&line);
    wrapped
}

/// Find the index of the separator after which `line` should be
/// broken.
///
/// The last column is reserved for the closing quote which is added
/// when breaking. We prefer the right-most separator which still fits
/// and otherwise fall back to the first separator after that.
fn find_break(line: &[char]) -> Option<usize> {
    let is_separator = |idx: &usize| SEPARATORS.contains(&line[*idx]);
    let last_fitting = MAX_COLUMNS - 2;
    (1..=last_fitting)
        .rev()
        .find(is_separator)
        .or_else(|| (last_fitting + 1..line.len() - 1).find(is_separator))
}

/// Format a single catalog entry, including the trailing newline.
fn format_entry(entry: &CatalogEntry) -> String {
    let mut block = String::new();
    for location in &entry.locations {
        block.push_str(&format!("#: {location}\n"));
    }
    for comment in &entry.comments {
        block.push_str(&format!("#. {comment}\n"));
    }
    if let Some(context) = non_empty(&entry.context) {
        push_field(&mut block, "msgctxt ", context);
    }
    push_field(&mut block, "msgid ", &entry.single);
    match non_empty(&entry.plural) {
        Some(plural) => {
            push_field(&mut block, "msgid_plural ", plural);
            block.push_str("msgstr[0] \"\"\n");
            block.push_str("msgstr[1] \"\"\n");
        }
        None => block.push_str("msgstr \"\"\n"),
    }
    block
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn push_field(block: &mut String, keyword: &str, text: &str) {
    block.push_str(keyword);
    block.push_str(&wrap_literal(&quote(text), keyword.len()));
    block.push('\n');
}

/// Serialize `entries` into the text of a POT file.
pub fn serialize(entries: &[CatalogEntry], options: &PotOptions) -> String {
    let mut output = String::from(BANNER);

    match &options.copyright_notice {
        Some(notice) if !notice.is_empty() => {
            output.push_str("# ");
            output.push_str(&notice.lines().join("\n#"));
            output.push('\n');
        }
        _ => {}
    }
    output.push('\n');

    match &options.pot_header {
        Some(header) if !header.is_empty() => output.push_str(header),
        _ => output.push_str(&options.default_header()),
    }
    output.push('\n');

    output.push_str(
        &entries
            .iter()
            .map(format_entry)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    output
}
