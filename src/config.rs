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

//! Configuration of an extraction run.
//!
//! The configuration can be loaded from a JSON file which uses the
//! same camelCase keys as the JavaScript tooling:
//!
//! ```json
//! {
//!   "keywords": ["translate", "__"],
//!   "inputPaths": ["client/app.js"],
//!   "projectName": "calypso",
//!   "extras": ["date"]
//! }
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Function name used when no keywords are configured.
pub const DEFAULT_KEYWORD: &str = "translate";

/// Comment lines written at the top of a POT file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CopyrightNotice {
    Line(String),
    Lines(Vec<String>),
}

impl CopyrightNotice {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            CopyrightNotice::Line(line) => vec![line.as_str()],
            CopyrightNotice::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// A single empty line counts as no notice at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, CopyrightNotice::Line(line) if line.is_empty())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Names of the translation functions.
    pub keywords: Option<Vec<String>>,
    /// Name of the output formatter, `pot` when unset.
    pub format: Option<String>,
    /// File to write the result to.
    pub output: Option<PathBuf>,
    pub input_paths: Option<Vec<PathBuf>>,
    /// Source text to extract from instead of `input_paths`.
    pub data: Option<String>,
    /// Names of extra string bundles, see [`crate::extras`].
    pub extras: Vec<String>,
    pub project_name: Option<String>,
    pub project_bugs_url: Option<String>,
    pub copyright_notice: Option<CopyrightNotice>,
    pub pot_header: Option<String>,
    pub php_array_name: Option<String>,
    pub textdomain: Option<String>,
    /// Skip the `// Screenshot URL:` directives.
    pub ignore_file_comments: bool,
    /// Directory which locations are made relative to.
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("Could not parse {}", path.display()))
    }

    /// The configured keywords, or `["translate"]`.
    pub fn keywords(&self) -> Vec<String> {
        match &self.keywords {
            Some(keywords) if !keywords.is_empty() => keywords.clone(),
            _ => vec![String::from(DEFAULT_KEYWORD)],
        }
    }

    /// Name of the PHP array holding the strings.
    pub fn php_array_name(&self) -> String {
        match (&self.php_array_name, &self.project_name) {
            (Some(name), _) => name.clone(),
            (None, Some(project)) => format!("{project}_i18n_strings"),
            (None, None) => String::from("i18n_strings"),
        }
    }
}
