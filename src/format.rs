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

use crate::catalog::CatalogEntry;
use crate::config::Config;
use crate::error::Error;
use crate::php::{self, PhpOptions};
use crate::pot::{self, PotOptions};
use std::str::FromStr;

/// The output formats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A GNU Gettext template.
    #[default]
    Pot,
    /// A PHP array of WordPress gettext calls.
    Php,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "pot" => Ok(Format::Pot),
            "php" => Ok(Format::Php),
            _ => Err(Error::UnknownFormat(String::from(name))),
        }
    }
}

impl Format {
    /// Look up the format named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        config
            .format
            .as_deref()
            .map_or(Ok(Format::default()), str::parse)
    }

    /// Render the normalized `entries` as text.
    pub fn render(self, entries: &[CatalogEntry], config: &Config) -> String {
        match self {
            Format::Pot => pot::serialize(entries, &PotOptions::from_config(config)),
            Format::Php => php::serialize(
                entries,
                &PhpOptions {
                    array_name: config.php_array_name(),
                    textdomain: config.textdomain.clone(),
                },
            ),
        }
    }
}
