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

//! `xgettext` for `translate()` calls
//!
//! This program extracts the strings passed to translation functions
//! in JavaScript sources and saves them in a GNU Gettext POT file (or
//! a PHP array of WordPress gettext calls).
//!
//! ```text
//! pot-xgettext -o ./messages.pot -i './client/**/*.js' -e date
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use pot_xgettext::{generate, Config};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Names of the translation functions, separated by commas.
    #[arg(short, long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,
    /// Format of the output: pot or php.
    #[arg(short, long)]
    format: Option<String>,
    /// Write the output to this file instead of stdout.
    #[arg(short, long)]
    output_file: Option<PathBuf>,
    /// Files in which to search for translation calls. Glob patterns
    /// are expanded.
    #[arg(short, long = "input-file")]
    input_files: Vec<String>,
    /// Name of the project.
    #[arg(short, long)]
    project_name: Option<String>,
    /// Extra strings to add to the output, for example `date`.
    #[arg(short, long = "extra")]
    extras: Vec<String>,
    /// Name of the array in the generated PHP file.
    #[arg(short, long)]
    array_name: Option<String>,
    /// JSON file with further configuration. Command line flags take
    /// precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// More input files.
    #[arg(id = "FILE")]
    files: Vec<String>,
}

/// Expand the glob patterns in `patterns`.
///
/// Patterns without any match are kept as they are, so that missing
/// files are reported when reading the inputs.
fn expand_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matches = glob::glob(pattern)
            .with_context(|| format!("Invalid input pattern {pattern:?}"))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Could not expand {pattern:?}"))?;
        if matches.is_empty() {
            paths.push(PathBuf::from(pattern));
        } else {
            paths.extend(matches);
        }
    }
    Ok(paths)
}

/// Build the configuration from the command line and the optional
/// configuration file.
fn create_config(args: Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let patterns = if args.input_files.is_empty() {
        args.files
    } else {
        args.input_files
    };
    if !patterns.is_empty() {
        config.input_paths = Some(expand_inputs(&patterns)?);
    }
    if config.input_paths.is_none() && config.data.is_none() {
        bail!("You must enter the input file. Run `pot-xgettext --help` for examples.");
    }

    if args.keywords.is_some() {
        config.keywords = args.keywords;
    }
    if args.format.is_some() {
        config.format = args.format;
    }
    if args.output_file.is_some() {
        config.output = args.output_file;
    }
    if args.project_name.is_some() {
        config.project_name = args.project_name;
    }
    if args.array_name.is_some() {
        config.php_array_name = args.array_name;
    }
    if !args.extras.is_empty() {
        config.extras = args.extras;
    }
    Ok(config)
}

/// Progress messages are logged at `info` and shown unless `RUST_LOG`
/// says otherwise.
const DEFAULT_LOG_FILTER: &str = "info";

fn input_summary(input_paths: &[PathBuf]) -> String {
    let paths = input_paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>();
    format!("Reading input files:\n\t- {}", paths.join("\n\t- "))
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();

    let config = create_config(Args::parse())?;
    if let Some(input_paths) = &config.input_paths {
        log::info!("{}", input_summary(input_paths));
    }

    let text = generate(&config).context("Extracting strings")?;
    if config.output.is_none() {
        print!("{text}");
    }
    log::info!("Done.");

    Ok(())
}
