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

//! Extract translatable strings from JavaScript sources.
//!
//! The functions here implement an `xgettext`-like tool for code
//! which marks strings for translation with calls such as
//! `translate( 'Hello' )`. The strings of all call sites are
//! deduplicated and written as a GNU Gettext POT file, ready for
//! `msgmerge` and translation editors, or as a PHP array for the
//! WordPress tooling.
//!
//! The pipeline is:
//!
//! 1. [`extract::extract_matches`] finds the calls in each source,
//! 2. [`Catalog`] merges the matches into unique entries,
//! 3. [`Format::render`] writes the entries, for example with
//!    [`pot::serialize`].
//!
//! [`generate`] runs all of it based on a [`Config`].

pub mod catalog;
pub mod config;
pub mod directives;
pub mod error;
pub mod extract;
pub mod extras;
pub mod format;
pub mod php;
pub mod pot;

pub use catalog::{normalize, Catalog, CatalogEntry, RawMatch};
pub use config::Config;
pub use error::Error;
pub use format::Format;

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// File name used in the locations of strings from inline data.
const UNKNOWN_FILE: &str = "<unknown>";

/// Extract the matches of a single source and label them with
/// `path`.
///
/// The `file_comment`, if any, is appended to the comment of every
/// match.
fn label_matches(
    source: &str,
    path: &str,
    keywords: &[String],
    file_comment: Option<&str>,
) -> error::Result<Vec<RawMatch>> {
    let matches = extract::extract_matches(source, keywords)?
        .into_iter()
        .map(|(lineno, mut raw)| {
            raw.line = Some(format!("{path}:{lineno}"));
            if let Some(file_comment) = file_comment {
                directives::apply_file_comment(&mut raw, file_comment);
            }
            raw
        })
        .collect();
    Ok(matches)
}

/// Extract the matches of a source file, honoring its directives.
fn file_matches(
    source: &str,
    path: &str,
    keywords: &[String],
    config: &Config,
) -> error::Result<Vec<RawMatch>> {
    let file_comment = if config.ignore_file_comments {
        None
    } else {
        directives::find_file_comment(source)?
    };
    label_matches(source, path, keywords, file_comment.as_deref())
}

/// Format `path` for use in a location, relative to `base_dir`.
fn display_path(path: &Path, base_dir: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    relative
        .display()
        .to_string()
        .trim_start_matches(|ch| ch == '/' || ch == '.')
        .to_owned()
}

/// Collect the raw matches of all inputs named in `config`.
///
/// Matches from `data` (or the input files) come first, followed by
/// the matches of the extras. Input files which do not exist are
/// skipped with a warning.
pub fn collect_matches(config: &Config) -> anyhow::Result<Vec<RawMatch>> {
    let keywords = config.keywords();
    let extras = config
        .extras
        .iter()
        .map(|name| extras::find(name))
        .collect::<error::Result<Vec<_>>>()?;

    let mut matches = Vec::new();
    match (&config.data, &config.input_paths) {
        (Some(data), _) => {
            matches.extend(label_matches(data, UNKNOWN_FILE, &keywords, None)?);
        }
        (None, Some(input_paths)) => {
            let base_dir = match &config.base_dir {
                Some(base_dir) => base_dir.clone(),
                None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            };
            for path in input_paths {
                if !path.exists() {
                    log::warn!("Input file {} does not exist, skipping", path.display());
                    continue;
                }
                log::debug!("Reading {}", path.display());
                let source = fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                let location = display_path(path, &base_dir);
                matches.extend(
                    file_matches(&source, &location, &keywords, config)
                        .with_context(|| format!("Extracting strings from {}", path.display()))?,
                );
            }
        }
        (None, None) => return Err(Error::MissingInput.into()),
    }

    for extra in extras {
        matches.extend(
            file_matches(extra.source, extra.path, &keywords, config)
                .with_context(|| format!("Extracting strings from {}", extra.path))?,
        );
    }

    log::debug!("Found {} matches", matches.len());
    Ok(matches)
}

/// Run a complete extraction described by `config`.
///
/// The formatted text is returned and, if `config.output` is set,
/// also written to that file.
pub fn generate(config: &Config) -> anyhow::Result<String> {
    let format = Format::from_config(config)?;
    let entries = normalize(collect_matches(config)?);
    let text = format.render(&entries, config);

    if let Some(output) = &config.output {
        fs::write(output, &text)
            .with_context(|| format!("Could not write {}", output.display()))?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "msgid \"\"\nmsgstr \"\"\n";

    /// A configuration with a fixed header.
    fn test_config() -> Config {
        Config {
            pot_header: Some(String::from(HEADER)),
            ..Default::default()
        }
    }

    fn create_files(files: &[(&str, &str)]) -> anyhow::Result<tempfile::TempDir> {
        let tmpdir = tempfile::tempdir().context("Could not create temporary directory")?;
        for (path, contents) in files {
            let file_path = tmpdir.path().join(path);
            let directory_path = file_path
                .parent()
                .context("File path unexpectedly ended in a root or prefix")?;
            fs::create_dir_all(directory_path)
                .with_context(|| format!("Could not create {}", directory_path.display()))?;
            fs::write(&file_path, contents)
                .with_context(|| format!("Could not write {}", file_path.display()))?;
        }
        Ok(tmpdir)
    }

    fn file_config(tmpdir: &tempfile::TempDir, paths: &[&str]) -> Config {
        Config {
            input_paths: Some(paths.iter().map(|p| tmpdir.path().join(p)).collect()),
            base_dir: Some(tmpdir.path().to_path_buf()),
            ..test_config()
        }
    }

    #[test]
    fn test_display_path() {
        assert_eq!(
            display_path(Path::new("/src/app/a.js"), Path::new("/src")),
            "app/a.js"
        );
        assert_eq!(
            display_path(Path::new("./client/a.js"), Path::new("/elsewhere")),
            "client/a.js"
        );
        assert_eq!(
            display_path(Path::new("../lib/b.js"), Path::new("/elsewhere")),
            "lib/b.js"
        );
    }

    #[test]
    fn test_generate_requires_input() {
        let err = generate(&Config::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::MissingInput));
    }

    #[test]
    fn test_generate_unknown_format() {
        let config = Config {
            data: Some(String::from("translate('Hi')")),
            format: Some(String::from("json")),
            ..Default::default()
        };
        let err = generate(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnknownFormat(String::from("json")))
        );
    }

    #[test]
    fn test_generate_unknown_extra() {
        let config = Config {
            data: Some(String::from("translate('Hi')")),
            extras: vec![String::from("emoji")],
            ..Default::default()
        };
        assert!(generate(&config).is_err());
    }

    #[test]
    fn test_generate_from_data() -> anyhow::Result<()> {
        let config = Config {
            data: Some(String::from(
                "translate( 'Hello' );\n\
                 translate( 'Hello' );\n\
                 translate( '' );\n\
                 translate( '%d cat', '%d cats', { context: 'pets' } );",
            )),
            ..test_config()
        };
        assert_eq!(
            generate(&config)?,
            "# THIS IS A GENERATED FILE. DO NOT EDIT DIRECTLY.\n\
             \n\
             msgid \"\"\n\
             msgstr \"\"\n\
             \n\
             #: <unknown>:1\n\
             #: <unknown>:2\n\
             msgid \"Hello\"\n\
             msgstr \"\"\n\
             \n\
             #: <unknown>:4\n\
             msgctxt \"pets\"\n\
             msgid \"%d cat\"\n\
             msgid_plural \"%d cats\"\n\
             msgstr[0] \"\"\n\
             msgstr[1] \"\"\n"
        );
        Ok(())
    }

    #[test]
    fn test_generate_default_header() -> anyhow::Result<()> {
        let config = Config {
            data: Some(String::from("translate('Hi')")),
            project_name: Some(String::from("calypso")),
            ..Default::default()
        };
        let output = generate(&config)?;
        assert!(output.contains("\"Project-Id-Version: _s calypso\\n\"\n"));
        assert!(output.contains("\"POT-Creation-Date: "));
        Ok(())
    }

    #[test]
    fn test_generate_from_files() -> anyhow::Result<()> {
        let tmpdir = create_files(&[
            ("client/a.js", "translate('Shared');\ntranslate('Only in a');"),
            ("client/b.js", "\n\ntranslate('Shared');"),
        ])?;
        let config = file_config(&tmpdir, &["client/a.js", "client/b.js"]);
        let entries = normalize(collect_matches(&config)?);
        assert_eq!(
            entries
                .iter()
                .map(|entry| (entry.single.as_str(), entry.locations.clone()))
                .collect::<Vec<_>>(),
            vec![
                (
                    "Shared",
                    vec![String::from("client/a.js:1"), String::from("client/b.js:3")]
                ),
                ("Only in a", vec![String::from("client/a.js:2")]),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_generate_skips_missing_files() -> anyhow::Result<()> {
        let tmpdir = create_files(&[("a.js", "translate('Hi');")])?;
        let config = file_config(&tmpdir, &["missing.js", "a.js"]);
        let output = generate(&config)?;
        assert!(output.ends_with("#: a.js:1\nmsgid \"Hi\"\nmsgstr \"\"\n"));
        Ok(())
    }

    #[test]
    fn test_generate_file_comment() -> anyhow::Result<()> {
        let tmpdir = create_files(&[(
            "settings.js",
            "// Screenshot URL: https://example.com/settings.png\n\
             translate('Save', { comment: 'Button' });\n\
             translate('Cancel');",
        )])?;
        let matches = collect_matches(&file_config(&tmpdir, &["settings.js"]))?;
        assert_eq!(
            matches,
            vec![
                RawMatch::new("Save")
                    .with_line("settings.js:2")
                    .with_comment("Button; Screenshot URL: https://example.com/settings.png"),
                RawMatch::new("Cancel")
                    .with_line("settings.js:3")
                    .with_comment("Screenshot URL: https://example.com/settings.png"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_generate_invalid_file_comment() -> anyhow::Result<()> {
        let tmpdir = create_files(&[
            ("a.js", "// Demo URL: somewhere\ntranslate('Hi');"),
            ("b.js", "translate('Bye');"),
        ])?;
        let output_path = tmpdir.path().join("out.pot");
        let config = Config {
            output: Some(output_path.clone()),
            ..file_config(&tmpdir, &["b.js", "a.js"])
        };
        let err = generate(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidFileComment(String::from("somewhere")))
        );
        assert!(!output_path.exists());

        let config = Config {
            ignore_file_comments: true,
            ..config
        };
        generate(&config)?;
        assert!(output_path.exists());
        Ok(())
    }

    #[test]
    fn test_generate_extras_after_files() -> anyhow::Result<()> {
        let config = Config {
            data: Some(String::from("translate('January');")),
            extras: vec![String::from("date")],
            ..test_config()
        };
        let matches = collect_matches(&config)?;
        assert_eq!(matches[0].line.as_deref(), Some("<unknown>:1"));
        assert_eq!(matches[1].line.as_deref(), Some("extras/date.js:6"));

        let entries = normalize(matches);
        assert_eq!(entries[0].single, "January");
        assert_eq!(
            entries[0].locations,
            vec!["<unknown>:1", "extras/date.js:6"]
        );
        Ok(())
    }

    #[test]
    fn test_generate_writes_output() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let output_path = tmpdir.path().join("strings.php");
        let config = Config {
            data: Some(String::from("translate('Hi');")),
            format: Some(String::from("PHP")),
            php_array_name: Some(String::from("strings")),
            output: Some(output_path.clone()),
            ..Default::default()
        };
        let text = generate(&config)?;
        assert_eq!(fs::read_to_string(&output_path)?, text);
        assert!(text.contains("$strings = array(\n\t__( \"Hi\" )\n);"));
        Ok(())
    }

    #[test]
    fn test_generate_custom_keywords() -> anyhow::Result<()> {
        let config = Config {
            data: Some(String::from("__('a'); translate('b');")),
            keywords: Some(vec![String::from("__")]),
            ..test_config()
        };
        let entries = normalize(collect_matches(&config)?);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].single, "a");
        Ok(())
    }
}
