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

//! File-level directives.
//!
//! A source file can point translators at a page where its strings
//! are visible:
//!
//! ```js
//! // Screenshot URL: https://example.com/settings.png
//! ```
//!
//! The directive is added to the comment of every string in the file.

use crate::catalog::RawMatch;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Find the screenshot or demo URL directive in `source`.
///
/// Returns the directive text, e.g. `Screenshot URL: https://...`.
/// A directive with an URL which is not a valid web URI is an error.
pub fn find_file_comment(source: &str) -> Result<Option<String>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = r"(?xmR)
              ^//\s                       # a line comment
              (?<directive>
                (?:Screenshot|Demo)\ URL:\s
                (?<url>.*)                # the rest of the line
              )$
        ";
        Regex::new(pattern).expect("well-formed regex")
    });

    let Some(captures) = re.captures(source) else {
        return Ok(None);
    };
    let url = &captures["url"];
    if !is_web_uri(url) {
        return Err(Error::InvalidFileComment(String::from(url)));
    }
    Ok(Some(String::from(&captures["directive"])))
}

fn is_web_uri(text: &str) -> bool {
    if text.trim() != text {
        return false;
    }
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Append the file directive to the comment of `raw`.
pub fn apply_file_comment(raw: &mut RawMatch, file_comment: &str) {
    raw.comment = Some(match raw.comment.take() {
        Some(comment) => format!("{comment}; {file_comment}"),
        None => String::from(file_comment),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_directive() {
        assert_eq!(find_file_comment("translate('Hi');"), Ok(None));
    }

    #[test]
    fn test_screenshot_url() {
        assert_eq!(
            find_file_comment("import x;\n// Screenshot URL: https://example.com/a.png\n"),
            Ok(Some(String::from("Screenshot URL: https://example.com/a.png")))
        );
    }

    #[test]
    fn test_demo_url() {
        assert_eq!(
            find_file_comment("// Demo URL: http://example.com/demo"),
            Ok(Some(String::from("Demo URL: http://example.com/demo")))
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            find_file_comment("import x;\r\n// Screenshot URL: https://example.com/a.png\r\nx();\r\n"),
            Ok(Some(String::from("Screenshot URL: https://example.com/a.png")))
        );
        assert_eq!(
            find_file_comment("// Demo URL: https://example.com/demo\r\n"),
            Ok(Some(String::from("Demo URL: https://example.com/demo")))
        );
    }

    #[test]
    fn test_directive_must_start_the_line() {
        assert_eq!(
            find_file_comment("x(); // Screenshot URL: https://example.com"),
            Ok(None)
        );
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(
            find_file_comment("// Screenshot URL: not a url"),
            Err(Error::InvalidFileComment(String::from("not a url")))
        );
        assert!(find_file_comment("// Demo URL: ftp://example.com/file").is_err());
        assert!(find_file_comment("// Demo URL: ").is_err());
    }

    #[test]
    fn test_apply_file_comment() {
        let mut raw = RawMatch::new("Hi");
        apply_file_comment(&mut raw, "Demo URL: https://example.com");
        assert_eq!(raw.comment.as_deref(), Some("Demo URL: https://example.com"));

        let mut raw = RawMatch::new("Hi").with_comment("Greeting");
        apply_file_comment(&mut raw, "Demo URL: https://example.com");
        assert_eq!(
            raw.comment.as_deref(),
            Some("Greeting; Demo URL: https://example.com")
        );
    }
}
