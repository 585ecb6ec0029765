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

//! Write catalog entries as a PHP array of WordPress gettext calls.
//!
//! The generated file is never executed. It exists so that the
//! WordPress string extraction tools pick up the strings of the
//! JavaScript sources.

use crate::catalog::CatalogEntry;

/// Count passed to `_n` and `_nx`. The real count is only known at
/// runtime in the browser.
const PLURAL_COUNT: &str = "1";

/// Options for the PHP formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpOptions {
    pub array_name: String,
    pub textdomain: Option<String>,
}

/// Turn `text` into a double-quoted PHP string literal.
fn php_quote(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '$' => literal.push_str("\\$"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(ch),
        }
    }
    literal.push('"');
    literal
}

fn format_entry(entry: &CatalogEntry, textdomain: Option<&str>) -> String {
    let plural = entry.plural.as_deref().filter(|plural| !plural.is_empty());
    let context = entry.context.as_deref().filter(|context| !context.is_empty());
    let mut args = vec![php_quote(&entry.single)];
    if let Some(plural) = plural {
        args.push(php_quote(plural));
        args.push(String::from(PLURAL_COUNT));
    }
    if let Some(context) = context {
        args.push(php_quote(context));
    }
    if let Some(textdomain) = textdomain {
        args.push(php_quote(textdomain));
    }

    let function = match (plural.is_some(), context.is_some()) {
        (false, false) => "__",
        (false, true) => "_x",
        (true, false) => "_n",
        (true, true) => "_nx",
    };

    let mut lines = entry
        .comments
        .iter()
        .map(|comment| format!("/* translators: {} */", comment.replace("*/", "*\\/")))
        .collect::<Vec<_>>();
    lines.push(format!("{function}( {} )", args.join(", ")));
    lines
        .iter()
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize `entries` into the text of a PHP file.
pub fn serialize(entries: &[CatalogEntry], options: &PhpOptions) -> String {
    let calls = entries
        .iter()
        .map(|entry| format_entry(entry, options.textdomain.as_deref()))
        .collect::<Vec<_>>();
    let mut lines = vec![
        String::from("<?php"),
        String::from("/* THIS IS A GENERATED FILE. DO NOT EDIT DIRECTLY. */"),
        format!("${} = array(", options.array_name),
    ];
    if !calls.is_empty() {
        lines.push(calls.join(",\n"));
    }
    lines.push(String::from(");"));
    lines.push(String::from("/* THIS IS THE END OF THE GENERATED FILE */"));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{normalize, RawMatch};
    use pretty_assertions::assert_eq;

    fn options() -> PhpOptions {
        PhpOptions {
            array_name: String::from("calypso_i18n_strings"),
            textdomain: None,
        }
    }

    #[test]
    fn test_php_quote() {
        assert_eq!(php_quote("Cost: $5"), "\"Cost: \\$5\"");
        assert_eq!(php_quote("a \"b\"\n"), "\"a \\\"b\\\"\\n\"");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(
            serialize(&[], &options()),
            "<?php\n\
             /* THIS IS A GENERATED FILE. DO NOT EDIT DIRECTLY. */\n\
             $calypso_i18n_strings = array(\n\
             );\n\
             /* THIS IS THE END OF THE GENERATED FILE */\n"
        );
    }

    #[test]
    fn test_serialize_all_functions() {
        let entries = normalize(vec![
            RawMatch::new("Hello").with_comment("Greeting"),
            RawMatch::new("Post").with_context("verb"),
            RawMatch::new("%d cat").with_plural("%d cats"),
            RawMatch::new("%d post")
                .with_plural("%d posts")
                .with_context("noun"),
        ]);
        assert_eq!(
            serialize(&entries, &options()),
            "<?php\n\
             /* THIS IS A GENERATED FILE. DO NOT EDIT DIRECTLY. */\n\
             $calypso_i18n_strings = array(\n\
             \t/* translators: Greeting */\n\
             \t__( \"Hello\" ),\n\
             \t_x( \"Post\", \"verb\" ),\n\
             \t_n( \"%d cat\", \"%d cats\", 1 ),\n\
             \t_nx( \"%d post\", \"%d posts\", 1, \"noun\" )\n\
             );\n\
             /* THIS IS THE END OF THE GENERATED FILE */\n"
        );
    }

    #[test]
    fn test_serialize_empty_context_and_plural() {
        let entries = [CatalogEntry {
            single: String::from("Cat"),
            plural: Some(String::new()),
            context: Some(String::new()),
            ..Default::default()
        }];
        let output = serialize(&entries, &options());
        assert!(output.contains("\t__( \"Cat\" )\n"));
    }

    #[test]
    fn test_serialize_textdomain() {
        let options = PhpOptions {
            textdomain: Some(String::from("jetpack")),
            ..options()
        };
        let output = serialize(&normalize(vec![RawMatch::new("Hi")]), &options);
        assert!(output.contains("\t__( \"Hi\", \"jetpack\" )\n"));
    }

    #[test]
    fn test_serialize_escapes_comment_terminator() {
        let entries = normalize(vec![RawMatch::new("Hi").with_comment("a */ b")]);
        let output = serialize(&entries, &options());
        assert!(output.contains("\t/* translators: a *\\/ b */\n"));
    }
}
