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

//! Find calls to translation functions in JavaScript sources.
//!
//! Sources are parsed with tree-sitter (JSX included). Every call
//! expression whose callee is one of the keywords, either directly or
//! as a member such as `i18n.translate`, becomes a match:
//!
//! ```js
//! translate( 'Hello' );
//! i18n.translate( '%d file', '%d files', { count: n, context: 'upload' } );
//! ```
//!
//! Only string literals, concatenations of string literals and object
//! literals are read from the arguments. Anything else has no static
//! value and is ignored.

use crate::catalog::RawMatch;
use crate::error::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// Comments starting with this prefix are passed on to translators.
const TRANSLATORS_PREFIX: &str = "translators:";

/// A call argument, as far as we care about it.
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Str(String),
    Object(Vec<(String, Arg)>),
    Other,
}

impl Arg {
    fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(text) => Some(text),
            _ => None,
        }
    }
}

/// A comment for translators, with the line it ends on.
struct TranslatorComment {
    end_line: usize,
    text: String,
}

fn parse(source: &str) -> Result<Tree> {
    let language: tree_sitter::Language = tree_sitter_javascript::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|err| Error::Parse(format!("Failed to set language: {err}")))?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(String::from("Failed to parse source code")))
}

/// Decode a single escape sequence such as `\n` or `\u{1F600}`.
///
/// Line continuations decode to nothing.
fn unescape(sequence: &str) -> Option<char> {
    let body = sequence.strip_prefix('\\')?;
    let mut chars = body.chars();
    let first = chars.next()?;
    let digits = chars.as_str();
    match first {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        'x' | 'u' => {
            let hex = digits.trim_start_matches('{').trim_end_matches('}');
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }
        // Legacy octal escapes, including `\0`.
        '0'..='7' => u32::from_str_radix(body, 8).ok().and_then(char::from_u32),
        '\r' | '\n' | '\u{2028}' | '\u{2029}' => None,
        _ => Some(first),
    }
}

/// Text of a comment without its delimiters.
fn comment_body(comment: &str) -> &str {
    let body = match comment.strip_prefix("/*") {
        Some(block) => block.strip_suffix("*/").unwrap_or(block),
        None => comment.strip_prefix("//").unwrap_or(comment),
    };
    body.trim()
}

struct Extractor<'a> {
    source: &'a str,
    keywords: &'a [String],
    last_comment: Option<TranslatorComment>,
    matches: Vec<(usize, RawMatch)>,
}

impl<'a> Extractor<'a> {
    fn new(source: &'a str, keywords: &'a [String]) -> Self {
        Self {
            source,
            keywords,
            last_comment: None,
            matches: Vec::new(),
        }
    }

    fn text(&self, node: Node) -> &'a str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Visit all nodes in source order.
    ///
    /// Calls nested in the arguments of another call are visited after
    /// the outer call.
    fn walk(mut self, tree: &Tree) -> Vec<(usize, RawMatch)> {
        let mut cursor = tree.walk();
        loop {
            self.visit(cursor.node());
            if cursor.goto_first_child() {
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return self.matches;
                }
            }
        }
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "comment" => {
                let body = comment_body(self.text(node));
                if let Some(hint) = body.strip_prefix(TRANSLATORS_PREFIX) {
                    self.last_comment = Some(TranslatorComment {
                        end_line: node.end_position().row + 1,
                        text: String::from(hint.trim()),
                    });
                }
            }
            "call_expression" => {
                if let Some(found) = self.call_match(node) {
                    self.matches.push(found);
                }
            }
            _ => {}
        }
    }

    /// The node naming the called function, if it is one of the keywords.
    fn keyword_node<'tree>(&self, call: Node<'tree>) -> Option<Node<'tree>> {
        let function = call.child_by_field_name("function")?;
        let name = match function.kind() {
            "identifier" => function,
            "member_expression" => function.child_by_field_name("property")?,
            _ => return None,
        };
        let text = self.text(name);
        self.keywords
            .iter()
            .any(|keyword| keyword == text)
            .then_some(name)
    }

    fn call_match(&self, call: Node) -> Option<(usize, RawMatch)> {
        let name = self.keyword_node(call)?;
        // Tagged templates have a template string instead of arguments.
        let arguments = call
            .child_by_field_name("arguments")
            .filter(|arguments| arguments.kind() == "arguments")?;
        let mut cursor = arguments.walk();
        let args = arguments
            .named_children(&mut cursor)
            .filter(|arg| arg.kind() != "comment")
            .map(|arg| self.arg(arg))
            .collect::<Vec<_>>();

        let line = name.start_position().row + 1;
        let raw = build_match(&args, self.comment_for(line))?;
        Some((line, raw))
    }

    /// The translators comment which applies to a call on `line`.
    fn comment_for(&self, line: usize) -> Option<String> {
        self.last_comment
            .as_ref()
            .filter(|comment| comment.end_line == line || comment.end_line + 1 == line)
            .map(|comment| comment.text.clone())
    }

    fn arg(&self, node: Node) -> Arg {
        match node.kind() {
            "object" => Arg::Object(self.properties(node)),
            _ => self.string_value(node).map_or(Arg::Other, Arg::Str),
        }
    }

    /// Read the `key: value` pairs of an object literal.
    ///
    /// Shorthand properties, spreads, methods and computed keys are
    /// skipped.
    fn properties(&self, object: Node) -> Vec<(String, Arg)> {
        let mut cursor = object.walk();
        object
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "pair")
            .filter_map(|pair| {
                let key = pair.child_by_field_name("key")?;
                let value = pair.child_by_field_name("value")?;
                let key = match key.kind() {
                    "property_identifier" => String::from(self.text(key)),
                    "string" => self.literal(key)?,
                    _ => return None,
                };
                Some((key, self.arg(value)))
            })
            .collect()
    }

    /// The static value of a string literal or a `+` concatenation of
    /// string literals.
    fn string_value(&self, node: Node) -> Option<String> {
        match node.kind() {
            "string" | "template_string" => self.literal(node),
            "parenthesized_expression" => self.string_value(node.named_child(0)?),
            "binary_expression" => {
                let operator = node.child_by_field_name("operator")?;
                if operator.kind() != "+" {
                    return None;
                }
                let mut value = self.string_value(node.child_by_field_name("left")?)?;
                value.push_str(&self.string_value(node.child_by_field_name("right")?)?);
                Some(value)
            }
            _ => None,
        }
    }

    /// Decode a quoted string or a template literal.
    ///
    /// Template literals with substitutions have no static value.
    fn literal(&self, node: Node) -> Option<String> {
        if node.has_error() {
            return None;
        }
        // Skip the quotes.
        let end = node.end_byte().checked_sub(1)?;
        let mut pos = node.start_byte() + 1;
        let mut value = String::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "escape_sequence" => {
                    value.push_str(self.source.get(pos..child.start_byte())?);
                    value.extend(unescape(self.text(child)));
                    pos = child.end_byte();
                }
                "template_substitution" => return None,
                _ => {}
            }
        }
        value.push_str(self.source.get(pos..end)?);
        Some(value)
    }
}

/// Turn the arguments of a call into a match.
///
/// The supported call shapes are `translate(single)`,
/// `translate(single, plural)`, `translate(single, options)`,
/// `translate(single, plural, options)` and `translate(options)`.
fn build_match(args: &[Arg], translators_comment: Option<String>) -> Option<RawMatch> {
    let mut single = args.first().and_then(Arg::as_str).map(String::from);
    let mut plural = args.get(1).and_then(Arg::as_str).map(String::from);
    let mut context = None;
    let mut comment = None;

    let options = args.iter().take(3).find_map(|arg| match arg {
        Arg::Object(properties) => Some(properties),
        _ => None,
    });
    for (key, value) in options.into_iter().flatten() {
        match (key.as_str(), value) {
            ("context", Arg::Str(text)) => context = Some(text.clone()),
            ("comment", Arg::Str(text)) => comment = Some(text.clone()),
            ("original", Arg::Str(text)) => single = Some(text.clone()),
            ("original", Arg::Object(forms)) => {
                for (form, value) in forms {
                    match (form.as_str(), value) {
                        ("single", Arg::Str(text)) => single = Some(text.clone()),
                        ("plural", Arg::Str(text)) => plural = Some(text.clone()),
                        _ => {}
                    }
                }
            }
            ("plural", Arg::Str(text)) => plural = Some(text.clone()),
            _ => {}
        }
    }

    // Other libraries also have `translate` functions. Calls without a
    // string are not ours.
    let Some(single) = single else {
        log::debug!("Ignoring call without a string literal: {args:?}");
        return None;
    };
    Some(RawMatch {
        single,
        plural,
        context,
        line: None,
        comment: comment.or(translators_comment),
    })
}

/// Extract translatable strings from the JavaScript `source`.
///
/// Each match is labeled with the line number of the function name.
/// The matches have no location; the caller knows which file they
/// come from. Syntax errors do not fail the extraction, calls in the
/// parts which could be parsed are still found.
///
/// # Examples
///
/// ```
/// use pot_xgettext::extract::extract_matches;
/// use pot_xgettext::RawMatch;
///
/// let keywords = vec![String::from("translate")];
/// assert_eq!(
///     extract_matches("const a = 1;\ntranslate( 'Hello' );", &keywords),
///     Ok(vec![(2, RawMatch::new("Hello"))])
/// );
/// ```
pub fn extract_matches(source: &str, keywords: &[String]) -> Result<Vec<(usize, RawMatch)>> {
    let tree = parse(source)?;
    Ok(Extractor::new(source, keywords).walk(&tree))
}
