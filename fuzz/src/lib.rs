use arbitrary::Arbitrary;
use pot_xgettext::RawMatch;

/// Wrapper struct for generating arbitrary `RawMatch`es.
#[derive(Arbitrary, Debug)]
pub struct Match {
    pub single: String,
    pub plural: Option<String>,
    pub context: Option<String>,
    pub line: u16,
    pub comment: Option<String>,
}

impl From<Match> for RawMatch {
    fn from(other: Match) -> RawMatch {
        RawMatch {
            single: other.single,
            plural: other.plural,
            context: other.context,
            line: Some(format!("foo.js:{}", other.line)),
            comment: other.comment,
        }
    }
}

/// Undo `wrap_literal` by joining the quoted pieces again.
pub fn unwrap_literal(wrapped: &str) -> String {
    wrapped
        .lines()
        .map(|line| {
            let line = line.strip_prefix('"').unwrap_or(line);
            line.strip_suffix('"').unwrap_or(line)
        })
        .collect()
}
