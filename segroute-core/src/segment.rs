//! Route definition parsing.
//!
//! A definition such as `/users/:id(\d+)/(edit|view)` is split into
//! [`Segment`]s before anything is inserted into the trie. Splitting is
//! aware of regex syntax, so a `/` inside a pattern (`:rest([\d\/]+)`) does
//! not start a new segment.

use crate::error::DefineError;
use regex::{Regex, RegexBuilder};

/// Characters that turn an unnamed `(...)` group into plain literal text.
const REGEX_META: &[char] = &[
    '(', ')', '[', ']', '{', '}', '*', '+', '?', '\\', '^', '$', '.',
];

/// One parsed component of a route definition.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Matched exactly, case-sensitively.
    Literal(String),
    /// `(a|b)`: one literal branch per alternative.
    Alternation(Vec<String>),
    /// `:name`: any non-empty segment.
    Parameter {
        /// Key the captured value is stored under.
        name: String,
    },
    /// `:name(pattern)`: a segment accepted by `pattern`.
    Regex {
        /// Key the captured value is stored under.
        name: String,
        /// The raw pattern body as written in the definition.
        source: String,
        /// `source` anchored on both ends, compiled case-insensitively.
        regex: Regex,
    },
}

impl Segment {
    /// Parse a single raw segment.
    pub fn parse(raw: &str) -> Result<Self, DefineError> {
        match raw.strip_prefix(':') {
            Some(rest) => parse_parameter(raw, rest),
            None => parse_literal(raw),
        }
    }
}

/// Parse a whole route definition into its segments.
///
/// One leading slash is optional. The empty definition (and `/`) yields no
/// segments and denotes the root route.
pub fn parse_path(path: &str) -> Result<Vec<Segment>, DefineError> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Ok(Vec::new());
    }
    split_definition(path)
        .into_iter()
        .map(Segment::parse)
        .collect()
}

/// Compile a pattern body the way regex segments use it.
pub fn compile_pattern(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{source})$"))
        .case_insensitive(true)
        .build()
}

fn parse_parameter(raw: &str, rest: &str) -> Result<Segment, DefineError> {
    let (name, source) = match rest.find('(') {
        Some(open) if rest.ends_with(')') => (&rest[..open], Some(&rest[open + 1..rest.len() - 1])),
        _ => (rest, None),
    };

    if name.is_empty() {
        return Err(DefineError::EmptyParameterName {
            segment: raw.to_string(),
        });
    }

    match source {
        None => Ok(Segment::Parameter {
            name: name.to_string(),
        }),
        Some(source) => {
            let regex = compile_pattern(source).map_err(|source| DefineError::Regex {
                segment: raw.to_string(),
                source,
            })?;
            Ok(Segment::Regex {
                name: name.to_string(),
                source: source.to_string(),
                regex,
            })
        }
    }
}

fn parse_literal(raw: &str) -> Result<Segment, DefineError> {
    let Some(inner) = raw.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return Ok(Segment::Literal(raw.to_string()));
    };
    if inner.contains(REGEX_META) {
        return Ok(Segment::Literal(raw.to_string()));
    }

    let alternatives: Vec<String> = inner.split('|').map(str::to_string).collect();
    if alternatives.iter().any(String::is_empty) {
        return Err(DefineError::EmptyAlternation {
            segment: raw.to_string(),
        });
    }
    Ok(Segment::Alternation(alternatives))
}

/// Split on `/` outside of groups, classes and escapes.
fn split_definition(path: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_class = false;
    let mut escaped = false;

    for (i, ch) in path.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => depth = depth.saturating_sub(1),
            '/' if depth == 0 && !in_class => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&path[start..]);
    parts
}
