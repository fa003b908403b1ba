//! Path matching against a [`Trie`].
//!
//! The walk is a single descent from the root. At every depth the children
//! are tried in a fixed order:
//!
//! 1. the literal child equal to the segment (case-sensitive),
//! 2. regex children in declaration order (case-insensitive),
//! 3. the unconstrained parameter child.
//!
//! The first child that accepts the segment is committed to; there is no
//! backtracking into a sibling once a deeper segment fails.
//!
//! A parameter or regex node at which some route ends captures the rest of
//! the path: when more than one segment remains and none of its children
//! accepts the next one, it receives all of them joined with `/` (a regex node
//! must accept the joined value, and no joined segment may be empty).

use crate::{
    decode::decode_path,
    error::MatchError,
    node::{NodeId, NodeRef},
    trie::Trie,
};
use std::{borrow::Cow, collections::HashMap};

/// Parameter values captured during a match, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Store a value, replacing any earlier one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into an unordered map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries.into_iter().collect()
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// The node the route ended at.
    pub node: NodeRef<'a>,
    /// Captured parameter values, percent-decoded.
    pub params: Params,
}

enum Step {
    /// The child consumed one segment.
    One(NodeId),
    /// The child consumed every remaining segment.
    Rest(NodeId),
}

impl Trie {
    /// Match `path` against the defined routes.
    ///
    /// Returns `Ok(None)` when no route matches. The only error is a segment
    /// that fails to percent-decode.
    pub fn find(&self, path: &str) -> Result<Option<Match<'_>>, MatchError> {
        let segments = match decode_path(path) {
            Ok(segments) => segments,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path, error = %err, "failed to decode path");
                return Err(err);
            }
        };

        let mut params = Params::new();
        let mut current = NodeId::ROOT;
        let mut i = 0;
        while i < segments.len() {
            match self.step(current, &segments[i..], &mut params) {
                Some(Step::One(child)) => {
                    current = child;
                    i += 1;
                }
                Some(Step::Rest(child)) => {
                    current = child;
                    i = segments.len();
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path, depth = i, "no route matched");
                    return Ok(None);
                }
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(path, node = %self.node(current), "segment matched");
        }

        if !self.nodes[current.0].terminal {
            #[cfg(feature = "tracing")]
            tracing::debug!(path, "walk ended on a non-terminal node");
            return Ok(None);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(path, route = %self.node(current), "route matched");

        Ok(Some(Match {
            node: self.node(current),
            params,
        }))
    }

    /// Choose the child of `parent` accepting `rest[0]`.
    fn step(&self, parent: NodeId, rest: &[Cow<'_, str>], params: &mut Params) -> Option<Step> {
        let node = &self.nodes[parent.0];
        let segment = rest[0].as_ref();

        if let Some(&child) = node.literals.get(segment) {
            return Some(Step::One(child));
        }

        if segment.is_empty() {
            return None;
        }

        for &child in &node.regexes {
            let Some(regex) = self.nodes[child.0].regex.as_ref() else {
                continue;
            };
            let name = self.node(child).name().unwrap_or_default();

            if regex.is_match(segment) && !self.should_capture_rest(child, rest) {
                params.insert(name, segment);
                return Some(Step::One(child));
            }
            if let Some(joined) = self.rest_value(child, rest) {
                if regex.is_match(&joined) {
                    params.insert(name, joined);
                    return Some(Step::Rest(child));
                }
            }
        }

        let child = node.param?;
        let name = self.node(child).name().unwrap_or_default();
        if self.should_capture_rest(child, rest) {
            let joined = self.rest_value(child, rest)?;
            params.insert(name, joined);
            Some(Step::Rest(child))
        } else {
            params.insert(name, segment);
            Some(Step::One(child))
        }
    }

    /// Whether `child`, having accepted `rest[0]`, should take the whole rest.
    ///
    /// A descent into one of its own children is preferred when that child
    /// accepts the next segment.
    fn should_capture_rest(&self, child: NodeId, rest: &[Cow<'_, str>]) -> bool {
        rest.len() > 1
            && self.nodes[child.0].captures_rest()
            && !self.accepts_segment(child, &rest[1])
    }

    /// The remaining segments joined with `/`, if `child` may capture them.
    ///
    /// Like a single parameter, a rest capture never binds an empty segment.
    fn rest_value(&self, child: NodeId, rest: &[Cow<'_, str>]) -> Option<String> {
        if rest.len() < 2 || !self.nodes[child.0].captures_rest() {
            return None;
        }
        if rest.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(rest.join("/"))
    }

    /// Whether some child of `parent` accepts `segment` on its own.
    fn accepts_segment(&self, parent: NodeId, segment: &str) -> bool {
        let node = &self.nodes[parent.0];
        if node.literals.contains_key(segment) {
            return true;
        }
        if segment.is_empty() {
            return false;
        }
        node.param.is_some()
            || node.regexes.iter().any(|&id| {
                self.nodes[id.0]
                    .regex
                    .as_ref()
                    .is_some_and(|r| r.is_match(segment))
            })
    }
}
