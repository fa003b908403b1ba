//! Testing utilities for segroute.
//!
//! This module provides helpers to make route table tests shorter.
//!
//! # Features
//!
//! - [`RouteTable`]: A trie fixture that remembers the node of every route
//! - [`assert_matches`]: Assert a path resolves to a route with given params
//! - [`assert_no_match`]: Assert a path resolves to nothing

use segroute_core::{NodeId, Trie};
use std::collections::HashMap;

// ============================================================================
// Route Table
// ============================================================================

/// A trie built from a fixed list of routes.
///
/// # Example
///
/// ```rust
/// use segroute_std::testing::RouteTable;
///
/// let table = RouteTable::new(&["/users/:id", "/users/new"]);
/// let m = table.trie().find("/users/new").unwrap().unwrap();
/// assert_eq!(m.node.id(), table.id("/users/new"));
/// ```
#[derive(Debug)]
pub struct RouteTable {
    trie: Trie,
    ids: HashMap<String, Vec<NodeId>>,
}

impl RouteTable {
    /// Define every route, panicking on an invalid definition.
    pub fn new(routes: &[&str]) -> Self {
        let mut trie = Trie::new();
        let mut ids = HashMap::new();
        for &route in routes {
            let nodes = trie
                .define(route)
                .unwrap_or_else(|err| panic!("invalid route `{route}`: {err}"));
            ids.insert(route.to_string(), nodes);
        }
        Self { trie, ids }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The single terminal node of `route`.
    pub fn id(&self, route: &str) -> NodeId {
        match self.ids(route) {
            [id] => *id,
            ids => panic!("route `{route}` has {} terminal nodes", ids.len()),
        }
    }

    /// Every terminal node of `route`.
    pub fn ids(&self, route: &str) -> &[NodeId] {
        self.ids
            .get(route)
            .unwrap_or_else(|| panic!("route `{route}` is not in the table"))
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that `path` matches the node `expected` with exactly `params`.
#[track_caller]
pub fn assert_matches(trie: &Trie, path: &str, expected: NodeId, params: &[(&str, &str)]) {
    let m = match trie.find(path) {
        Ok(Some(m)) => m,
        Ok(None) => panic!("`{path}` did not match, expected {}", trie.node(expected)),
        Err(err) => panic!("`{path}` failed to decode: {err}"),
    };
    assert_eq!(
        m.node.id(),
        expected,
        "`{path}` matched {} instead of {}",
        m.node,
        trie.node(expected)
    );
    let actual: Vec<(&str, &str)> = m.params.iter().collect();
    assert_eq!(actual, params, "unexpected params for `{path}`");
}

/// Assert that `path` decodes but matches no route.
#[track_caller]
pub fn assert_no_match(trie: &Trie, path: &str) {
    match trie.find(path) {
        Ok(None) => {}
        Ok(Some(m)) => panic!("`{path}` unexpectedly matched {}", m.node),
        Err(err) => panic!("`{path}` failed to decode: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_ids() {
        let table = RouteTable::new(&["/a", "/(b|c)"]);
        assert_eq!(table.ids("/(b|c)").len(), 2);
        assert_matches(table.trie(), "/a", table.id("/a"), &[]);
        assert_matches(table.trie(), "/c", table.ids("/(b|c)")[1], &[]);
    }

    #[test]
    fn test_assert_matches_checks_params() {
        let table = RouteTable::new(&["/:id"]);
        assert_matches(table.trie(), "/x", table.id("/:id"), &[("id", "x")]);
    }

    #[test]
    #[should_panic(expected = "did not match")]
    fn test_assert_matches_panics_on_miss() {
        let table = RouteTable::new(&["/a"]);
        assert_matches(table.trie(), "/b", table.id("/a"), &[]);
    }

    #[test]
    fn test_assert_no_match() {
        let table = RouteTable::new(&["/a"]);
        assert_no_match(table.trie(), "/b");
    }

    #[test]
    #[should_panic(expected = "is not in the table")]
    fn test_unknown_route_panics() {
        RouteTable::new(&["/a"]).id("/b");
    }
}
