#![allow(dead_code)]

use segroute::{Match, Trie};

// ============================================================================
// Fixtures
// ============================================================================

pub fn trie_with(routes: &[&str]) -> Trie {
    let mut trie = Trie::new();
    for route in routes {
        trie.define(route).unwrap();
    }
    trie
}

// ============================================================================
// Helpers
// ============================================================================

pub fn must_match<'a>(trie: &'a Trie, path: &str) -> Match<'a> {
    trie.find(path)
        .unwrap()
        .unwrap_or_else(|| panic!("expected `{path}` to match"))
}

pub fn matches(trie: &Trie, path: &str) -> bool {
    trie.find(path).unwrap().is_some()
}
