mod common;

use common::must_match;
use segroute::{DefineError, NodeKind, Trie};

#[test]
fn test_redefinition_returns_same_node() {
    let mut trie = Trie::new();
    for route in ["", "/a", "/:id", r"/:id(\d+)", "/a/:b/c"] {
        let first = trie.define(route).unwrap();
        let second = trie.define(route).unwrap();
        assert_eq!(first, second, "route `{route}`");
        assert_eq!(first.len(), 1);
    }
}

#[test]
fn test_leading_slash_is_optional() {
    let mut trie = Trie::new();
    assert_eq!(trie.define("a/b").unwrap(), trie.define("/a/b").unwrap());
}

#[test]
fn test_path_rendering() {
    let mut trie = Trie::new();
    let routes = [
        "/favicon",
        "/users/:id",
        r"/users/:id/posts/:post(\d+)",
        r"/asdf/:rest([\d\/]+)",
    ];
    for route in routes {
        let id = trie.define(route).unwrap()[0];
        assert_eq!(trie.node(id).path(), route);
    }
    assert_eq!(trie.root().path(), "/");
}

#[test]
fn test_every_terminal_reproduces_a_route() {
    let mut trie = Trie::new();
    trie.define("/a/:b").unwrap();
    trie.define("/a").unwrap();
    trie.define(r"/c/:d(x|y)/e").unwrap();

    let mut routes: Vec<String> = trie.routes().map(|n| n.path()).collect();
    routes.sort();
    assert_eq!(routes, vec!["/a", "/a/:b", r"/c/:d(x|y)/e"]);
}

#[test]
fn test_named_group_is_a_regex_not_an_alternation() {
    let mut trie = Trie::new();
    let id = trie.define("/:kind(post|page)").unwrap()[0];
    assert!(matches!(trie.node(id).kind(), NodeKind::Regex { .. }));

    let m = must_match(&trie, "/PAGE");
    assert_eq!(m.params.get("kind"), Some("PAGE"));
}

#[test]
fn test_alternation_matches_each_branch() {
    let mut trie = Trie::new();
    let nodes = trie.define("/blog/(posts|drafts)/:slug").unwrap();
    assert_eq!(nodes.len(), 2);

    let posts = must_match(&trie, "/blog/posts/hello");
    let drafts = must_match(&trie, "/blog/drafts/hello");
    assert_eq!(posts.node.id(), nodes[0]);
    assert_eq!(drafts.node.id(), nodes[1]);
    assert_eq!(posts.params.get("slug"), Some("hello"));
    assert!(trie.find("/blog/Posts/hello").unwrap().is_none());
}

#[test]
fn test_invalid_regex_is_reported() {
    let mut trie = Trie::new();
    trie.define("/ok").unwrap();

    let len = trie.len();
    let err = trie.define("/bad/:id([z-a])").unwrap_err();
    assert!(matches!(err, DefineError::Regex { ref segment, .. } if segment == ":id([z-a])"));
    assert!(trie.find("/bad/x").unwrap().is_none());
    assert_eq!(trie.len(), len);
}

#[test]
fn test_conflicting_parameter_names() {
    let mut trie = Trie::new();
    trie.define("/users/:id").unwrap();
    let err = trie.define("/users/:user_id/posts").unwrap_err();
    match err {
        DefineError::ConflictingParameter { existing, name } => {
            assert_eq!(existing, "/users/:id");
            assert_eq!(name, "user_id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(trie.find("/users/1/posts").unwrap().is_none());
}
