use segroute::{
    prelude::*,
    testing::{RouteTable, assert_matches, assert_no_match},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Index,
    ShowUser,
    NewUser,
    Files,
}

fn router() -> PathRouter<Handler> {
    PathRouter::builder()
        .route("/", Handler::Index)
        .route(r"/users/:id(\d+)", Handler::ShowUser)
        .route("/users/new", Handler::NewUser)
        .route("/static/:path", Handler::Files)
        .build()
        .unwrap()
}

#[test]
fn test_path_router_dispatch() {
    let router = router();

    assert_eq!(router.route("/").unwrap().matched(), Some(&Handler::Index));
    assert_eq!(
        router.route("/users/new").unwrap().matched(),
        Some(&Handler::NewUser)
    );

    match router.route("/users/17").unwrap() {
        RouteResult::Matched {
            value,
            params,
            node,
        } => {
            assert_eq!(*value, Handler::ShowUser);
            assert_eq!(params.get("id"), Some("17"));
            assert_eq!(router.trie().node(node).path(), r"/users/:id(\d+)");
        }
        RouteResult::NotFound => panic!("Should match /users/17"),
    }

    assert_eq!(router.route("/users/abc").unwrap(), RouteResult::NotFound);
}

#[test]
fn test_path_router_rest_capture() {
    let router = router();
    let result = router.route("/static/css/site.css").unwrap();
    assert_eq!(result.params().and_then(|p| p.get("path")), Some("css/site.css"));
    assert_eq!(result.matched(), Some(&Handler::Files));
}

#[test]
fn test_path_router_decode_error() {
    let router = router();
    let err = router.route("/static/%%%").unwrap_err();
    let err: RouterError = err.into();
    assert!(matches!(err, RouterError::Match(_)));
}

#[test]
fn test_route_table_helpers() {
    let table = RouteTable::new(&["/asdf", r"/:id(\w{3,30})", "/:any"]);
    let trie = table.trie();

    assert_matches(trie, "/asdf", table.id("/asdf"), &[]);
    assert_matches(trie, "/qwerty", table.id(r"/:id(\w{3,30})"), &[("id", "qwerty")]);
    assert_matches(trie, "/q", table.id("/:any"), &[("any", "q")]);
    assert_no_match(trie, "/");
}

#[test]
fn test_concurrent_lookups() {
    let router = std::sync::Arc::new(router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = router.clone();
            std::thread::spawn(move || {
                let path = format!("/users/{i}");
                router.route(path.as_str()).unwrap().matched().copied()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Handler::ShowUser));
    }
}
