//! # segroute - Segment Trie Path Matching
//!
//! `segroute` matches URL-style paths against declared patterns made of
//! literal segments, named parameters and regex-constrained parameters, and
//! returns the single best route together with the captured values.
//!
//! ## Quick Start
//!
//! ```rust
//! use segroute::Trie;
//!
//! let mut trie = Trie::new();
//! let show = trie.define("/users/:id").unwrap()[0];
//! let new = trie.define("/users/new").unwrap()[0];
//!
//! // Literals win over parameters at the same depth.
//! assert_eq!(trie.find("/users/new").unwrap().unwrap().node.id(), new);
//!
//! let m = trie.find("/users/42").unwrap().unwrap();
//! assert_eq!(m.node.id(), show);
//! assert_eq!(m.params.get("id"), Some("42"));
//!
//! // No match is not an error.
//! assert!(trie.find("/posts").unwrap().is_none());
//! ```
//!
//! ## Attaching Values
//!
//! ```rust
//! use segroute::prelude::*;
//!
//! let router = PathRouter::builder()
//!     .route("/page/:rest", "page")
//!     .route(r"/asdf/:rest([\d\/]+)", "numbers")
//!     .build()
//!     .unwrap();
//!
//! let result = router.route("/page/a/b/c").unwrap();
//! assert_eq!(result.params().and_then(|p| p.get("rest")), Some("a/b/c"));
//! assert!(!router.contains("/asdf/a/b").unwrap());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use segroute_core::{
    // Error types
    BoxError,
    DefineError,
    // Match results
    Match,
    MatchError,
    // Trie
    NodeId,
    NodeKind,
    NodeRef,
    Params,
    RouterError,
    // Definition parsing
    Segment,
    Trie,
    compile_pattern,
    // Decoding
    decode_path,
    decode_segment,
    parse_path,
};

// Value routing
pub use segroute_std::routing::{PathRouter, PathRouterBuilder, RouteResult, Router, RouterBuilder};

/// Routing traits and routers.
pub mod routing {
    pub use segroute_std::routing::{
        PathRouter, PathRouterBuilder, RouteResult, Router, RouterBuilder,
    };
}

/// Testing utilities.
pub mod testing {
    pub use segroute_std::testing::{RouteTable, assert_matches, assert_no_match};
}

/// Prelude module - common imports for segroute.
///
/// # Usage
///
/// ```rust,ignore
/// use segroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DefineError, Match, MatchError, NodeId, NodeRef, Params, PathRouter, RouteResult, Router,
        RouterBuilder, RouterError, Trie,
    };
}
