//! Routing abstraction layer.
//!
//! This module provides a trait-based routing abstraction over the segment
//! trie, so application code can look up values by path without depending
//! on how the routes are stored.
//!
//! # Choosing a Router
//!
//! | Router | Use Case |
//! |--------|----------|
//! | [`Trie`](segroute_core::Trie) | Only node identities are needed |
//! | [`PathRouter`] | A value (handler, id, ...) per route |

mod path_router;

pub use path_router::{PathRouter, PathRouterBuilder};

use segroute_core::{MatchError, NodeId, Params, RouterError};

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched.
    Matched {
        /// The value stored for the route.
        value: &'a V,
        /// Captured parameter values.
        params: Params,
        /// The terminal node the route ended at.
        node: NodeId,
    },
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched { .. })
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched { value, .. } => Some(value),
            RouteResult::NotFound => None,
        }
    }

    /// Returns the captured parameters, if matched.
    pub fn params(&self) -> Option<&Params> {
        match self {
            RouteResult::Matched { params, .. } => Some(params),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps paths to values.
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by path.
    ///
    /// A path that does not match is `Ok(RouteResult::NotFound)`; only an
    /// undecodable path is an error.
    fn route(&self, key: &K) -> Result<RouteResult<'_, V>, MatchError>;

    /// Check if a path matches a route.
    fn contains(&self, key: &K) -> Result<bool, MatchError> {
        Ok(self.route(key)?.is_matched())
    }
}

/// Builder for constructing routers.
pub trait RouterBuilder<K, V>: Default + Send {
    /// The router type this builder produces.
    type Router: Router<str, V>;

    /// Insert a route and its value.
    fn insert(&mut self, key: K, value: V) -> Result<(), RouterError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterError>;
}
