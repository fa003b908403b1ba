//! Value-carrying router backed by the segment trie.

use super::{RouteResult, Router, RouterBuilder};
use segroute_core::{MatchError, NodeId, RouterError, Trie};
use std::collections::HashMap;

/// A router that stores one value per defined route.
///
/// # Example
///
/// ```rust
/// use segroute_std::routing::{PathRouter, Router};
///
/// let mut router = PathRouter::new();
/// router.insert("/users/:id", "show_user").unwrap();
/// router.insert("/users/new", "new_user").unwrap();
///
/// let result = router.route("/users/42").unwrap();
/// assert_eq!(result.params().and_then(|p| p.get("id")), Some("42"));
/// assert_eq!(result.matched(), Some(&"show_user"));
/// ```
#[derive(Debug)]
pub struct PathRouter<V> {
    trie: Trie,
    values: HashMap<NodeId, V>,
}

impl<V> Default for PathRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PathRouter<V> {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            values: HashMap::new(),
        }
    }

    /// Start a builder.
    pub fn builder() -> PathRouterBuilder<V> {
        PathRouterBuilder::default()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the number of routes holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value bound to a node.
    pub fn get(&self, node: NodeId) -> Option<&V> {
        self.values.get(&node)
    }

    /// Define `path` and bind `value` to each of its terminal nodes.
    ///
    /// Returns [`RouterError::AlreadyExists`] if any terminal node already
    /// holds a value; in that case no value is replaced.
    pub fn insert(&mut self, path: &str, value: V) -> Result<Vec<NodeId>, RouterError>
    where
        V: Clone,
    {
        let nodes = self.trie.define(path)?;
        if let Some(&taken) = nodes.iter().find(|&&id| self.values.contains_key(&id)) {
            return Err(RouterError::AlreadyExists(self.trie.node(taken).path()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(path, nodes = nodes.len(), "route bound");

        for &id in &nodes {
            self.values.insert(id, value.clone());
        }
        Ok(nodes)
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for PathRouter<V> {
    fn route(&self, key: &str) -> Result<RouteResult<'_, V>, MatchError> {
        let Some(m) = self.trie.find(key)? else {
            return Ok(RouteResult::NotFound);
        };
        let node = m.node.id();
        Ok(match self.values.get(&node) {
            Some(value) => RouteResult::Matched {
                value,
                params: m.params,
                node,
            },
            None => RouteResult::NotFound,
        })
    }
}

impl<V: Send + Sync + 'static> Router<String, V> for PathRouter<V> {
    fn route(&self, key: &String) -> Result<RouteResult<'_, V>, MatchError> {
        <Self as Router<str, V>>::route(self, key)
    }
}

/// Builder for [`PathRouter`].
///
/// [`route`](Self::route) chains and defers errors to [`build`](Self::build);
/// the first error wins.
#[derive(Debug)]
pub struct PathRouterBuilder<V> {
    router: PathRouter<V>,
    error: Option<RouterError>,
}

impl<V> Default for PathRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: PathRouter::new(),
            error: None,
        }
    }
}

impl<V> PathRouterBuilder<V> {
    /// Build the router, or return the first error seen while adding routes.
    pub fn build(self) -> Result<PathRouter<V>, RouterError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.router),
        }
    }
}

impl<V: Clone> PathRouterBuilder<V> {
    /// Add a route.
    pub fn route(mut self, path: &str, value: V) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.router.insert(path, value) {
                self.error = Some(err);
            }
        }
        self
    }
}

impl<K, V> RouterBuilder<K, V> for PathRouterBuilder<V>
where
    K: AsRef<str>,
    V: Clone + Send + Sync + 'static,
{
    type Router = PathRouter<V>;

    fn insert(&mut self, key: K, value: V) -> Result<(), RouterError> {
        self.router.insert(key.as_ref(), value).map(|_| ())
    }

    fn build(self) -> Result<Self::Router, RouterError> {
        PathRouterBuilder::build(self)
    }
}
