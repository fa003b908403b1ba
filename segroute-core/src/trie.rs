//! Segment trie holding every defined route.
//!
//! Each node represents one path segment. Routes sharing a prefix share the
//! nodes of that prefix, so `/users/:id` and `/users/new` hang off the same
//! `users` node.
//!
//! # Example
//!
//! ```rust
//! use segroute_core::Trie;
//!
//! let mut trie = Trie::new();
//! let nodes = trie.define("/users/:id").unwrap();
//! assert_eq!(trie.define("/users/:id").unwrap(), nodes);
//!
//! let m = trie.find("/users/42").unwrap().unwrap();
//! assert_eq!(m.node.id(), nodes[0]);
//! assert_eq!(m.params.get("id"), Some("42"));
//! ```

use crate::{
    error::DefineError,
    node::{Node, NodeId, NodeKind, NodeRef},
    segment::{Segment, parse_path},
};

/// A tree of path segments.
#[derive(Debug)]
pub struct Trie {
    pub(crate) nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the (non-terminal) root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, None, None)],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeRef<'_> {
        self.node(NodeId::ROOT)
    }

    /// View a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this trie.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node {id:?} does not belong to this trie");
        NodeRef { trie: self, id }
    }

    /// View a node by id, `None` if it was not produced by this trie.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { trie: self, id })
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no route has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && !self.nodes[0].terminal
    }

    /// Iterate over every terminal node in creation order.
    pub fn routes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.terminal)
            .map(move |(i, _)| NodeRef { trie: self, id: NodeId(i) })
    }

    /// Define a route and return its terminal node(s).
    ///
    /// Existing nodes are reused wherever an identical literal, parameter or
    /// pattern already sits at the same depth, so defining a route twice
    /// returns the same ids. A route only yields more than one node when it
    /// contains an alternation segment such as `(edit|view)`.
    ///
    /// On error the trie is left untouched.
    pub fn define(&mut self, path: &str) -> Result<Vec<NodeId>, DefineError> {
        let segments = parse_path(path)?;
        self.check_conflicts(&segments)?;

        let mut frontier = vec![NodeId::ROOT];
        for segment in &segments {
            let mut next = Vec::with_capacity(frontier.len());
            for &parent in &frontier {
                for child in self.insert_segment(parent, segment) {
                    if !next.contains(&child) {
                        next.push(child);
                    }
                }
            }
            frontier = next;
        }

        for &id in &frontier {
            self.nodes[id.0].terminal = true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(path, terminals = frontier.len(), "route defined");

        Ok(frontier)
    }

    /// Reject a parameter whose slot is already taken under another name.
    ///
    /// Only existing nodes can conflict, so the walk follows existing
    /// children and stops where the route starts creating new ones.
    fn check_conflicts(&self, segments: &[Segment]) -> Result<(), DefineError> {
        let mut frontier = vec![NodeId::ROOT];
        for segment in segments {
            let mut next = Vec::new();
            for &id in &frontier {
                let node = &self.nodes[id.0];
                match segment {
                    Segment::Literal(s) => next.extend(node.literals.get(s)),
                    Segment::Alternation(alts) => {
                        next.extend(alts.iter().filter_map(|s| node.literals.get(s)))
                    }
                    Segment::Parameter { name } => {
                        if let Some(child) = node.param {
                            self.check_name(child, name)?;
                            next.push(child);
                        }
                    }
                    Segment::Regex { name, source, .. } => {
                        if let Some(child) = self.find_regex_child(id, source) {
                            self.check_name(child, name)?;
                            next.push(child);
                        }
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        Ok(())
    }

    fn check_name(&self, id: NodeId, name: &str) -> Result<(), DefineError> {
        let node = self.node(id);
        match node.name() {
            Some(existing) if existing != name => Err(DefineError::ConflictingParameter {
                existing: node.path(),
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn find_regex_child(&self, parent: NodeId, source: &str) -> Option<NodeId> {
        self.nodes[parent.0].regexes.iter().copied().find(|id| {
            matches!(&self.nodes[id.0].kind, NodeKind::Regex { source: s, .. } if s == source)
        })
    }

    fn insert_segment(&mut self, parent: NodeId, segment: &Segment) -> Vec<NodeId> {
        match segment {
            Segment::Literal(s) => vec![self.literal_child(parent, s)],
            Segment::Alternation(alts) => alts
                .iter()
                .map(|s| self.literal_child(parent, s))
                .collect(),
            Segment::Parameter { name } => {
                if let Some(id) = self.nodes[parent.0].param {
                    return vec![id];
                }
                let id = self.push(parent, NodeKind::Parameter(name.clone()), None);
                self.nodes[parent.0].param = Some(id);
                vec![id]
            }
            Segment::Regex {
                name,
                source,
                regex,
            } => {
                if let Some(id) = self.find_regex_child(parent, source) {
                    return vec![id];
                }
                let kind = NodeKind::Regex {
                    name: name.clone(),
                    source: source.clone(),
                };
                let id = self.push(parent, kind, Some(regex.clone()));
                self.nodes[parent.0].regexes.push(id);
                vec![id]
            }
        }
    }

    fn literal_child(&mut self, parent: NodeId, literal: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].literals.get(literal) {
            return id;
        }
        let id = self.push(parent, NodeKind::Literal(literal.to_string()), None);
        let node = &mut self.nodes[parent.0];
        node.literals.insert(literal.to_string(), id);
        node.literal_order.push(id);
        id
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, regex: Option<regex::Regex>) -> NodeId {
        let id = NodeId(self.nodes.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(?parent, %kind, ?id, "node created");

        self.nodes.push(Node::new(kind, regex, Some(parent)));
        id
    }
}
