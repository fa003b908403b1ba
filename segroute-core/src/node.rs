//! Trie nodes and the borrowed [`NodeRef`] view handed to callers.
//!
//! Nodes are stored in an arena owned by the [`Trie`]. A [`NodeId`] is the
//! stable identity of a node: defining the same route twice yields the same
//! id, and a successful match reports the id of the node the route ended at.

use crate::trie::Trie;
use regex::Regex;
use std::{collections::HashMap, fmt};

/// Stable identity of a node within one [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in its trie's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The empty path.
    Root,
    /// An exact, case-sensitive segment.
    Literal(String),
    /// `:name`, any non-empty segment.
    Parameter(String),
    /// `:name(source)`, a segment accepted by the anchored pattern.
    Regex {
        /// Parameter name.
        name: String,
        /// Raw pattern body.
        source: String,
    },
}

impl NodeKind {
    /// Whether the node captures a value.
    pub fn is_parameter(&self) -> bool {
        matches!(self, NodeKind::Parameter(_) | NodeKind::Regex { .. })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Root => Ok(()),
            NodeKind::Literal(s) => f.write_str(s),
            NodeKind::Parameter(name) => write!(f, ":{name}"),
            NodeKind::Regex { name, source } => write!(f, ":{name}({source})"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) regex: Option<Regex>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) literals: HashMap<String, NodeId>,
    /// Literal children in insertion order.
    pub(crate) literal_order: Vec<NodeId>,
    pub(crate) regexes: Vec<NodeId>,
    pub(crate) param: Option<NodeId>,
    pub(crate) terminal: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, regex: Option<Regex>, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            regex,
            parent,
            literals: HashMap::new(),
            literal_order: Vec::new(),
            regexes: Vec::new(),
            param: None,
            terminal: false,
        }
    }

    /// A parameter at the end of some route may swallow every remaining segment.
    pub(crate) fn captures_rest(&self) -> bool {
        self.terminal && self.kind.is_parameter()
    }
}

/// A borrowed view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) trie: &'a Trie,
    pub(crate) id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.trie.nodes[self.id.0]
    }

    /// The node's identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// What the node matches.
    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    /// Parameter name for parameter and regex nodes.
    pub fn name(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Parameter(name) | NodeKind::Regex { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Segment text for literal nodes.
    pub fn literal(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Compiled, anchored pattern for regex nodes.
    pub fn pattern(&self) -> Option<&'a Regex> {
        self.node().regex.as_ref()
    }

    /// Whether a defined route ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.node().terminal
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| self.trie.node(id))
    }

    /// Number of segments between the root and this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterate over strict ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let trie = self.trie;
        std::iter::successors(self.parent(), move |n| n.node().parent.map(|id| trie.node(id)))
    }

    /// Whether `self` lies on the path from the root to `other` (excluding `other`).
    pub fn is_ancestor_of(&self, other: &NodeRef<'_>) -> bool {
        std::ptr::eq(self.trie, other.trie) && other.ancestors().any(|a| a.id == self.id)
    }

    /// Children in match precedence order: literals, regexes, then the parameter.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let node = self.node();
        let trie = self.trie;
        node.literal_order
            .iter()
            .chain(node.regexes.iter())
            .chain(node.param.iter())
            .map(move |&id| trie.node(id))
    }

    /// The literal child for `segment`, if defined.
    pub fn literal_child(&self, segment: &str) -> Option<NodeRef<'a>> {
        self.node().literals.get(segment).map(|&id| self.trie.node(id))
    }

    /// Regex children in declaration order.
    pub fn regex_children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let trie = self.trie;
        self.node().regexes.iter().map(move |&id| trie.node(id))
    }

    /// The unconstrained parameter child.
    pub fn parameter_child(&self) -> Option<NodeRef<'a>> {
        self.node().param.map(|id| self.trie.node(id))
    }

    /// The route string from the root to this node, e.g. `/users/:id(\d+)`.
    pub fn path(&self) -> String {
        let mut parts: Vec<String> = self
            .ancestors()
            .filter(|n| n.node().parent.is_some())
            .map(|n| n.kind().to_string())
            .collect();
        parts.reverse();
        if self.node().parent.is_some() {
            parts.push(self.kind().to_string());
        }
        format!("/{}", parts.join("/"))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("path", &self.path())
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
