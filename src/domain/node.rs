//! Composite tree: leaves and containers with ordered, exclusively owned children.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::render::Renderer;

/// Concrete kind of a leaf, the tag visitors dispatch on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Ordinary item without a price, e.g. a file
    #[default]
    Plain,
    Plane,
    Bus,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Plain => "plain",
            ItemKind::Plane => "plane",
            ItemKind::Bus => "bus",
        };
        f.write_str(label)
    }
}

/// Terminal node. Never holds children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<K = ItemKind> {
    name: String,
    kind: K,
}

impl<K> Leaf<K> {
    pub fn new(name: impl Into<String>, kind: K) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }
}

/// Node holding an ordered sequence of children.
///
/// Children are owned by value, so a container can never reach itself
/// through its descendants. Order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<K = ItemKind> {
    name: String,
    children: Vec<Node<K>>,
}

impl<K> Container<K> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Append a child after all existing children.
    ///
    /// Duplicate names are accepted as-is.
    pub fn add(&mut self, child: impl Into<Node<K>>) {
        self.children.push(child.into());
    }

    /// By-value form of [`Container::add`] for bottom-up construction.
    pub fn with_child(mut self, child: impl Into<Node<K>>) -> Self {
        self.add(child);
        self
    }

    /// Remove the first direct child named `name`.
    ///
    /// Remaining children keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<Node<K>> {
        let pos = self.children.iter().position(|c| c.name() == name)?;
        Some(self.children.remove(pos))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A node of the composite tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<K = ItemKind> {
    Leaf(Leaf<K>),
    Container(Container<K>),
}

impl<K> From<Leaf<K>> for Node<K> {
    fn from(leaf: Leaf<K>) -> Self {
        Node::Leaf(leaf)
    }
}

impl<K> From<Container<K>> for Node<K> {
    fn from(container: Container<K>) -> Self {
        Node::Container(container)
    }
}

impl<K> Node<K> {
    pub fn leaf(name: impl Into<String>, kind: K) -> Self {
        Node::Leaf(Leaf::new(name, kind))
    }

    /// Empty container node.
    pub fn container(name: impl Into<String>) -> Self {
        Node::Container(Container::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Container(container) => container.name(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf<K>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container<K>> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container<K>> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[Node<K>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(container) => container.children(),
        }
    }

    /// Render this node and its subtree, one line per node.
    ///
    /// Each line is `'-' * indent + ' ' + name`; children are rendered at
    /// `indent + 2`, in pre-order.
    pub fn display(&self, indent: usize) -> Vec<String> {
        Renderer::default().render_from(self, indent)
    }

    /// Number of nodes in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Names of all leaves, in pre-order.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.name())
            .collect()
    }

    /// First node in pre-order with the given name.
    pub fn find(&self, name: &str) -> Option<&Node<K>> {
        self.iter()
            .map(|(_, node)| node)
            .find(|node| node.name() == name)
    }
}

impl<K: Default> Node<K> {
    /// Leaf of the default kind.
    pub fn plain(name: impl Into<String>) -> Self {
        Node::leaf(name, K::default())
    }
}

impl<K> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(0).iter().join("\n"))
    }
}
