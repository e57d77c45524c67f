//! Operations defined outside the node types, dispatched per node kind.
//!
//! A [`Visitor`] has one handler per node variant. [`Node::accept`] applies it
//! to every node of a subtree exactly once, in pre-order. Handlers only get
//! shared references, so an operation can change its own state but never the
//! tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::node::{Container, ItemKind, Leaf, Node};

pub trait Visitor<K = ItemKind> {
    fn visit_leaf(&mut self, leaf: &Leaf<K>);

    fn visit_container(&mut self, _container: &Container<K>) {}
}

impl<K> Node<K> {
    /// Apply `visitor` to this node and, for containers, to every descendant.
    pub fn accept<V: Visitor<K> + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Leaf(leaf) => visitor.visit_leaf(leaf),
            Node::Container(container) => container.accept(visitor),
        }
    }
}

impl<K> Container<K> {
    /// Visit the container itself, then forward to each child in order.
    pub fn accept<V: Visitor<K> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_container(self);
        for child in self.children() {
            child.accept(visitor);
        }
    }
}

/// Price per node kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PriceTable {
    pub plain: u64,
    pub plane: u64,
    pub bus: u64,
    pub container: u64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            plain: 0,
            plane: 100,
            bus: 10,
            container: 0,
        }
    }
}

impl PriceTable {
    pub fn price_of(&self, kind: ItemKind) -> u64 {
        match kind {
            ItemKind::Plain => self.plain,
            ItemKind::Plane => self.plane,
            ItemKind::Bus => self.bus,
        }
    }
}

/// Sums a fixed price per visited node.
#[derive(Debug, Default, Clone)]
pub struct PriceCalculator {
    table: PriceTable,
    total: u64,
}

impl PriceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: PriceTable) -> Self {
        Self { table, total: 0 }
    }

    /// Accumulated price. Zero until a traversal has run.
    ///
    /// Saturates at `u64::MAX` instead of wrapping.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}

impl Visitor<ItemKind> for PriceCalculator {
    fn visit_leaf(&mut self, leaf: &Leaf<ItemKind>) {
        self.total = self.total.saturating_add(self.table.price_of(*leaf.kind()));
    }

    fn visit_container(&mut self, _container: &Container<ItemKind>) {
        self.total = self.total.saturating_add(self.table.container);
    }
}

/// Counts leaves per kind, and containers.
#[derive(Debug, Clone)]
pub struct KindCounter<K = ItemKind> {
    leaves: BTreeMap<K, usize>,
    containers: usize,
}

impl<K> Default for KindCounter<K> {
    fn default() -> Self {
        Self {
            leaves: BTreeMap::new(),
            containers: 0,
        }
    }
}

impl<K: Ord> KindCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: &K) -> usize {
        self.leaves.get(kind).copied().unwrap_or(0)
    }

    pub fn leaves(&self) -> usize {
        self.leaves.values().sum()
    }

    pub fn containers(&self) -> usize {
        self.containers
    }

    pub fn by_kind(&self) -> &BTreeMap<K, usize> {
        &self.leaves
    }
}

impl<K: Ord + Clone> Visitor<K> for KindCounter<K> {
    fn visit_leaf(&mut self, leaf: &Leaf<K>) {
        *self.leaves.entry(leaf.kind().clone()).or_insert(0) += 1;
    }

    fn visit_container(&mut self, _container: &Container<K>) {
        self.containers += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport() -> Node {
        Container::new("Airport")
            .with_child(Node::leaf("Boeing", ItemKind::Plane))
            .with_child(Node::leaf("Shuttle", ItemKind::Bus))
            .into()
    }

    #[test]
    fn test_plane_and_bus_total_110() {
        let mut calc = PriceCalculator::new();
        airport().accept(&mut calc);
        assert_eq!(calc.total(), 110);
    }

    #[test]
    fn test_total_is_zero_before_traversal() {
        assert_eq!(PriceCalculator::new().total(), 0);
    }

    #[test]
    fn test_second_traversal_accumulates_until_reset() {
        let tree = airport();
        let mut calc = PriceCalculator::new();
        tree.accept(&mut calc);
        tree.accept(&mut calc);
        assert_eq!(calc.total(), 220);

        calc.reset();
        tree.accept(&mut calc);
        assert_eq!(calc.total(), 110);
    }

    #[test]
    fn test_container_price_applies_per_container() {
        let table = PriceTable {
            container: 1,
            ..PriceTable::default()
        };
        let tree: Node = Container::new("outer")
            .with_child(Container::new("inner").with_child(Node::leaf("p", ItemKind::Plane)))
            .into();

        let mut calc = PriceCalculator::with_table(table);
        tree.accept(&mut calc);
        assert_eq!(calc.total(), 102);
    }

    #[test]
    fn test_container_accept_matches_node_accept() {
        let container = Container::new("Airport")
            .with_child(Node::leaf("a", ItemKind::Plane))
            .with_child(Node::leaf("b", ItemKind::Plane));
        let mut direct = PriceCalculator::new();
        container.accept(&mut direct);

        let node: Node = container.into();
        let mut via_node = PriceCalculator::new();
        node.accept(&mut via_node);

        assert_eq!(direct.total(), 200);
        assert_eq!(direct.total(), via_node.total());
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let table = PriceTable {
            plane: u64::MAX / 2 + 1,
            container: 1,
            ..PriceTable::default()
        };
        let tree: Node = Container::new("hangar")
            .with_child(Node::leaf("a", ItemKind::Plane))
            .with_child(Node::leaf("b", ItemKind::Plane))
            .into();

        let mut calc = PriceCalculator::with_table(table);
        tree.accept(&mut calc);
        assert_eq!(calc.total(), u64::MAX);

        tree.accept(&mut calc);
        assert_eq!(calc.total(), u64::MAX);
    }

    #[test]
    fn test_kind_counter_counts_every_node_once() {
        let mut counter = KindCounter::new();
        airport().accept(&mut counter);
        assert_eq!(counter.count(&ItemKind::Plane), 1);
        assert_eq!(counter.count(&ItemKind::Bus), 1);
        assert_eq!(counter.count(&ItemKind::Plain), 0);
        assert_eq!(counter.leaves(), 2);
        assert_eq!(counter.containers(), 1);
    }

    #[test]
    fn test_visitor_over_custom_kind() {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
        enum Shape {
            Circle,
            Square,
        }

        struct Corners(usize);

        impl Visitor<Shape> for Corners {
            fn visit_leaf(&mut self, leaf: &Leaf<Shape>) {
                self.0 += match leaf.kind() {
                    Shape::Circle => 0,
                    Shape::Square => 4,
                };
            }
        }

        let tree = Container::new("canvas")
            .with_child(Node::leaf("c", Shape::Circle))
            .with_child(Node::leaf("s1", Shape::Square))
            .with_child(Node::leaf("s2", Shape::Square));
        let mut corners = Corners(0);
        tree.accept(&mut corners);
        assert_eq!(corners.0, 8);
    }
}
