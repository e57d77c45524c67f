//! Borrowing traversal iterators over a subtree.
//!
//! Both use an explicit stack, so deep trees do not grow the call stack.
//! Items are `(depth, node)`, depth 0 being the node the walk started from.

use crate::domain::node::Node;

impl<K> Node<K> {
    /// Pre-order walk: a node, then each child left to right.
    pub fn iter(&self) -> PreOrder<'_, K> {
        PreOrder::new(self)
    }

    /// Post-order walk: all children left to right, then the node.
    pub fn iter_postorder(&self) -> PostOrder<'_, K> {
        PostOrder::new(self)
    }
}

pub struct PreOrder<'a, K> {
    stack: Vec<(usize, &'a Node<K>)>,
}

impl<'a, K> PreOrder<'a, K> {
    fn new(root: &'a Node<K>) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = (usize, &'a Node<K>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

pub struct PostOrder<'a, K> {
    stack: Vec<(usize, &'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    fn new(root: &'a Node<K>) -> Self {
        Self {
            stack: vec![(0, root, false)],
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = (usize, &'a Node<K>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node, expanded)) = self.stack.pop() {
            if expanded {
                return Some((depth, node));
            }
            self.stack.push((depth, node, true));
            for child in node.children().iter().rev() {
                self.stack.push((depth + 1, child, false));
            }
        }
        None
    }
}
