//! Text renderings of a tree: indented lines and a box-drawing view.

use termtree::Tree;

use crate::domain::node::Node;

/// Upper bound on marker repetitions in one rendered line.
pub const MAX_INDENT: usize = 1024;

/// Renders one line per node as `marker * indent + ' ' + name`.
///
/// Children are indented by `indent_step` more than their parent. The
/// indent of a line is capped at [`MAX_INDENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    indent_step: usize,
    marker: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2, "-")
    }
}

impl Renderer {
    pub fn new(indent_step: usize, marker: impl Into<String>) -> Self {
        Self {
            indent_step,
            marker: marker.into(),
        }
    }

    pub fn render<K>(&self, node: &Node<K>) -> Vec<String> {
        self.render_from(node, 0)
    }

    /// Render with `node` itself at `indent`.
    pub fn render_from<K>(&self, node: &Node<K>, indent: usize) -> Vec<String> {
        node.iter()
            .map(|(depth, n)| {
                let offset = depth.saturating_mul(self.indent_step).saturating_add(indent);
                self.line(n.name(), offset)
            })
            .collect()
    }

    fn line(&self, name: &str, indent: usize) -> String {
        format!("{} {}", self.marker.repeat(indent.min(MAX_INDENT)), name)
    }
}

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<K> TreeConvert for Node<K> {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.name().to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::Container;

    fn sample() -> Node {
        Container::new("top")
            .with_child(Container::new("mid").with_child(Node::plain("low")))
            .into()
    }

    #[test]
    fn test_default_renderer_uses_two_dashes_per_level() {
        assert_eq!(
            Renderer::default().render(&sample()),
            vec![" top", "-- mid", "---- low"]
        );
    }

    #[test]
    fn test_render_from_offsets_every_line() {
        assert_eq!(
            Renderer::default().render_from(&sample(), 1),
            vec!["- top", "--- mid", "----- low"]
        );
    }

    #[test]
    fn test_custom_marker_and_step() {
        let renderer = Renderer::new(1, "*");
        assert_eq!(renderer.render(&sample()), vec![" top", "* mid", "** low"]);
    }

    #[test]
    fn test_huge_indent_step_is_capped() {
        let renderer = Renderer::new(usize::MAX, "-");
        let lines = renderer.render_from(&sample(), 1);

        assert_eq!(lines[0], "- top");
        assert_eq!(lines[1], format!("{} mid", "-".repeat(MAX_INDENT)));
        assert_eq!(lines[2], lines[1].replace("mid", "low"));
    }

    #[test]
    fn test_tree_string_keeps_structure() {
        let tree = sample().to_tree_string();
        assert_eq!(tree.root, "top");
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].root, "mid");
        assert_eq!(tree.leaves[0].leaves[0].root, "low");
    }
}
