//! Tree service
//!
//! Loads tree definition files and runs display, pricing and summary
//! operations with the active settings.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{ItemKind, KindCounter, Node, PriceCalculator, TreeBuilder};
use crate::util::path::expand_path;

/// Summary of a tree's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// All nodes, root included
    pub nodes: usize,
    pub depth: usize,
    pub leaves: usize,
    pub containers: usize,
    /// Leaf count per kind; kinds without leaves are absent
    pub by_kind: BTreeMap<ItemKind, usize>,
}

/// Service for loading trees and applying operations to them.
pub struct TreeService {
    settings: Arc<Settings>,
}

impl TreeService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read and build the tree defined in `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Node> {
        let path = expand_path(path);
        if !path.is_file() {
            return Err(ApplicationError::FileNotFound(path));
        }
        let content =
            std::fs::read_to_string(&path).with_path_context("read tree definition", &path)?;
        let tree = TreeBuilder::from_toml(&content)?;
        debug!("load: {} nodes from {}", tree.node_count(), path.display());
        Ok(tree)
    }

    /// Indented display lines using the configured renderer.
    pub fn render(&self, node: &Node, indent: usize) -> Vec<String> {
        self.settings.display.renderer().render_from(node, indent)
    }

    /// Total price of all nodes using the configured price table.
    #[instrument(level = "debug", skip_all, fields(root = node.name()))]
    pub fn price(&self, node: &Node) -> u64 {
        let mut calculator = PriceCalculator::with_table(self.settings.pricing);
        node.accept(&mut calculator);
        debug!("price: total={}", calculator.total());
        calculator.total()
    }

    pub fn stats(&self, node: &Node) -> TreeStats {
        let mut counter = KindCounter::new();
        node.accept(&mut counter);
        TreeStats {
            nodes: node.node_count(),
            depth: node.depth(),
            leaves: counter.leaves(),
            containers: counter.containers(),
            by_kind: counter.by_kind().clone(),
        }
    }
}
