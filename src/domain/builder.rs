//! Tree builder for TOML tree definitions.
//!
//! A definition has a single `[root]` node table. A node table carries a
//! `name` and either `children` (a container, possibly empty) or an optional
//! `kind` (a leaf; missing kinds fall back to the kind's default).
//!
//! ```toml
//! [root]
//! name = "Airport"
//!
//! [[root.children]]
//! name = "Boeing"
//! kind = "plane"
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::node::{Container, Node};

/// Result type for tree definitions.
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinition<K> {
    root: RawNode<K>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNode<K> {
    name: String,
    kind: Option<K>,
    children: Option<Vec<RawNode<K>>>,
}

/// Constructs trees from definition documents.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Parse a TOML definition into a tree.
    #[instrument(level = "debug", skip(content))]
    pub fn from_toml<K>(content: &str) -> DomainResult<Node<K>>
    where
        K: DeserializeOwned + Default,
    {
        let raw: RawDefinition<K> =
            toml::from_str(content).map_err(|e| DomainError::InvalidDefinition(e.to_string()))?;
        let tree = Self::build(raw.root, "root")?;
        debug!("built tree '{}' with {} nodes", tree.name(), tree.node_count());
        Ok(tree)
    }

    fn build<K: Default>(raw: RawNode<K>, at: &str) -> DomainResult<Node<K>> {
        if raw.name.trim().is_empty() {
            return Err(DomainError::EmptyName(at.to_string()));
        }

        match raw.children {
            None => Ok(Node::leaf(raw.name, raw.kind.unwrap_or_default())),
            Some(children) => {
                if raw.kind.is_some() {
                    return Err(DomainError::KindOnContainer(raw.name));
                }
                let mut container = Container::new(raw.name);
                for (i, child) in children.into_iter().enumerate() {
                    container.add(Self::build(child, &format!("{at}.children[{i}]"))?);
                }
                Ok(container.into())
            }
        }
    }
}
