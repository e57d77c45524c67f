//! Domain layer: the composite tree and the operations applied to it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod iter;
pub mod node;
pub mod render;
pub mod visitor;

pub use builder::{DomainResult, TreeBuilder};
pub use error::DomainError;
pub use iter::{PostOrder, PreOrder};
pub use node::{Container, ItemKind, Leaf, Node};
pub use render::{Renderer, TreeConvert, MAX_INDENT};
pub use visitor::{KindCounter, PriceCalculator, PriceTable, Visitor};
