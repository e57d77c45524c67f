//! Composite trees with external visitor operations.
//!
//! A tree is built bottom-up from [`domain::Leaf`] and [`domain::Container`]
//! nodes, then traversed in pre-order by [`domain::Node::display`],
//! [`domain::Node::iter`] or [`domain::Node::accept`] with a
//! [`domain::Visitor`].
//!
//! ```
//! use arbor::domain::{Container, ItemKind, Node, PriceCalculator};
//!
//! let airport: Node = Container::new("Airport")
//!     .with_child(Node::leaf("Boeing", ItemKind::Plane))
//!     .with_child(Node::leaf("Shuttle", ItemKind::Bus))
//!     .into();
//!
//! let mut calculator = PriceCalculator::new();
//! airport.accept(&mut calculator);
//! assert_eq!(calculator.total(), 110);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
