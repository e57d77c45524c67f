//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe tree definitions that cannot become a tree.
/// Building and traversing trees in code cannot fail.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid tree definition: {0}")]
    InvalidDefinition(String),

    #[error("empty node name at {0}")]
    EmptyName(String),

    #[error("container cannot have a kind: {0}")]
    KindOnContainer(String),
}
