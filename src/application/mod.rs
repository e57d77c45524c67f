//! Application layer: services and use cases
//!
//! This layer loads tree definitions and runs domain operations with the active settings.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
