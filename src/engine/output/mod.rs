//! Public exports for building LLM-ready requests.

pub mod builder;
pub mod schema;
pub mod templates;

pub use builder::*;
pub use schema::*;
pub use templates::*;
