//! Convenient re-exports for working with schema values.

pub use crate::comments::{CommentError, CommentRegistry, DefinitionComments};
pub use crate::types::{Method, SchemaFile, Service};
