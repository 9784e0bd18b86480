//! Twirp Schema Model
//!
//! Read-only views over the schema files a protobuf compiler hands to the
//! `protoc-gen-twirp_jsbrowser` plugin. The generator in `twirpjs-gen` only
//! needs a small slice of the full descriptor model, so this crate reduces a
//! `FileDescriptorProto` to plain values.
//!
//! ## Core Types
//!
//! - [`SchemaFile`] - A schema file: name, optional package, services
//! - [`Service`] - A service: name, methods, leading doc comment
//! - [`Method`] - A method: name, input type, leading doc comment
//! - [`CommentRegistry`] - Comment lookup over a file's source info
//!
//! ## Examples
//!
//! ```
//! use twirpjs_define::prelude::*;
//!
//! let file = SchemaFile::new("test.proto")
//!     .with_package("us.xeserv.api")
//!     .with_service(
//!         Service::new("HelloWorld")
//!             .with_comment(" Says things.\n")
//!             .with_method(Method::new("Speak", ".us.xeserv.api.Words")),
//!     );
//!
//! assert_eq!(file.services.len(), 1);
//! assert_eq!(file.method_count(), 1);
//! ```

pub mod comments;
pub mod descriptor;
pub mod prelude;
pub mod types;

pub use comments::{CommentError, CommentRegistry, DefinitionComments};
pub use types::{Method, SchemaFile, Service};
