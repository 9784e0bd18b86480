//! Code generation for Twirp browser JavaScript clients.
//!
//! ## Submodules
//!
//! - [`writer`] - Line accumulator owned by one file's generation pass
//! - [`shim`] - The fixed `_request` transport function
//! - [`client`] - Per-service, per-method callable emission and naming
//! - [`comments`] - `/* ... */` doc blocks for services and methods
//!
//! ## Generation Flow
//!
//! 1. The file header and the transport shim are written via [`emit_transport_shim`]
//! 2. Each service in declaration order is written via [`emit_service`]
//! 3. The writer is consumed into the output file content
//!
//! See [`crate::output`] for the per-file assembly.

pub mod client;
pub mod comments;
pub mod shim;
pub mod writer;

pub use client::{emit_service, full_service_name};
pub use comments::emit_comment_block;
pub use shim::{TRANSPORT_SHIM, emit_transport_shim};
pub use writer::CodeWriter;
