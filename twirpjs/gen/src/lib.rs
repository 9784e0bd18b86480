//! Twirp browser JavaScript client generator.
//!
//! This crate is the core of the `protoc-gen-twirp_jsbrowser` protoc plugin.
//! Given the schema files protoc asks for, it emits one JavaScript file per
//! schema containing:
//!
//! - A `_request` transport function that POSTs JSON over `XMLHttpRequest`
//! - One `var <Service>_<method> = function(server_address, <input>, onSuccess, onError)`
//!   callable per RPC method, in declaration order
//!
//! ## Modules
//!
//! - [`naming`] - Case conversion, reserved-name escaping, output file names
//! - [`codegen`] - Emission of the shim, service sections and doc comments
//! - [`output`] - The `generate` operation: schema files in, output files out
//! - [`plugin`] - The protoc request/response envelope
//! - [`errors`] - Error types for the envelope
//!
//! ## Example Usage
//!
//! ```
//! use twirpjs_define::{Method, SchemaFile, Service};
//! use twirpjs_gen::output::generate;
//!
//! let file = SchemaFile::new("rpc/haberdasher.proto")
//!     .with_package("twirp.example")
//!     .with_service(
//!         Service::new("Haberdasher").with_method(Method::new("MakeHat", ".twirp.example.Size")),
//!     );
//!
//! let out = generate(&[file]);
//! assert_eq!(out[0].name, "rpc/haberdasher_twirp.js");
//! assert!(out[0]
//!     .content
//!     .contains(r#""/twirp/" + "twirp.example.Haberdasher" + "/" + "MakeHat""#));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! // Code generated by protoc-gen-twirp_browserjs v5.0.0, DO NOT EDIT.
//! // source: rpc/haberdasher.proto
//!
//! var _request = function(method, path, body, onSuccess, onError) { ... };
//!
//! // methods for HaberdasherClient
//!
//! var Haberdasher_make_hat = function(server_address, size, onSuccess, onError) {
//!   var full_method = server_address + "/twirp/" + "twirp.example.Haberdasher" + "/" + "MakeHat";
//!   _request("POST", full_method, size, onSuccess, onError);
//! };
//! ```

pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod plugin;
#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;
