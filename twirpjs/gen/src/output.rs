//! Per-file assembly of generated clients.
//!
//! Every schema file maps to exactly one [`OutputFile`]:
//!
//! ```text
//! // Code generated by protoc-gen-twirp_browserjs v5.0.0, DO NOT EDIT.
//! // source: <schema file>
//!
//! <transport shim>
//!
//! <one client section per service>
//! ```
//!
//! Files are self-contained: the shim is repeated in each one rather than
//! shared, so any generated file can be loaded on its own.

use tracing::info;
use twirpjs_define::SchemaFile;

use crate::codegen::{CodeWriter, emit_service, emit_transport_shim};
use crate::naming::output_file_name;

/// Generator name written into the header of every file.
pub const GENERATOR_NAME: &str = "protoc-gen-twirp_browserjs";

/// Version string reported by `--version` and written into headers.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// A generated file, ready to hand back to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

/// Generates one output file per schema file, in input order.
///
/// ## Examples
///
/// ```
/// use twirpjs_define::{Method, SchemaFile, Service};
/// use twirpjs_gen::output::generate;
///
/// let files = vec![SchemaFile::new("rpc/haberdasher.proto")
///     .with_package("twirp.example")
///     .with_service(
///         Service::new("Haberdasher").with_method(Method::new("MakeHat", ".twirp.example.Size")),
///     )];
///
/// let out = generate(&files);
/// assert_eq!(out[0].name, "rpc/haberdasher_twirp.js");
/// assert!(out[0].content.contains(
///     "var Haberdasher_make_hat = function(server_address, size, onSuccess, onError) {"
/// ));
/// ```
pub fn generate(files: &[SchemaFile]) -> Vec<OutputFile> {
    files.iter().map(generate_file).collect()
}

/// Generates the client source for a single schema file.
pub fn generate_file(file: &SchemaFile) -> OutputFile {
    let name = output_file_name(&file.name);
    info!(
        source = %file.name,
        output = %name,
        services = file.services.len(),
        methods = file.method_count(),
        "generating"
    );

    let mut w = CodeWriter::new();
    w.line(format!("// Code generated by {} {}, DO NOT EDIT.", GENERATOR_NAME, VERSION));
    w.line(format!("// source: {}", file.name));
    w.blank();

    emit_transport_shim(&mut w);

    for service in &file.services {
        emit_service(&mut w, file, service);
    }

    OutputFile {
        name,
        content: w.finish(),
    }
}
