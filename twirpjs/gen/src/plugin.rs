//! The protoc plugin envelope.
//!
//! protoc writes a protobuf-encoded `CodeGeneratorRequest` to the plugin's
//! stdin and reads a `CodeGeneratorResponse` from its stdout. This module
//! decodes the request, selects the files to generate, runs
//! [`generate`](crate::output::generate) and encodes the response.

use std::io::{Read, Write};

use prost::Message;
use prost_types::FileDescriptorProto;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::debug;
use twirpjs_define::SchemaFile;

use crate::errors::GeneratorError;
use crate::output::{OutputFile, generate};

/// Reads and decodes a request from `input`.
pub fn read_request(mut input: impl Read) -> Result<CodeGeneratorRequest, GeneratorError> {
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .map_err(|source| GeneratorError::Io {
            context: "reading request",
            source,
        })?;
    Ok(CodeGeneratorRequest::decode(buf.as_slice())?)
}

/// Returns the descriptors named in `file_to_generate`, in that order.
///
/// protoc sends every transitively imported file in `proto_file`, but only
/// the ones listed in `file_to_generate` get output.
///
/// ## Errors
///
/// Returns `GeneratorError::MissingFile` if a listed name has no descriptor.
pub fn files_to_generate(
    request: &CodeGeneratorRequest,
) -> Result<Vec<&FileDescriptorProto>, GeneratorError> {
    request
        .file_to_generate
        .iter()
        .map(|name| {
            request
                .proto_file
                .iter()
                .find(|f| f.name() == name.as_str())
                .ok_or_else(|| GeneratorError::MissingFile(name.clone()))
        })
        .collect()
}

/// Wraps generated files in a response.
///
/// Generated clients never look at message fields, so proto3 `optional`
/// fields are declared as supported.
pub fn build_response(files: Vec<OutputFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        file: files
            .into_iter()
            .map(|f| File {
                name: Some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Encodes `response` and writes it to `output`.
pub fn write_response(
    mut output: impl Write,
    response: &CodeGeneratorResponse,
) -> Result<(), GeneratorError> {
    let mut buf = Vec::with_capacity(response.encoded_len());
    response.encode(&mut buf)?;
    output
        .write_all(&buf)
        .and_then(|_| output.flush())
        .map_err(|source| GeneratorError::Io {
            context: "writing response",
            source,
        })
}

/// Runs generation for an already-decoded request.
pub fn handle_request(
    request: &CodeGeneratorRequest,
) -> Result<CodeGeneratorResponse, GeneratorError> {
    if !request.parameter().is_empty() {
        debug!(parameter = request.parameter(), "ignoring plugin parameter");
    }

    let files: Vec<SchemaFile> = files_to_generate(request)?
        .into_iter()
        .map(SchemaFile::from_descriptor)
        .collect();

    Ok(build_response(generate(&files)))
}

/// Full plugin pass: read a request from `input`, write a response to `output`.
pub fn run(input: impl Read, output: impl Write) -> Result<(), GeneratorError> {
    let request = read_request(input)?;
    debug!(
        files = request.file_to_generate.len(),
        parsed = request.proto_file.len(),
        "decoded request"
    );
    let response = handle_request(&request)?;
    write_response(output, &response)
}
