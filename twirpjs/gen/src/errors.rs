//! Error types for the plugin.

use thiserror::Error;

/// Errors that can occur while handling a plugin request.
///
/// Generation itself never fails. Every variant here comes from the
/// request/response envelope around it.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The request bytes are not a valid `CodeGeneratorRequest`
    #[error("Failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The response could not be encoded
    #[error("Failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Reading the request or writing the response failed
    #[error("Failed {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A file listed in `file_to_generate` is absent from `proto_file`.
    #[error("Could not find file named '{0}' in the request")]
    MissingFile(String),
}
