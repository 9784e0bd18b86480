//! Comment lookup over a file's `SourceCodeInfo`.
//!
//! protoc addresses declarations by field-number paths. Within a
//! `FileDescriptorProto`, `service` is field 6 and within a
//! `ServiceDescriptorProto`, `method` is field 2, so:
//!
//! ```text
//! service i           -> [6, i]
//! method j of service -> [6, i, 2, j]
//! ```

use prost_types::FileDescriptorProto;
use prost_types::source_code_info::Location;
use thiserror::Error;

const FILE_SERVICE_FIELD: i32 = 6;
const SERVICE_METHOD_FIELD: i32 = 2;

/// Comments attached to a single schema definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionComments {
    pub leading: String,
    pub trailing: String,
    pub leading_detached: Vec<String>,
}

/// Errors from comment lookup.
///
/// Neither is fatal to generation. Callers treat them as "no comment".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentError {
    /// The file was compiled without source info.
    #[error("file '{file}' has no source code info")]
    NoSourceInfo { file: String },

    /// No location entry exists for the definition's path.
    #[error("no comments for path {path:?} in file '{file}'")]
    NotFound { file: String, path: Vec<i32> },
}

/// Looks up comments for services and methods of one file.
///
/// ## Examples
///
/// ```
/// use prost_types::FileDescriptorProto;
/// use twirpjs_define::{CommentError, CommentRegistry};
///
/// let file = FileDescriptorProto {
///     name: Some("empty.proto".to_string()),
///     ..Default::default()
/// };
/// let registry = CommentRegistry::new(&file);
///
/// assert!(matches!(
///     registry.service_comments(0),
///     Err(CommentError::NoSourceInfo { .. })
/// ));
/// ```
pub struct CommentRegistry<'a> {
    file: &'a FileDescriptorProto,
}

impl<'a> CommentRegistry<'a> {
    pub fn new(file: &'a FileDescriptorProto) -> Self {
        Self { file }
    }

    /// Comments for the service at `service_index`.
    pub fn service_comments(
        &self,
        service_index: usize,
    ) -> Result<DefinitionComments, CommentError> {
        self.lookup(&[FILE_SERVICE_FIELD, index(service_index)])
    }

    /// Comments for method `method_index` of service `service_index`.
    pub fn method_comments(
        &self,
        service_index: usize,
        method_index: usize,
    ) -> Result<DefinitionComments, CommentError> {
        self.lookup(&[
            FILE_SERVICE_FIELD,
            index(service_index),
            SERVICE_METHOD_FIELD,
            index(method_index),
        ])
    }

    fn lookup(&self, path: &[i32]) -> Result<DefinitionComments, CommentError> {
        let info = self
            .file
            .source_code_info
            .as_ref()
            .ok_or_else(|| CommentError::NoSourceInfo {
                file: self.file.name().to_string(),
            })?;

        info.location
            .iter()
            .find(|loc| loc.path == path)
            .map(to_comments)
            .ok_or_else(|| CommentError::NotFound {
                file: self.file.name().to_string(),
                path: path.to_vec(),
            })
    }
}

fn to_comments(loc: &Location) -> DefinitionComments {
    DefinitionComments {
        leading: loc.leading_comments().to_string(),
        trailing: loc.trailing_comments().to_string(),
        leading_detached: loc.leading_detached_comments.clone(),
    }
}

// Descriptor indices are i32 on the wire; a file cannot declare more.
fn index(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::SourceCodeInfo;

    fn location(path: Vec<i32>, leading: &str) -> Location {
        Location {
            path,
            span: vec![0, 0, 0],
            leading_comments: Some(leading.to_string()),
            trailing_comments: Some(" trailing\n".to_string()),
            leading_detached_comments: vec![" detached\n".to_string()],
        }
    }

    fn file_with(locations: Vec<Location>) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("svc.proto".to_string()),
            source_code_info: Some(SourceCodeInfo {
                location: locations,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn finds_service_comments() {
        let file = file_with(vec![
            location(vec![6, 0], " First service\n"),
            location(vec![6, 1], " Second service\n"),
        ]);
        let registry = CommentRegistry::new(&file);

        let comments = registry.service_comments(1).unwrap();
        assert_eq!(comments.leading, " Second service\n");
        assert_eq!(comments.trailing, " trailing\n");
        assert_eq!(comments.leading_detached, vec![" detached\n".to_string()]);
    }

    #[test]
    fn finds_method_comments() {
        let file = file_with(vec![
            location(vec![6, 0], " Service\n"),
            location(vec![6, 0, 2, 0], " Method zero\n"),
            location(vec![6, 0, 2, 1], " Method one\n"),
        ]);
        let registry = CommentRegistry::new(&file);

        assert_eq!(registry.method_comments(0, 1).unwrap().leading, " Method one\n");
    }

    #[test]
    fn method_path_does_not_match_service_path() {
        let file = file_with(vec![location(vec![6, 0, 2, 0], " Method\n")]);
        let registry = CommentRegistry::new(&file);

        assert_eq!(
            registry.service_comments(0),
            Err(CommentError::NotFound {
                file: "svc.proto".to_string(),
                path: vec![6, 0],
            })
        );
    }

    #[test]
    fn missing_source_info() {
        let file = FileDescriptorProto {
            name: Some("bare.proto".to_string()),
            ..Default::default()
        };
        let registry = CommentRegistry::new(&file);

        assert_eq!(
            registry.method_comments(0, 0),
            Err(CommentError::NoSourceInfo {
                file: "bare.proto".to_string()
            })
        );
    }

    #[test]
    fn absent_comment_fields_are_empty() {
        let file = file_with(vec![Location {
            path: vec![6, 0],
            ..Default::default()
        }]);
        let comments = CommentRegistry::new(&file).service_comments(0).unwrap();
        assert_eq!(comments, DefinitionComments::default());
    }
}
