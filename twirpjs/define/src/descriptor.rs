//! Conversion from compiler descriptors into schema values.

use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};
use tracing::debug;

use crate::comments::{CommentError, CommentRegistry, DefinitionComments};
use crate::types::{Method, SchemaFile, Service};

impl SchemaFile {
    /// Builds a schema file from a decoded `FileDescriptorProto`.
    ///
    /// Services and methods keep their declaration order. Comments are
    /// resolved from the file's source info; a failed lookup or an empty
    /// leading comment leaves the comment unset.
    ///
    /// ## Examples
    ///
    /// ```
    /// use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};
    /// use twirpjs_define::SchemaFile;
    ///
    /// let descriptor = FileDescriptorProto {
    ///     name: Some("test.proto".to_string()),
    ///     package: Some("us.xeserv.api".to_string()),
    ///     service: vec![ServiceDescriptorProto {
    ///         name: Some("HelloWorld".to_string()),
    ///         method: vec![MethodDescriptorProto {
    ///             name: Some("Speak".to_string()),
    ///             input_type: Some(".us.xeserv.api.Words".to_string()),
    ///             ..Default::default()
    ///         }],
    ///         ..Default::default()
    ///     }],
    ///     ..Default::default()
    /// };
    ///
    /// let file = SchemaFile::from_descriptor(&descriptor);
    /// assert_eq!(file.services[0].methods[0].input_basename(), "Words");
    /// ```
    pub fn from_descriptor(file: &FileDescriptorProto) -> Self {
        let registry = CommentRegistry::new(file);

        let services = file
            .service
            .iter()
            .enumerate()
            .map(|(i, service)| convert_service(&registry, i, service))
            .collect();

        SchemaFile {
            name: file.name().to_string(),
            package: Some(file.package())
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            services,
        }
    }
}

fn convert_service(
    registry: &CommentRegistry<'_>,
    index: usize,
    service: &ServiceDescriptorProto,
) -> Service {
    let methods = service
        .method
        .iter()
        .enumerate()
        .map(|(j, method)| convert_method(registry, index, j, method))
        .collect();

    Service {
        name: service.name().to_string(),
        methods,
        comment: leading_comment(registry.service_comments(index), service.name()),
    }
}

fn convert_method(
    registry: &CommentRegistry<'_>,
    service_index: usize,
    index: usize,
    method: &MethodDescriptorProto,
) -> Method {
    Method {
        name: method.name().to_string(),
        input_type: method.input_type().to_string(),
        comment: leading_comment(
            registry.method_comments(service_index, index),
            method.name(),
        ),
        client_streaming: method.client_streaming(),
        server_streaming: method.server_streaming(),
    }
}

fn leading_comment(
    lookup: Result<DefinitionComments, CommentError>,
    definition: &str,
) -> Option<String> {
    match lookup {
        Ok(comments) if !comments.leading.is_empty() => Some(comments.leading),
        Ok(_) => None,
        Err(e) => {
            debug!(definition, error = %e, "comment lookup failed, emitting without docs");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::SourceCodeInfo;
    use prost_types::source_code_info::Location;
    use tracing_test::traced_test;

    fn method(name: &str, input: &str) -> MethodDescriptorProto {
        MethodDescriptorProto {
            name: Some(name.to_string()),
            input_type: Some(input.to_string()),
            output_type: Some(".pkg.Out".to_string()),
            ..Default::default()
        }
    }

    fn comment_at(path: Vec<i32>, text: &str) -> Location {
        Location {
            path,
            leading_comments: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn descriptor() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("rpc/haberdasher.proto".to_string()),
            package: Some("twirp.example".to_string()),
            service: vec![
                ServiceDescriptorProto {
                    name: Some("Haberdasher".to_string()),
                    method: vec![
                        method("MakeHat", ".twirp.example.Size"),
                        method("ListHats", ".twirp.example.Empty"),
                    ],
                    ..Default::default()
                },
                ServiceDescriptorProto {
                    name: Some("tailor".to_string()),
                    method: vec![method("Measure", ".twirp.example.Body")],
                    ..Default::default()
                },
            ],
            source_code_info: Some(SourceCodeInfo {
                location: vec![
                    comment_at(vec![6, 0], " Haberdasher makes hats.\n"),
                    comment_at(vec![6, 0, 2, 1], " Lists every hat.\n"),
                    comment_at(vec![6, 1], ""),
                ],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_names_and_order() {
        let file = SchemaFile::from_descriptor(&descriptor());

        assert_eq!(file.name, "rpc/haberdasher.proto");
        assert_eq!(file.package.as_deref(), Some("twirp.example"));
        let names: Vec<_> = file.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Haberdasher", "tailor"]);
        let methods: Vec<_> = file.services[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(methods, ["MakeHat", "ListHats"]);
        assert_eq!(file.services[0].methods[0].input_type, ".twirp.example.Size");
    }

    #[test]
    fn resolves_comments() {
        let file = SchemaFile::from_descriptor(&descriptor());

        assert_eq!(file.services[0].comment.as_deref(), Some(" Haberdasher makes hats.\n"));
        assert_eq!(file.services[0].methods[0].comment, None);
        assert_eq!(
            file.services[0].methods[1].comment.as_deref(),
            Some(" Lists every hat.\n")
        );
        // present but empty
        assert_eq!(file.services[1].comment, None);
    }

    #[test]
    fn missing_package_is_none() {
        let mut raw = descriptor();
        raw.package = None;
        assert_eq!(SchemaFile::from_descriptor(&raw).package, None);

        raw.package = Some(String::new());
        assert_eq!(SchemaFile::from_descriptor(&raw).package, None);
    }

    #[test]
    fn carries_streaming_flags() {
        let mut raw = descriptor();
        raw.service[1].method[0].server_streaming = Some(true);

        let file = SchemaFile::from_descriptor(&raw);
        assert!(file.services[1].methods[0].server_streaming);
        assert!(!file.services[1].methods[0].client_streaming);
    }

    #[traced_test]
    #[test]
    fn lookup_failure_is_not_fatal() {
        let mut raw = descriptor();
        raw.source_code_info = None;

        let file = SchemaFile::from_descriptor(&raw);
        assert!(file.services.iter().all(|s| s.comment.is_none()));
        assert!(logs_contain("comment lookup failed"));
    }

    #[test]
    fn degenerate_names_flow_through() {
        let raw = FileDescriptorProto {
            service: vec![ServiceDescriptorProto {
                method: vec![MethodDescriptorProto::default()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let file = SchemaFile::from_descriptor(&raw);
        assert_eq!(file.name, "");
        assert_eq!(file.services[0].name, "");
        assert_eq!(file.services[0].methods[0].name, "");
        assert_eq!(file.services[0].methods[0].input_type, "");
    }
}
