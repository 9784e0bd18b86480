//! Shared test fixtures for twirpjs-gen tests.
//!
//! Provides schema values and encoded compiler requests so unit tests,
//! integration tests and CLI tests build their inputs the same way.

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::source_code_info::Location;
use prost_types::{
    FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto, SourceCodeInfo,
};
use twirpjs_define::{Method, SchemaFile, Service};

/// The schema behind the reference output in `tests/fixtures/test_twirp.js`.
pub fn hello_world_file() -> SchemaFile {
    SchemaFile::new("test.proto")
        .with_package("us.xeserv.api")
        .with_service(
            Service::new("HelloWorld").with_method(Method::new("Speak", ".us.xeserv.api.Words")),
        )
}

/// A documented two-method service in package `twirp.example`.
pub fn haberdasher_file() -> SchemaFile {
    SchemaFile::new("rpc/haberdasher.proto")
        .with_package("twirp.example")
        .with_service(
            Service::new("Haberdasher")
                .with_comment(" Haberdasher service makes hats for clients.\n")
                .with_method(
                    Method::new("MakeHat", ".twirp.example.Size").with_comment(
                        " MakeHat produces a hat of mysterious, randomly-selected color!\n",
                    ),
                )
                .with_method(Method::new("ListHats", ".twirp.example.ListHatsRequest")),
        )
}

/// Creates a method descriptor with the given name and input type.
pub fn method_descriptor(name: &str, input_type: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input_type.to_string()),
        output_type: Some(".google.protobuf.Empty".to_string()),
        ..Default::default()
    }
}

/// Creates a file descriptor declaring a single service.
pub fn file_descriptor(
    name: &str,
    package: Option<&str>,
    service: &str,
    methods: Vec<MethodDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: package.map(str::to_string),
        service: vec![ServiceDescriptorProto {
            name: Some(service.to_string()),
            method: methods,
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// The `test.proto` descriptor, with a leading comment on the method.
pub fn hello_world_descriptor() -> FileDescriptorProto {
    let mut file = file_descriptor(
        "test.proto",
        Some("us.xeserv.api"),
        "HelloWorld",
        vec![method_descriptor("Speak", ".us.xeserv.api.Words")],
    );
    file.source_code_info = Some(SourceCodeInfo {
        location: vec![Location {
            path: vec![6, 0, 2, 0],
            leading_comments: Some(" Speak says the words.\n".to_string()),
            ..Default::default()
        }],
    });
    file
}

/// Builds a request over `proto_file` that asks for `file_to_generate`.
pub fn request(
    file_to_generate: &[&str],
    proto_file: Vec<FileDescriptorProto>,
) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: file_to_generate.iter().map(|s| s.to_string()).collect(),
        proto_file,
        ..Default::default()
    }
}
