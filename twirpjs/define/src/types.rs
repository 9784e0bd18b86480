//! Core schema types consumed by the client generator.
//!
//! - [`SchemaFile`] - One `.proto` file and the services it declares
//! - [`Service`] - A named group of remote methods
//! - [`Method`] - A single remotely callable operation
//!
//! All three are plain values. The generator only reads them.

/// A parsed schema file selected for generation.
///
/// Maps 1:1 to a generated output file.
///
/// ## Examples
///
/// ```
/// use twirpjs_define::{Method, SchemaFile, Service};
///
/// let file = SchemaFile::new("rpc/haberdasher.proto")
///     .with_package("twirp.example")
///     .with_service(
///         Service::new("Haberdasher").with_method(Method::new("MakeHat", ".twirp.example.Size")),
///     );
///
/// assert_eq!(file.package.as_deref(), Some("twirp.example"));
/// assert_eq!(file.method_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaFile {
    /// File name as reported by the compiler (e.g. `rpc/service.proto`).
    pub name: String,
    /// Declared package, `None` when the file has no `package` statement.
    pub package: Option<String>,
    /// Services in declaration order.
    pub services: Vec<Service>,
}

impl SchemaFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            services: Vec::new(),
        }
    }

    /// Sets the package. An empty package is treated as no package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        let package = package.into();
        self.package = if package.is_empty() { None } else { Some(package) };
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Total number of methods across every service in the file.
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }
}

/// A service declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Name as declared in the schema (not case-normalized).
    pub name: String,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Leading documentation comment, if the schema carried one.
    pub comment: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            comment: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A method declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    /// Name as declared in the schema. Used verbatim in the request path.
    pub name: String,
    /// Input message type, usually fully qualified with a leading dot
    /// (e.g. `.twirp.example.Size`).
    pub input_type: String,
    /// Leading documentation comment, if the schema carried one.
    pub comment: Option<String>,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

impl Method {
    pub fn new(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            comment: None,
            client_streaming: false,
            server_streaming: false,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the input type name with its namespace path stripped.
    ///
    /// ```
    /// use twirpjs_define::Method;
    ///
    /// assert_eq!(Method::new("Speak", ".us.xeserv.api.Words").input_basename(), "Words");
    /// assert_eq!(Method::new("Speak", "Words").input_basename(), "Words");
    /// ```
    pub fn input_basename(&self) -> &str {
        self.input_type
            .rsplit('.')
            .next()
            .unwrap_or(&self.input_type)
    }

    /// True when either side of the call is declared as a stream.
    pub fn is_streaming(&self) -> bool {
        self.client_streaming || self.server_streaming
    }
}
