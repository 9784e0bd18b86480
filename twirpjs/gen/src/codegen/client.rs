//! Per-service client emission.
//!
//! Each method becomes one top-level callable:
//!
//! ```text
//! var Haberdasher_make_hat = function(server_address, size, onSuccess, onError) {
//!   var full_method = server_address + "/twirp/" + "twirp.example.Haberdasher" + "/" + "MakeHat";
//!   _request("POST", full_method, size, onSuccess, onError);
//! };
//! ```

use tracing::{debug, warn};
use twirpjs_define::{Method, SchemaFile, Service};

use super::comments::emit_comment_block;
use super::shim::{RPC_HTTP_METHOD, SHIM_FUNCTION};
use super::writer::CodeWriter;
use crate::naming::{camel_case, escape_param_name, snake_case};

/// Path segment every Twirp route starts with.
pub const TWIRP_PATH_PREFIX: &str = "/twirp/";

/// CamelCased service name used as the callable prefix.
pub fn service_name(service: &Service) -> String {
    camel_case(&service.name)
}

/// Name given to the generated client in its header comment.
pub fn client_name(service: &Service) -> String {
    format!("{}Client", service_name(service))
}

/// Service name as routed by the server: `package.ServiceName`, or just
/// `ServiceName` when the file has no package.
///
/// ```
/// use twirpjs_define::{SchemaFile, Service};
/// use twirpjs_gen::codegen::client::full_service_name;
///
/// let service = Service::new("Haberdasher");
/// let file = SchemaFile::new("a.proto").with_package("twirp.example");
/// assert_eq!(full_service_name(&file, &service), "twirp.example.Haberdasher");
///
/// let bare = SchemaFile::new("a.proto");
/// assert_eq!(full_service_name(&bare, &service), "Haberdasher");
/// ```
pub fn full_service_name(file: &SchemaFile, service: &Service) -> String {
    let name = service_name(service);
    match file.package.as_deref() {
        Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, name),
        _ => name,
    }
}

pub fn method_name(method: &Method) -> String {
    snake_case(&method.name)
}

/// Snake-cased input type basename, escaped against reserved names.
pub fn input_param_name(method: &Method) -> String {
    escape_param_name(snake_case(method.input_basename()))
}

/// Name of the generated callable: `<ServiceName>_<method_name>`.
pub fn callable_name(service: &Service, method: &Method) -> String {
    format!("{}_{}", service_name(service), method_name(method))
}

/// Quotes `s` as a JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so this escapes quotes,
/// backslashes and control characters the same way a JS literal needs.
pub fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Writes the client section for one service.
pub fn emit_service(w: &mut CodeWriter, file: &SchemaFile, service: &Service) {
    debug!(service = %service.name, methods = service.methods.len(), "emitting client");

    w.line(format!("// methods for {}", client_name(service)));
    if let Some(comment) = &service.comment {
        emit_comment_block(w, comment);
        w.blank();
    }
    w.blank();

    let full_service = full_service_name(file, service);
    for method in &service.methods {
        emit_method(w, &full_service, service, method);
    }
}

fn emit_method(w: &mut CodeWriter, full_service: &str, service: &Service, method: &Method) {
    if method.is_streaming() {
        warn!(
            service = %service.name,
            method = %method.name,
            "streaming method emitted as a single request"
        );
    }

    let callable = callable_name(service, method);
    let param = input_param_name(method);
    debug!(%callable, %param, "emitting method");

    if let Some(comment) = &method.comment {
        emit_comment_block(w, comment);
    }

    w.line(format!(
        "var {} = function(server_address, {}, onSuccess, onError) {{",
        callable, param
    ));
    w.line(format!(
        "  var full_method = server_address + {} + {} + \"/\" + {};",
        js_string(TWIRP_PATH_PREFIX),
        js_string(full_service),
        js_string(&method.name)
    ));
    w.line(format!(
        "  {}({}, full_method, {}, onSuccess, onError);",
        SHIM_FUNCTION,
        js_string(RPC_HTTP_METHOD),
        param
    ));
    w.line("};");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{haberdasher_file, hello_world_file};

    fn render(file: &SchemaFile) -> String {
        let mut w = CodeWriter::new();
        for service in &file.services {
            emit_service(&mut w, file, service);
        }
        w.finish()
    }

    #[test]
    fn names_are_normalized() {
        let service = Service::new("fooBar");
        let method = Method::new("MakeHat", ".pkg.HatSize");

        assert_eq!(service_name(&service), "FooBar");
        assert_eq!(client_name(&service), "FooBarClient");
        assert_eq!(callable_name(&service, &method), "FooBar_make_hat");
        assert_eq!(input_param_name(&method), "hat_size");
    }

    #[test]
    fn full_service_name_uses_normalized_service() {
        let file = SchemaFile::new("a.proto").with_package("pkg");
        assert_eq!(full_service_name(&file, &Service::new("hello_world")), "pkg.HelloWorld");
    }

    #[test]
    fn reserved_input_name_is_escaped() {
        let method = Method::new("Run", ".pkg.Self");
        assert_eq!(input_param_name(&method), "self_");
    }

    #[test]
    fn scope_collisions_are_escaped() {
        assert_eq!(input_param_name(&Method::new("M", ".p.ServerAddress")), "server_address_");
        assert_eq!(input_param_name(&Method::new("M", ".p.Function")), "function_");
        assert_eq!(input_param_name(&Method::new("M", ".p.OnSuccess")), "on_success");
    }

    #[test]
    fn js_string_escapes() {
        assert_eq!(js_string("a.B"), r#""a.B""#);
        assert_eq!(js_string(r#"q"b\"#), r#""q\"b\\""#);
        assert_eq!(js_string("\n"), r#""\n""#);
    }

    #[test]
    fn emits_reference_client() {
        let expected = r#"// methods for HelloWorldClient

var HelloWorld_speak = function(server_address, words, onSuccess, onError) {
  var full_method = server_address + "/twirp/" + "us.xeserv.api.HelloWorld" + "/" + "Speak";
  _request("POST", full_method, words, onSuccess, onError);
};
"#;
        assert_eq!(render(&hello_world_file()), expected);
    }

    #[test]
    fn service_comment_is_followed_by_extra_blank_line() {
        let out = render(&haberdasher_file());
        assert!(out.starts_with(
            "// methods for HaberdasherClient\n/*\n    Haberdasher service makes hats for clients.\n*/\n\n\n"
        ));
    }

    #[test]
    fn method_comment_precedes_callable() {
        let out = render(&haberdasher_file());
        assert!(out.contains(concat!(
            "/*\n    MakeHat produces a hat of mysterious, randomly-selected color!\n*/\n",
            "var Haberdasher_make_hat = function(server_address, size, onSuccess, onError) {\n",
        )));
    }

    #[test]
    fn method_path_uses_raw_method_name() {
        let out = render(&haberdasher_file());
        assert!(out.contains(r#""/twirp/" + "twirp.example.Haberdasher" + "/" + "MakeHat";"#));
    }

    #[test]
    fn empty_service_has_header_only() {
        let file = SchemaFile::new("a.proto").with_service(Service::new("Idle"));
        assert_eq!(render(&file), "// methods for IdleClient\n\n");
    }
}
