//! Identifier derivation for generated JavaScript.
//!
//! Service names are CamelCased, method names and parameter names are
//! snake_cased, and parameter names that would clash with a name already in
//! scope in the generated function get a trailing underscore.

/// Suffix that replaces a recognized schema extension in output file names.
pub const OUTPUT_SUFFIX: &str = "_twirp.js";

/// Schema file extensions stripped before [`OUTPUT_SUFFIX`] is appended.
pub const SCHEMA_EXTENSIONS: &[&str] = &[".proto", ".protodevel"];

/// Names the generated callable body and the embedding code already use.
const RESERVED_NAMES: &[&str] = &[
    "self",
    "_sym_db",
    "full_method",
    "body",
    "serialize",
    "deserialize",
    "resp_str",
];

/// Other identifiers bound in the generated callable's scope.
///
/// The `onSuccess`/`onError` parameters are absent: derived names are
/// snake_case and can never contain an upper-case letter.
const CALLABLE_SCOPE_NAMES: &[&str] = &["server_address", "_request"];

/// JavaScript reserved words, including strict-mode and contextual ones.
///
/// Derived parameter names are snake_case and therefore lower-case, so only
/// lower-case words can ever match.
const JS_RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Converts a schema identifier to protobuf-style CamelCase.
///
/// A leading underscore becomes `X`. An interior underscore followed by a
/// lower-case letter is dropped and the letter upper-cased. Digits are
/// copied through and start a new word.
///
/// ## Examples
///
/// ```
/// use twirpjs_gen::naming::camel_case;
///
/// assert_eq!(camel_case("fooBar"), "FooBar");
/// assert_eq!(camel_case("hello_world"), "HelloWorld");
/// assert_eq!(camel_case("_my_field_name_2"), "XMyFieldName_2");
/// ```
pub fn camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    if chars.first() == Some(&'_') {
        out.push('X');
        i += 1;
    }

    while i < chars.len() {
        let c = chars[i];
        if c == '_' && chars.get(i + 1).is_some_and(char::is_ascii_lowercase) {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c.to_ascii_uppercase());
        while chars.get(i + 1).is_some_and(char::is_ascii_lowercase) {
            i += 1;
            out.push(chars[i]);
        }
        i += 1;
    }

    out
}

/// Converts a CamelCase identifier to snake_case.
///
/// Every upper-case character after the first is preceded by `_`. No
/// acronym detection is attempted, so `HTTPStatus` becomes `h_t_t_p_status`.
///
/// ```
/// use twirpjs_gen::naming::snake_case;
///
/// assert_eq!(snake_case("MakeHat"), "make_hat");
/// assert_eq!(snake_case("speak"), "speak");
/// ```
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Returns true if `name` cannot be used as the generated input parameter.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
        || CALLABLE_SCOPE_NAMES.contains(&name)
        || JS_RESERVED_WORDS.contains(&name)
}

/// Appends `_` to a parameter name that collides with a reserved name.
///
/// ```
/// use twirpjs_gen::naming::escape_param_name;
///
/// assert_eq!(escape_param_name("self".to_string()), "self_");
/// assert_eq!(escape_param_name("size".to_string()), "size");
/// ```
pub fn escape_param_name(name: String) -> String {
    if is_reserved(&name) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Derives the generated file name for a schema file.
///
/// A trailing `.proto` or `.protodevel` extension on the last path
/// component is replaced by [`OUTPUT_SUFFIX`]; any other name has the
/// suffix appended.
///
/// ```
/// use twirpjs_gen::naming::output_file_name;
///
/// assert_eq!(output_file_name("rpc/service.proto"), "rpc/service_twirp.js");
/// assert_eq!(output_file_name("service.idl"), "service.idl_twirp.js");
/// ```
pub fn output_file_name(schema_name: &str) -> String {
    let base = schema_name.rsplit('/').next().unwrap_or(schema_name);
    let stem = SCHEMA_EXTENSIONS
        .iter()
        .find(|ext| base.ends_with(*ext))
        .map(|ext| &schema_name[..schema_name.len() - ext.len()])
        .unwrap_or(schema_name);

    format!("{}{}", stem, OUTPUT_SUFFIX)
}
