//! The transport shim emitted at the top of every generated file.
//!
//! `_request(method, path, body, onSuccess, onError)` sends one JSON request
//! over `XMLHttpRequest`. Status 204/205 calls `onSuccess()` with no value,
//! 200 calls `onSuccess(parsedBody)`, anything else calls
//! `onError(parsedBody)`. It does not depend on the schema.

use super::writer::CodeWriter;

/// Name of the shim function generated callables delegate to.
pub const SHIM_FUNCTION: &str = "_request";

/// HTTP method every generated callable uses.
pub const RPC_HTTP_METHOD: &str = "POST";

pub const TRANSPORT_SHIM: &str = r#"// _request takes the HTTP method, URL path (this will usually contain the domain name)
// json body that will be sent to the server, a callback on successful requests and a
// callback for requests that error out.
var _request = function(method, path, body, onSuccess, onError) {
  var xhr = new XMLHttpRequest();
  xhr.open(method, path, true);
  xhr.setRequestHeader("Accept","application/json");
  xhr.setRequestHeader("Content-Type","application/json");

  xhr.onreadystatechange = function (e) {
    if (xhr.readyState == 4) {
      if (xhr.status == 204 || xhr.status == 205) {
        onSuccess();
      } else if (xhr.status == 200) {
        var value = JSON.parse(xhr.responseText);
        onSuccess(value);
      } else {
        var value = JSON.parse(xhr.responseText);
        onError(value);
      }
    }
  };

  if (body != null) {
    xhr.send(JSON.stringify(body));
  } else {
    xhr.send(null);
  }
};
"#;

/// Writes the shim followed by a separating blank line.
pub fn emit_transport_shim(w: &mut CodeWriter) {
    w.block(TRANSPORT_SHIM);
    w.blank();
}
