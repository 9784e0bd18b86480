//! Doc comment blocks for services and methods.

use super::writer::CodeWriter;

/// Indentation applied to every line inside a comment block.
pub const COMMENT_INDENT: &str = "    ";

/// Writes `text` as a `/* ... */` block.
///
/// One trailing newline is dropped, then each line loses at most one leading
/// space (protoc keeps the space after `//`) and is indented by
/// [`COMMENT_INDENT`]. A `*/` inside the text would end the block early, so
/// it is written as `* /`.
pub fn emit_comment_block(w: &mut CodeWriter, text: &str) {
    w.line("/*");
    let text = text.strip_suffix('\n').unwrap_or(text);
    for line in text.split('\n') {
        let line = line.strip_prefix(' ').unwrap_or(line);
        w.line(format!("{}{}", COMMENT_INDENT, line.replace("*/", "* /")));
    }
    w.line("*/");
}
