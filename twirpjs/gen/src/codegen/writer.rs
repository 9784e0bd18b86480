//! Line-oriented text accumulator for generated JavaScript.

/// Accumulates generated source one line at a time.
///
/// Each writer is owned by a single file's generation pass and consumed by
/// [`CodeWriter::finish`], so nothing carries over between files.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `text` followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes a pre-formatted block verbatim. The block must end in a newline.
    pub fn block(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminates_each_line() {
        let mut w = CodeWriter::new();
        w.line("var x = 1;");
        w.blank();
        w.line(String::from("done"));
        assert_eq!(w.finish(), "var x = 1;\n\ndone\n");
    }

    #[test]
    fn block_is_verbatim() {
        let mut w = CodeWriter::new();
        w.block("a\n  b\n");
        assert_eq!(w.finish(), "a\n  b\n");
    }
}
