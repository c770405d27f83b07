//! Indent-aware output buffer.
//!
//! Each node appends into one growing buffer merged bottom-up, so deep or
//! wide trees never pay quadratic concatenation cost.

const INDENT: &str = "    ";

/// An appendable code buffer with an indentation level.
#[derive(Debug, Default)]
pub struct CodeBuilder {
    buf: String,
    depth: usize,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_depth(depth: usize) -> Self {
        Self { buf: String::new(), depth }
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, text: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Append a pre-rendered block, shifting it to the current depth.
    pub fn block(&mut self, block: &str) -> &mut Self {
        for line in block.lines() {
            if line.is_empty() {
                self.buf.push('\n');
            } else {
                self.line(line);
            }
        }
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn finish(self) -> String {
        let mut buf = self.buf;
        while buf.ends_with('\n') {
            buf.pop();
        }
        buf
    }
}

/// Shift every non-empty line of a block right by `levels`.
pub fn indent_block(block: &str, levels: usize) -> String {
    let pad = INDENT.repeat(levels);
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a pixel or fraction value without a trailing `.0`.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(16.0), "16");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-4.0), "-4");
    }

    #[test]
    fn test_nested_lines() {
        let mut b = CodeBuilder::new();
        b.line("Row {").indent().line("Text(\"hi\")").dedent().line("}");
        assert_eq!(b.finish(), "Row {\n    Text(\"hi\")\n}");
    }

    #[test]
    fn test_block_reindents() {
        let inner = "A {\n    B\n}";
        let mut b = CodeBuilder::new();
        b.line("Outer {").indent().block(inner).dedent().line("}");
        assert_eq!(b.finish(), "Outer {\n    A {\n        B\n    }\n}");
    }

    #[test]
    fn test_indent_block_skips_empty_lines() {
        assert_eq!(indent_block("a\n\nb", 1), "    a\n\n    b");
    }
}
