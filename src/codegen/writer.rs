//! Indentation-aware line buffer for emitted C++.

const INDENT: usize = 4;

#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth * INDENT {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append an empty line. Never indented.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}
