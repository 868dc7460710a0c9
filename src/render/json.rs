//! JSON renderer — the array consumed by downstream tooling.

use crate::error::Result;
use crate::model::ParsedFunction;
use crate::render::Renderer;

pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, functions: &[ParsedFunction]) -> Result<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(functions)?
        } else {
            serde_json::to_string(functions)?
        };
        out.push('\n');
        Ok(out)
    }
}
