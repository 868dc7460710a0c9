//! One reconstructed signature per line, for eyeballing parser output.
//!
//! Return types use the trailing form, so `aabb<D,ScalarT>` shows exactly
//! what was captured.

use crate::error::Result;
use crate::model::ParsedFunction;
use crate::render::Renderer;

pub struct SignatureRenderer;

impl Renderer for SignatureRenderer {
    fn render(&self, functions: &[ParsedFunction]) -> Result<String> {
        let mut out = String::new();
        for func in functions {
            out.push_str(&func.to_string());
            out.push('\n');
        }
        Ok(out)
    }
}
