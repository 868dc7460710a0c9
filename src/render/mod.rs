//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod signatures;

use crate::error::Result;
use crate::model::ParsedFunction;

/// Trait for rendering parsed functions into a specific output format.
pub trait Renderer {
    fn render(&self, functions: &[ParsedFunction]) -> Result<String>;
}

/// Create a renderer for the given format name.
///
/// `pretty` only affects the JSON renderer.
pub fn create_renderer(format: &str, pretty: bool) -> anyhow::Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer { pretty })),
        "signatures" | "sig" => Ok(Box::new(signatures::SignatureRenderer)),
        _ => Err(anyhow::anyhow!(
            "unknown format: {}. Use json or signatures",
            format
        )),
    }
}
