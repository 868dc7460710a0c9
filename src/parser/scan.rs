//! Line scanner locating function definitions in a header.
//!
//! Recognized block shape (indentation ignored):
//!
//! ```text
//! template <int D, class ScalarT>                      <- line before the declaration
//! [[nodiscard]] constexpr aabb<D, ScalarT> aabb_of(...) <- declaration line
//! {                                                     <- must be exactly '{'
//!     ...                                               <- body, kept verbatim
//! }                                                     <- first line that is exactly '}'
//! ```
//!
//! The body ends at the first line that trims to `}`, so an inner block
//! closed by a lone `}` ends the body early.

use super::declaration::parse_declaration;
use super::template::parse_template_parameters;
use crate::error::{Error, Result};
use crate::model::ParsedFunction;

/// Prefix marking a declaration line.
pub const DECLARATION_PREFIX: &str = "[[nodiscard]] constexpr";

/// Collect every function definition in `text`.
///
/// When `names` is non-empty only functions with one of those names are
/// returned. Every block is validated either way.
pub fn collect_functions(text: &str, names: &[String]) -> Result<Vec<ParsedFunction>> {
    // `split` rather than `lines` so a CRLF body keeps its `\r`.
    let lines: Vec<&str> = text.split('\n').collect();
    let mut functions = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if !line.starts_with(DECLARATION_PREFIX) {
            i += 1;
            continue;
        }

        // Error positions are 1-based line numbers.
        let template_line = match i.checked_sub(1) {
            Some(prev) => lines[prev],
            None => return Err(Error::MissingTemplateLine { line: i + 1 }),
        };

        let open = lines.get(i + 1).map(|l| l.trim()).unwrap_or_default();
        if open != "{" {
            return Err(Error::MissingBodyOpen {
                line: i + 2,
                found: open.to_string(),
            });
        }

        let body_start = i + 2;
        let body_end = lines[body_start.min(lines.len())..]
            .iter()
            .position(|l| l.trim() == "}")
            .map(|offset| body_start + offset)
            .ok_or(Error::UnterminatedBody { line: i + 1 })?;

        let template_parameters = parse_template_parameters(template_line)?;
        let declaration = parse_declaration(line)?;

        let mut body = String::new();
        for body_line in &lines[body_start..body_end] {
            body.push_str(body_line);
            body.push('\n');
        }

        if names.is_empty() || names.iter().any(|n| *n == declaration.name) {
            tracing::debug!(
                name = %declaration.name,
                line = i + 1,
                parameters = declaration.parameters.len(),
                "parsed function"
            );
            functions.push(ParsedFunction {
                template_parameters,
                declaration,
                body,
            });
        } else {
            tracing::trace!(name = %declaration.name, line = i + 1, "skipped function");
        }

        i = body_end + 1;
    }

    Ok(functions)
}
