//! Single-line function signature parser.
//!
//! Handles the shapes used across typed-geometry:
//!
//! ```text
//! [[nodiscard]] constexpr aabb<D, ScalarT> aabb_of(pos<D, ScalarT> const& v)
//! [[nodiscard]] constexpr auto aabb_of(PrimA const& pa, PrimsT const&... prims) -> decltype(aabb_of(pa))
//! ```

use super::cursor::Cursor;
use crate::error::{Error, Result};
use crate::model::{FunctionDeclaration, FunctionParameter, Modifier};

/// Parse a full declaration line into name, parameters and return type.
pub fn parse_declaration(line: &str) -> Result<FunctionDeclaration> {
    let mut cur = Cursor::new(line);

    let mut modifiers = Vec::new();
    if cur.eat(Modifier::Nodiscard.as_str()) {
        modifiers.push(Modifier::Nodiscard);
    }
    if cur.eat(Modifier::Constexpr.as_str()) {
        modifiers.push(Modifier::Constexpr);
    }

    let rest = cur.rest();
    let open = rest
        .find('(')
        .ok_or_else(|| Error::MissingOpenParen(line.to_string()))?;

    let mut head: Vec<&str> = rest[..open].split_whitespace().collect();
    let name = head
        .pop()
        .ok_or_else(|| Error::MissingFunctionName(line.to_string()))?;
    let mut return_type = head.concat();

    // The first ')' ends the list; defaults with parentheses before it
    // are outside the supported grammar.
    let after_open = &rest[open + 1..];
    let close = after_open
        .find(')')
        .ok_or_else(|| Error::MissingCloseParen(line.to_string()))?;
    let parameters = parse_parameter_list(&after_open[..close])?;

    if return_type == "auto" {
        let trailing = after_open[close + 1..]
            .trim()
            .strip_prefix("->")
            .ok_or_else(|| Error::MissingTrailingReturn(line.to_string()))?;
        return_type = trailing.trim().to_string();
    }

    Ok(FunctionDeclaration {
        modifiers,
        name: name.to_string(),
        parameters,
        return_type,
    })
}

/// Parse the text between a parameter list's parentheses.
pub fn parse_parameter_list(text: &str) -> Result<Vec<FunctionParameter>> {
    let mut cur = Cursor::new(text);
    let mut parameters = Vec::new();

    while !cur.is_empty() {
        let mut type_name = cur.read_type()?.to_string();
        if cur.eat_keyword("const") {
            type_name.push_str(" const");
        }
        if cur.eat("&") {
            type_name.push('&');
        }
        if cur.eat("...") {
            type_name.push_str("...");
        }

        let parameter_name = cur
            .read_name()
            .ok_or_else(|| Error::MissingParameterName {
                type_name: type_name.clone(),
                text: text.to_string(),
            })?
            .to_string();

        let default_value = if cur.eat("=") {
            cur.read_until_top_level_comma().to_string()
        } else {
            String::new()
        };

        cur.eat(",");
        parameters.push(FunctionParameter {
            type_name,
            parameter_name,
            default_value,
        });
    }

    Ok(parameters)
}
