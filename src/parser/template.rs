//! `template <...>` line parser.

use super::cursor::expect_closing;
use crate::error::{Error, Result};
use crate::model::TemplateParameter;

/// Parse the angle-bracket list on a template line.
///
/// Entries are split on every comma; nested commas are outside the
/// supported grammar. Each entry is `type name` or `type name = default`.
pub fn parse_template_parameters(line: &str) -> Result<Vec<TemplateParameter>> {
    let start = line
        .find('<')
        .ok_or_else(|| Error::MissingTemplateList(line.to_string()))?;
    let end = expect_closing(line, start)?;
    let list = &line[start + 1..end];

    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(',').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<TemplateParameter> {
    let entry = entry.trim();
    let mut tokens = entry.split_whitespace();
    let (Some(type_name), Some(_)) = (tokens.next(), tokens.next()) else {
        return Err(Error::MalformedTemplateParameter(entry.to_string()));
    };

    let rest = entry[type_name.len()..].trim();
    let (variable_name, default_value) = match rest.split_once('=') {
        Some((name, default)) => (name.trim(), default.trim()),
        None => (rest, ""),
    };

    Ok(TemplateParameter {
        type_name: type_name.to_string(),
        variable_name: variable_name.to_string(),
        default_value: default_value.to_string(),
    })
}
