//! Data model for parsed function definitions — format-agnostic.
//!
//! Serialized field names follow the JSON consumed by the typed-geometry
//! tooling, so renames here are wire changes.

use serde::Serialize;
use std::fmt;

/// One entry of a `template <...>` line, e.g. `class ScalarT = float`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParameter {
    #[serde(rename = "typename")]
    pub type_name: String,
    pub variable_name: String,
    pub default_value: String,
}

/// One function argument. `type_name` carries trailing qualifiers
/// (`" const"`, `"&"`, `"..."`) in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionParameter {
    pub type_name: String,
    pub parameter_name: String,
    pub default_value: String,
}

/// Leading declaration specifiers we recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Modifier {
    #[serde(rename = "[[nodiscard]]")]
    Nodiscard,
    #[serde(rename = "constexpr")]
    Constexpr,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Nodiscard => "[[nodiscard]]",
            Modifier::Constexpr => "constexpr",
        }
    }
}

/// A single-line function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    /// In source order; each at most once.
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub parameters: Vec<FunctionParameter>,
    /// Declared type with internal whitespace removed, or the trailing
    /// `-> type` when declared `auto`.
    pub return_type: String,
}

/// A complete definition: template line, signature and raw body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFunction {
    #[serde(rename = "template-parameters")]
    pub template_parameters: Vec<TemplateParameter>,
    #[serde(rename = "function_declaration")]
    pub declaration: FunctionDeclaration,
    /// Verbatim body lines between the braces, each ending in `\n`.
    pub body: String,
}

impl fmt::Display for TemplateParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.variable_name)?;
        if !self.default_value.is_empty() {
            write!(f, " = {}", self.default_value)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.parameter_name)?;
        if !self.default_value.is_empty() {
            write!(f, " = {}", self.default_value)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionDeclaration {
    /// Always uses the trailing-return form so `auto`-resolved types
    /// round-trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{} ", m.as_str())?;
        }
        write!(f, "auto {}(", self.name)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

impl fmt::Display for ParsedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("template <")?;
        for (i, p) in self.template_parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "> {}", self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parameter_display_includes_default() {
        let p = TemplateParameter {
            type_name: "class".into(),
            variable_name: "ScalarT".into(),
            default_value: "float".into(),
        };
        assert_eq!(p.to_string(), "class ScalarT = float");
    }

    #[test]
    fn declaration_display_uses_trailing_return() {
        let decl = FunctionDeclaration {
            modifiers: vec![Modifier::Nodiscard, Modifier::Constexpr],
            name: "volume_of".into(),
            parameters: vec![FunctionParameter {
                type_name: "box<3, ScalarT> const&".into(),
                parameter_name: "b".into(),
                default_value: String::new(),
            }],
            return_type: "ScalarT".into(),
        };
        assert_eq!(
            decl.to_string(),
            "[[nodiscard]] constexpr auto volume_of(box<3, ScalarT> const& b) -> ScalarT"
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let func = ParsedFunction {
            template_parameters: vec![TemplateParameter {
                type_name: "int".into(),
                variable_name: "D".into(),
                default_value: String::new(),
            }],
            declaration: FunctionDeclaration {
                modifiers: vec![Modifier::Nodiscard],
                name: "f".into(),
                parameters: Vec::new(),
                return_type: "int".into(),
            },
            body: "    return 0;\n".into(),
        };
        let json = serde_json::to_value(&func).unwrap();
        assert_eq!(json["template-parameters"][0]["typename"], "int");
        assert_eq!(json["function_declaration"]["modifiers"][0], "[[nodiscard]]");
        assert_eq!(json["function_declaration"]["return_type"], "int");
        assert_eq!(json["body"], "    return 0;\n");
    }
}
