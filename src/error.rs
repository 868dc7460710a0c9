use std::path::PathBuf;
use thiserror::Error;

/// Result type for parsing and generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations in hand-authored input, plus I/O failures.
///
/// None of these are recoverable: callers report and abort.
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected one of '{{', '(' or '<' at offset {offset} in: {text}")]
    InvalidBracket { offset: usize, text: String },

    #[error("unbalanced '{open}' at offset {offset} in: {text}")]
    UnbalancedBracket {
        open: char,
        offset: usize,
        text: String,
    },

    #[error("no template parameter list in: {0}")]
    MissingTemplateList(String),

    #[error("template parameter needs a type and a name: '{0}'")]
    MalformedTemplateParameter(String),

    #[error("no '(' in declaration: {0}")]
    MissingOpenParen(String),

    #[error("no ')' closing the parameter list in: {0}")]
    MissingCloseParen(String),

    #[error("no function name before '(' in: {0}")]
    MissingFunctionName(String),

    #[error("parameter of type '{type_name}' has no name in: {text}")]
    MissingParameterName { type_name: String, text: String },

    #[error("'auto' return type without trailing '->' in: {0}")]
    MissingTrailingReturn(String),

    #[error("line {line}: declaration has no template line above it")]
    MissingTemplateLine { line: usize },

    #[error("line {line}: expected '{{' after declaration, found '{found}'")]
    MissingBodyOpen { line: usize, found: String },

    #[error("line {line}: function body is never closed by a '}}' line")]
    UnterminatedBody { line: usize },

    #[error("catalog entry '{name}' in {list} is not a C++ identifier")]
    InvalidCatalogName { list: &'static str, name: String },

    #[error("catalog entry '{name}' appears twice in {list}")]
    DuplicateCatalogName { list: &'static str, name: String },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
