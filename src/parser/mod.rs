//! Declaration tokenizer — turns header text into [`ParsedFunction`] records.
//!
//! A small hand-rolled recursive-descent parser over a narrow grammar:
//! [`scan`] finds definition blocks line by line, [`template`] and
//! [`declaration`] split the two signature lines, and [`cursor`] holds the
//! bracket-aware token readers they share.

pub mod cursor;
pub mod declaration;
pub mod scan;
pub mod template;

use crate::error::{Error, Result};
use crate::model::ParsedFunction;
use std::fs;
use std::path::Path;

pub use cursor::index_of_closing;
pub use declaration::{parse_declaration, parse_parameter_list};
pub use scan::collect_functions;
pub use template::parse_template_parameters;

/// Parse header text, keeping only `names` when the list is non-empty.
pub fn parse_header(text: &str, names: &[String]) -> Result<Vec<ParsedFunction>> {
    let functions = collect_functions(text, names)?;
    tracing::info!(functions = functions.len(), "parsed header");
    Ok(functions)
}

/// Read and parse a header file.
pub fn parse_file(path: &Path, names: &[String]) -> Result<Vec<ParsedFunction>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let _span = tracing::debug_span!("parse_file", path = %path.display()).entered();
    parse_header(&text, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_file_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"template <class T>\n[[nodiscard]] constexpr T id(T const& x)\n{\n    return x;\n}\n",
        )
        .unwrap();

        let functions = parse_file(file.path(), &[]).unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].declaration.name, "id");
    }

    #[test]
    fn parse_file_missing_is_io_error() {
        let err = parse_file(Path::new("/nonexistent/header.hh"), &[]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
