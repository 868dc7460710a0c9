//! tg-codegen — source-to-source helpers for the typed-geometry headers.
//!
//! Two tools share this library:
//!
//! - **function-parser** — [`parser::parse_header`] pulls
//!   `[[nodiscard]] constexpr` definitions out of a header into
//!   [`model::ParsedFunction`] records, rendered by [`render`].
//! - **object-function-generator** — [`codegen::generate`] expands a
//!   [`codegen::Catalog`] into `object_functions<T>` stub headers.
//!
//! Both work on a narrow, hand-written subset of C++. Malformed input is a
//! hard [`Error`]; nothing is recovered or partially emitted.

pub mod codegen;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
