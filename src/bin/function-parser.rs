//! function-parser — extract `[[nodiscard]] constexpr` definitions from
//! typed-geometry headers.
//!
//! - **stdin mode**: `function-parser < aabb.hh`
//! - **file mode**: `function-parser -n aabb_of 'typed-geometry/functions/objects/*.hh'`
//!
//! Records from every input are concatenated in sorted path order and
//! written to stdout once all inputs parsed.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tg_codegen::{parser, render};

#[derive(Parser)]
#[command(
    name = "function-parser",
    about = "Parse C++ function definitions from typed-geometry headers into JSON"
)]
struct Cli {
    /// Header files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Only emit functions with this name. Can be specified multiple times.
    #[arg(short = 'n', long = "function")]
    functions: Vec<String>,

    /// Output format: json (default), signatures
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Log parsed functions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tg_codegen::logging::init(cli.verbose);

    let renderer = render::create_renderer(&cli.format, cli.pretty)?;

    let functions = if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        parser::parse_header(&input, &cli.functions).context("failed to parse stdin")?
    } else {
        let mut all = Vec::new();
        for path in expand_globs(&cli.files)? {
            let parsed = parser::parse_file(&path, &cli.functions)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            all.extend(parsed);
        }
        all
    };

    print!("{}", renderer.render(&functions)?);
    Ok(())
}

/// Expand glob patterns into a sorted, deduplicated list of files.
/// Bare directories are scanned (non-recursively) for `.hh` headers.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_header(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            anyhow::bail!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_header(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("hh" | "hpp" | "h")
    )
}
