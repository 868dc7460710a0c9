//! object-function-generator — emit `object_functions<T>` stub headers.
//!
//! Writes the primary template header and one specialization per common
//! catalog type. Every stub fails to compile until someone fills it in.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tg_codegen::codegen::{self, Catalog, GeneratorConfig};

#[derive(Parser)]
#[command(
    name = "object-function-generator",
    about = "Generate object_functions<T> stub headers from a type/operation catalog"
)]
struct Cli {
    /// Output directory for per-type headers
    #[arg(short = 'o', long, default_value = "typed-geometry/object-functions")]
    out_dir: PathBuf,

    /// Path of the primary template header
    #[arg(long, default_value = "typed-geometry/object_functions.hh")]
    default_header: PathBuf,

    /// Include path written into generated headers (defaults to --default-header)
    #[arg(long)]
    include: Option<String>,

    /// TOML catalog of types and operations. Uses the built-in
    /// typed-geometry catalog when omitted.
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Print the files that would be written without touching disk
    #[arg(long)]
    dry_run: bool,

    /// Log each written file to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tg_codegen::logging::init(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::default(),
    };

    let config = GeneratorConfig {
        include: cli
            .include
            .clone()
            .unwrap_or_else(|| cli.default_header.to_string_lossy().into_owned()),
        out_dir: cli.out_dir,
        default_header: cli.default_header,
    };

    let files = codegen::plan(&catalog, &config)?;
    if cli.dry_run {
        for file in &files {
            println!("{}", file.path.display());
        }
        return Ok(());
    }

    codegen::write_files(&files)?;
    tracing::info!(files = files.len(), out_dir = %config.out_dir.display(), "generated headers");
    Ok(())
}

