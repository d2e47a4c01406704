//! `jscrunch` — minify built JavaScript assets in place.
//!
//! Walks a build-output directory, minifies every matching file with the
//! core engine, overwrites it, and reports the byte savings per file. Only
//! I/O failures are hard errors; a file that ends inside an unterminated
//! construct is rewritten best-effort and logged as a warning.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

mod driver;

#[derive(Debug, Parser)]
#[command(name = "jscrunch", version, about)]
struct Args {
    /// Directory to scan for files to minify.
    #[arg(default_value = "build")]
    root: PathBuf,

    /// File extension to match.
    #[arg(long, default_value = "js")]
    ext: String,

    /// Report savings without rewriting any file.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if !args.root.is_dir() {
        println!("no {} directory found", args.root.display());
        return Ok(());
    }

    let reports = driver::run(&args.root, &args.ext, args.dry_run)?;
    if reports.is_empty() {
        println!("no .{} files found under {}", args.ext, args.root.display());
        return Ok(());
    }

    let mut original = 0u64;
    let mut minified = 0u64;
    for report in &reports {
        if !report.ended_cleanly {
            warn!(
                path = %report.path.display(),
                "scan ended inside an unterminated construct; output may be truncated"
            );
        }
        println!(
            "✓ {}: {} → {} bytes ({:.2}% reduction)",
            report.path.display(),
            report.original_bytes,
            report.minified_bytes,
            report.savings()
        );
        original += report.original_bytes as u64;
        minified += report.minified_bytes as u64;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = if original == 0 {
        0.0
    } else {
        (1.0 - minified as f64 / original as f64) * 100.0
    };
    println!(
        "{} file(s): {original} → {minified} bytes ({total:.2}% reduction)",
        reports.len()
    );
    Ok(())
}

/// Initialise the subscriber only when `RUST_LOG` is set, so the default
/// path carries no formatting overhead.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
}
