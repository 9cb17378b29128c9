use std::path::PathBuf;
use std::process;

use clap::Parser;
use versenotes::pipeline::{self, FatalError, Options};
use versenotes::utils::expand_tilde;

/// versenotes - one tagged markdown note per verse
#[derive(Parser)]
#[command(name = "versenotes")]
#[command(about = "Convert a KJV verse corpus into a vault of tagged markdown notes")]
#[command(version)]
struct Cli {
    /// Path to the verse corpus (e.g. kjv.json)
    #[arg(long, value_name = "FILE")]
    infile: PathBuf,

    /// Output folder (e.g. /path/to/Vault/Bible)
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Overwrite existing notes
    #[arg(long)]
    force: bool,

    /// Print per-record diagnostics
    #[arg(long)]
    verbose: bool,

    /// Zero-pad width for book ordinals (0 = no padding)
    #[arg(long, default_value_t = 2)]
    pad: usize,

    /// Value of the translation front-matter key
    #[arg(long, default_value = "KJV")]
    translation: String,
}

fn main() {
    let cli = Cli::parse();
    let options = Options {
        infile: expand_tilde(&cli.infile),
        out_root: expand_tilde(&cli.out),
        overwrite: cli.force,
        verbose: cli.verbose,
        pad: cli.pad,
        translation: cli.translation,
    };

    match pipeline::run(&options) {
        Ok(summary) => {
            println!(
                "[done] Written: {} | Skipped: {} | Errors: {} | Output: {}",
                summary.written,
                summary.skipped,
                summary.errors,
                options.out_root.display()
            );
        }
        Err(e) => {
            eprintln!("[error] {e:#}");
            // Fatal input conditions carry their own stable exit codes;
            // anything else is an internal error.
            let code = e
                .downcast_ref::<FatalError>()
                .map_or(1, FatalError::exit_code);
            process::exit(code);
        }
    }
}
