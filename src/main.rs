use clap::Parser;
use linescan::{NtriplesCheck, ScanConfig, Scanner};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "linescan")]
#[command(about = "Validate line-oriented RDF files and report failing line numbers")]
struct Args {
    /// RDF file to validate
    #[arg(short = 'r', long = "rdf", value_name = "PATH")]
    rdf: PathBuf,

    /// Size of the buffered read window in bytes
    #[arg(long, default_value_t = linescan::DEFAULT_NOMINAL_BUFFER_BYTES)]
    buffer_bytes: usize,

    /// Maximum number of lines batched per chunk
    #[arg(long, default_value_t = linescan::DEFAULT_MAX_LINES_PER_CHUNK)]
    max_lines: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match ScanConfig::new(args.buffer_bytes, args.max_lines) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let file = match File::open(&args.rdf) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("failed to open {}: {}", args.rdf.display(), e);
            process::exit(1);
        }
    };

    let scanner = Scanner::with_config(NtriplesCheck, config);
    let mut out = io::stdout().lock();
    let report = match scanner.scan(file, &mut out) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("scan failed: {}", e);
            process::exit(1);
        }
    };
    drop(out);

    // Findings are data, not a failure: print the list and exit clean.
    println!();
    println!("{}", report);
}
