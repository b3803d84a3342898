//! Module Index CLI
//!
//! Resolves parsed program trees into per-module symbol, export and import
//! tables.

use modidx::commands::{parse_index_options, run_index};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("modidx", String::as_str);

    if args.len() < 2 {
        eprint!("{}", usage(program));
        std::process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print!("{}", usage(program));
        }
        "version" | "--version" | "-V" => {
            println!("modidx {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            let options = match parse_index_options(&args[1..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    eprint!("{}", usage(program));
                    std::process::exit(1);
                }
            };
            modidx::init_tracing();
            run_index(&options);
        }
    }
}

fn usage(program: &str) -> String {
    format!(
        "\
Usage: {program} <tree.xml|tree.json>... [options]

Reads each parsed program tree and prints its module index as JSON
(one object for a single file, an array for several).

Options:
  --project-root=<name>  Directory anchoring the reported file path (default: delphi)
  --pretty               Indent the JSON output
  --help, -h             Show this help message
  --version, -V          Show version information

Environment:
  MODIDX_LOG, RUST_LOG   Log filter, e.g. MODIDX_LOG=modidx_resolve=debug

Examples:
  {program} petasce_processed.xml
  {program} --pretty a_processed.xml b_processed.xml
"
    )
}
