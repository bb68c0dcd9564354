// morfix-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use morfix_rules::Corpus;

/// Read and parse a tab-separated data file.
pub fn load_corpus(path: &Path) -> Result<Corpus, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Corpus::parse(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Parse a `--path=DIR`, `--path DIR`, or `-p DIR` argument from command
/// line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--path=") {
            data_path = Some(val.to_string());
        } else if arg == "--path" || arg == "-p" {
            if i + 1 < args.len() {
                data_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
