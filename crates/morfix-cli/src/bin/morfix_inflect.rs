// morfix-inflect: inflect lemma/MSD pairs from stdin.
//
// Trains a model on the given file, then reads lemma<TAB>msd lines from
// stdin and writes lemma<TAB>msd<TAB>prediction to stdout.
//
// Usage:
//   morfix-inflect TRAIN_FILE

use std::io::{self, BufRead, Write};
use std::path::Path;

use morfix_rules::RuleModel;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if morfix_cli::wants_help(&args) {
        println!("morfix-inflect: inflect lemma/MSD pairs from stdin.");
        println!();
        println!("Usage: morfix-inflect TRAIN_FILE");
        println!();
        println!("Trains on TRAIN_FILE (lemma<TAB>msd<TAB>form lines), then reads");
        println!("lemma<TAB>msd queries from stdin and prints");
        println!("lemma<TAB>msd<TAB>prediction for each.");
        println!();
        println!("Options:");
        println!("  -h, --help  print this help");
        return;
    }

    let Some(train_path) = args.first() else {
        morfix_cli::fatal("missing TRAIN_FILE argument (see --help)");
    };

    let train = morfix_cli::load_corpus(Path::new(train_path))
        .unwrap_or_else(|e| morfix_cli::fatal(&e));
    let model = RuleModel::train(&train);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        let fields: Vec<&str> = query.split('\t').collect();
        if fields.len() != 2 {
            // exit skips Drop, so push buffered predictions out first
            let _ = out.flush();
            morfix_cli::fatal(&format!(
                "stdin line {}: expected lemma<TAB>msd, found {} fields",
                idx + 1,
                fields.len()
            ));
        }

        let guess = model.predict(fields[0], fields[1]);
        let _ = writeln!(out, "{}\t{}\t{}", fields[0], fields[1], guess);
    }
}
