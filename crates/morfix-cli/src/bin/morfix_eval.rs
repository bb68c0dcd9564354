// morfix-eval: train and score the inflection baseline per language.
//
// Scans a data directory for LANG.trn training files, trains a model for
// each language, scores it against the matching LANG.dev (or LANG.tst)
// file, and prints one accuracy line per language plus the average.
//
// Usage:
//   morfix-eval [-p DATA_DIR] [OPTIONS]
//
// Options:
//   -p, --path DIR  Data directory to scan (default: data/)
//   -t, --test      Evaluate on LANG.tst instead of LANG.dev
//   -o, --output    Write LANG.out files with predictions
//   -h, --help      Print help

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use morfix_rules::{Evaluation, RuleModel};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = morfix_cli::parse_data_path(&args);

    if morfix_cli::wants_help(&args) {
        println!("morfix-eval: train and score the inflection baseline per language.");
        println!();
        println!("Usage: morfix-eval [-p DATA_DIR] [OPTIONS]");
        println!();
        println!("Scans DATA_DIR for LANG.trn files, trains a rule model per");
        println!("language, scores it against LANG.dev, and prints per-language");
        println!("accuracies followed by the average.");
        println!();
        println!("Options:");
        println!("  -p, --path DIR  data directory to scan (default: data/)");
        println!("  -t, --test      evaluate on LANG.tst instead of LANG.dev");
        println!("  -o, --output    write LANG.out files with predictions");
        println!("  -h, --help      print this help");
        return;
    }

    let use_test = args.iter().any(|a| a == "-t" || a == "--test");
    let write_output = args.iter().any(|a| a == "-o" || a == "--output");
    let eval_ext = if use_test { "tst" } else { "dev" };

    let data_dir = PathBuf::from(data_path.unwrap_or_else(|| "data/".to_string()));

    let mut languages = discover_languages(&data_dir).unwrap_or_else(|e| morfix_cli::fatal(&e));
    languages.sort();
    if languages.is_empty() {
        morfix_cli::fatal(&format!(
            "no training files (*.trn) found in {}",
            data_dir.display()
        ));
    }

    let mut accuracy_sum = 0.0;
    let mut scored = 0usize;

    for lang in &languages {
        let train_path = data_dir.join(format!("{lang}.trn"));
        let eval_path = data_dir.join(format!("{lang}.{eval_ext}"));
        if !eval_path.is_file() {
            eprintln!("skipping {lang}: {} not found", eval_path.display());
            continue;
        }

        let train = morfix_cli::load_corpus(&train_path).unwrap_or_else(|e| morfix_cli::fatal(&e));
        let eval_data = morfix_cli::load_corpus(&eval_path).unwrap_or_else(|e| morfix_cli::fatal(&e));

        let model = RuleModel::train(&train);

        let mut out_file = if write_output {
            let out_path = data_dir.join(format!("{lang}.out"));
            let file = fs::File::create(&out_path).unwrap_or_else(|e| {
                morfix_cli::fatal(&format!("failed to create {}: {}", out_path.display(), e))
            });
            Some(io::BufWriter::new(file))
        } else {
            None
        };

        let mut tally = Evaluation::new();
        for entry in &eval_data.entries {
            let guess = model.predict(&entry.lemma, &entry.msd);
            tally.record(guess == entry.form);
            if let Some(out) = out_file.as_mut() {
                let _ = writeln!(out, "{}\t{}\t{}", entry.lemma, entry.msd, guess);
            }
        }

        println!("{lang}: {:.5}", tally.accuracy());
        accuracy_sum += tally.accuracy();
        scored += 1;
    }

    if scored == 0 {
        morfix_cli::fatal("no language had evaluation data");
    }
    println!("Average accuracy {:.5}", accuracy_sum / scored as f64);
}

/// Languages with a LANG.trn file in the data directory.
fn discover_languages(dir: &Path) -> Result<Vec<String>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;

    let mut languages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("trn") || !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            languages.push(stem.to_string());
        }
    }
    Ok(languages)
}
