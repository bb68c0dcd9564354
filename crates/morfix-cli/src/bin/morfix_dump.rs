// morfix-dump: print a trained rule model as JSON.
//
// Trains a model on the given file and writes the detected bias plus every
// stored rule record to stdout. Records are sorted so two runs over the
// same data produce byte-identical output.
//
// Usage:
//   morfix-dump TRAIN_FILE

use std::path::Path;

use serde::Serialize;

use morfix_core::Rule;
use morfix_rules::{RuleModel, RuleStore};

#[derive(Serialize)]
struct ModelDump<'a> {
    bias: String,
    prefix: Vec<RuleRecord<'a>>,
    suffix: Vec<RuleRecord<'a>>,
}

#[derive(Serialize)]
struct RuleRecord<'a> {
    msd: &'a str,
    from: &'a str,
    to: &'a str,
    count: u32,
}

fn sorted_records(store: &RuleStore) -> Vec<RuleRecord<'_>> {
    let mut flat: Vec<(&str, &Rule, u32)> = Vec::new();
    for (msd, rules) in store.iter() {
        for (rule, &count) in rules {
            flat.push((msd.as_str(), rule, count));
        }
    }
    flat.sort();
    flat.into_iter()
        .map(|(msd, rule, count)| RuleRecord {
            msd,
            from: &rule.from,
            to: &rule.to,
            count,
        })
        .collect()
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if morfix_cli::wants_help(&args) {
        println!("morfix-dump: print a trained rule model as JSON.");
        println!();
        println!("Usage: morfix-dump TRAIN_FILE");
        println!();
        println!("Trains on TRAIN_FILE (lemma<TAB>msd<TAB>form lines) and prints");
        println!("the detected bias and all rule records, sorted for stable");
        println!("output. The model is rebuilt from training data on every run;");
        println!("the dump is for inspection, not for loading back.");
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

    let dump = ModelDump {
        bias: model.bias().to_string(),
        prefix: sorted_records(model.prefix_rules()),
        suffix: sorted_records(model.suffix_rules()),
    };

    let json = serde_json::to_string_pretty(&dump)
        .unwrap_or_else(|e| morfix_cli::fatal(&format!("serialization failed: {e}")));
    println!("{json}");
}
