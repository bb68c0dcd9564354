// Full pipeline test: load a training file → RuleModel → re-predict the training entries
use std::fs;

use morfix_rules::{Corpus, RuleModel};

fn main() {
    let train_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/eng.trn".to_string());

    let text = fs::read_to_string(&train_path).expect("Failed to read training file");
    let corpus = Corpus::parse(&text).expect("Failed to parse training file");
    println!("Loaded {}: {} entries\n", train_path, corpus.len());

    let model = RuleModel::train(&corpus);
    println!(
        "Bias: {}, MSDs with suffix rules: {}, with prefix rules: {}",
        model.bias(),
        model.suffix_rules().msd_count(),
        model.prefix_rules().msd_count(),
    );

    let mut correct = 0;
    for entry in corpus.entries.iter().take(20) {
        let guess = model.predict(&entry.lemma, &entry.msd);
        let mark = if guess == entry.form { "=" } else { "!" };
        if guess == entry.form {
            correct += 1;
        }
        println!(
            "{} {:15} {:30} gold={:15} guess={}",
            mark, entry.lemma, entry.msd, entry.form, guess
        );
    }
    println!("\n{}/{} of the first entries reproduced", correct, 20.min(corpus.len()));
}
