// Bias vote, training, and prediction facade

use morfix_align::heuristic_align;
use morfix_core::Bias;
use morfix_core::symbols::GAP;
use morfix_core::text::{leading_run, reverse, trailing_run};

use crate::apply::apply_best_rules;
use crate::corpus::Corpus;
use crate::extract::extract_rules;
use crate::store::RuleStore;

/// A trained inflection model: the corpus bias plus one rule store per
/// direction.
///
/// The bias travels inside the model so training and prediction can never
/// disagree about string orientation.
#[derive(Debug, Clone)]
pub struct RuleModel {
    bias: Bias,
    prefix: RuleStore,
    suffix: RuleStore,
}

impl RuleModel {
    /// Train a model on a corpus: vote on the bias, then extract and count
    /// rules from every entry, reversing the strings first when the corpus
    /// is prefixing.
    pub fn train(corpus: &Corpus) -> RuleModel {
        let bias = detect_bias(corpus);
        let mut prefix = RuleStore::new();
        let mut suffix = RuleStore::new();

        for entry in &corpus.entries {
            let (prules, srules) = match bias {
                Bias::Suffixing => extract_rules(&entry.lemma, &entry.form),
                Bias::Prefixing => {
                    extract_rules(&reverse(&entry.lemma), &reverse(&entry.form))
                }
            };
            prefix.record(&entry.msd, prules);
            suffix.record(&entry.msd, srules);
        }

        RuleModel { bias, prefix, suffix }
    }

    /// Predict the inflected form of `lemma` under `msd`.
    ///
    /// Under a prefixing bias the lemma is reversed on the way in and the
    /// prediction reversed back on the way out. An MSD never seen in
    /// training returns the lemma unchanged.
    pub fn predict(&self, lemma: &str, msd: &str) -> String {
        match self.bias {
            Bias::Suffixing => apply_best_rules(lemma, msd, &self.prefix, &self.suffix),
            Bias::Prefixing => {
                let reversed = reverse(lemma);
                reverse(&apply_best_rules(&reversed, msd, &self.prefix, &self.suffix))
            }
        }
    }

    pub fn bias(&self) -> Bias {
        self.bias
    }

    pub fn prefix_rules(&self) -> &RuleStore {
        &self.prefix
    }

    pub fn suffix_rules(&self) -> &RuleStore {
        &self.suffix
    }
}

/// Vote on the corpus-wide affixing direction.
///
/// Every lemma/form pair is heuristically aligned; both sides' leading gap
/// runs count toward prefixing, trailing runs toward suffixing. Pairs whose
/// alignment contains a space or hyphen are left out of the vote, multiword
/// and compound entries say little about affix position. Prefixing must win
/// strictly; ties stay suffixing.
pub fn detect_bias(corpus: &Corpus) -> Bias {
    let mut prefix_votes = 0usize;
    let mut suffix_votes = 0usize;

    for entry in &corpus.entries {
        let lemma: Vec<char> = entry.lemma.chars().collect();
        let form: Vec<char> = entry.form.chars().collect();
        let (aligned_lemma, aligned_form) = heuristic_align(&lemma, &form);
        if contains_separator(&aligned_lemma) || contains_separator(&aligned_form) {
            continue;
        }
        prefix_votes += leading_run(&aligned_lemma, GAP) + leading_run(&aligned_form, GAP);
        suffix_votes += trailing_run(&aligned_lemma, GAP) + trailing_run(&aligned_form, GAP);
    }

    if prefix_votes > suffix_votes {
        Bias::Prefixing
    } else {
        Bias::Suffixing
    }
}

fn contains_separator(s: &[char]) -> bool {
    s.iter().any(|&c| c == ' ' || c == '-')
}
