// Exact-match accuracy counters

use crate::corpus::Entry;
use crate::model::RuleModel;

/// Running exact-match tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
        self.total += 1;
    }

    /// Fraction of correct predictions; 0.0 when nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Score a model against reference entries by exact string match.
pub fn evaluate(model: &RuleModel, entries: &[Entry]) -> Evaluation {
    let mut result = Evaluation::new();
    for entry in entries {
        let guess = model.predict(&entry.lemma, &entry.msd);
        result.record(guess == entry.form);
    }
    result
}
