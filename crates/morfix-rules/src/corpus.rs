// Tab-separated training and evaluation data

use crate::CorpusError;

/// One data line: lemma, morphosyntactic descriptor, inflected form.
///
/// Evaluation files share the layout; there the third field is the
/// reference form a prediction is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub lemma: String,
    pub msd: String,
    pub form: String,
}

/// A parsed data file.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub entries: Vec<Entry>,
}

impl Corpus {
    /// Parse `lemma<TAB>msd<TAB>form` lines.
    ///
    /// Lines are trimmed of surrounding whitespace first, which also covers
    /// carriage returns in CRLF files; lines that are empty after trimming
    /// are skipped. Anything else must have exactly three tab-separated
    /// fields. Line numbers in errors are 1-based.
    pub fn parse(text: &str) -> Result<Corpus, CorpusError> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return Err(CorpusError::FieldCount { line: idx + 1, found: fields.len() });
            }
            entries.push(Entry {
                lemma: fields[0].to_string(),
                msd: fields[1].to_string(),
                form: fields[2].to_string(),
            });
        }
        Ok(Corpus { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples() {
        let corpus = Corpus::parse("walk\tV;PST\twalked\ntie\tV;PST\ttied\n").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.entries[0],
            Entry {
                lemma: "walk".to_string(),
                msd: "V;PST".to_string(),
                form: "walked".to_string(),
            }
        );
        assert_eq!(corpus.entries[1].form, "tied");
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let corpus = Corpus::parse("\nwalk\tV;PST\twalked\n   \n\n").unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn handles_crlf_endings() {
        let corpus = Corpus::parse("walk\tV;PST\twalked\r\ntie\tV;PST\ttied\r\n").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries[1].lemma, "tie");
        assert_eq!(corpus.entries[1].form, "tied");
    }

    #[test]
    fn reports_field_count_with_line_number() {
        let err = Corpus::parse("walk\tV;PST\twalked\nwalk\twalked\n").unwrap_err();
        match err {
            CorpusError::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
        }
    }

    #[test]
    fn too_many_fields_is_also_an_error() {
        let err = Corpus::parse("a\tb\tc\td\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected 3 tab-separated fields, found 4");
    }

    #[test]
    fn empty_input_is_an_empty_corpus() {
        let corpus = Corpus::parse("").unwrap();
        assert!(corpus.is_empty());
    }
}
