use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use derive_new::new;
use log::{debug, info};
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Result, SuggestError};
use crate::wordlist::index::Index;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::Trie;

/// A dictionary loaded with usage counts, searchable by edit distance.
pub struct Wordlist {
    trie: Trie,
    freqs: HashMap<String, usize>,
}

/// Layout of a dictionary file: one entry per line.
///
/// Without a delimiter columns are split on whitespace. A missing frequency
/// column counts the word once.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default, setter(strip_option))]
    freq_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<(&'a str, usize)> {
        let columns: Vec<&str> = match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(delimiter) => line.split(delimiter).map(|x| x.trim()).collect(),
        };
        let word_idx = self.word_column.unwrap_or(0);
        let freq_idx = self.freq_column.unwrap_or(1);

        let word = columns.get(word_idx)
            .ok_or_else(|| SuggestError::parse(line_no, format!("missing word column {}", word_idx)))?;
        let freq = match columns.get(freq_idx) {
            None => 1,
            Some(raw) => raw.parse::<usize>()
                .map_err(|_| SuggestError::parse(line_no, format!("bad frequency {:?}", raw)))?,
        };
        Ok((word, freq))
    }
}

/// A ranked match.
#[derive(new, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
    pub freq: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new(), freqs: HashMap::new() }
    }

    pub fn from_file<P: AsRef<Path>>(filename: P, format: FileFormat) -> Result<Wordlist> {
        let filename = filename.as_ref();
        info!("Reading words from {:?}", filename);
        Self::from_reader(File::open(filename)?, format)
    }

    pub fn from_reader<R: Read>(reader: R, format: FileFormat) -> Result<Wordlist> {
        let start = Instant::now();
        let mut wordlist = Wordlist::new();
        let mut count: usize = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (word, freq) = format.parse_line(&line, idx + 1)?;
            wordlist.add_with_freq(word, freq);
            count += 1;
            if count % 100000 == 0 {
                debug!("{} {}", count, normalize(word));
            }
        }

        info!("Read {} entries ({} distinct words) in {:.3}s",
              count, wordlist.len(), start.elapsed().as_secs_f64());
        Ok(wordlist)
    }

    /// Adds `word` after normalizing it; repeated words accumulate frequency.
    pub fn add_with_freq(&mut self, word: &str, freq: usize) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        self.trie.add(&word);
        *self.freqs.entry(word).or_insert(0) += freq;
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&normalize(word))
    }

    pub fn freq(&self, word: &str) -> Option<usize> {
        self.freqs.get(&normalize(word)).copied()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Words within `max_distance` of `query`, most frequent first.
    pub fn suggest(&self, query: &str, max_distance: isize, config: &SearchConfig) -> Vec<Suggestion> {
        let start = Instant::now();
        let query = normalize(query);
        let candidates = if config.parallel {
            self.trie.search_with_distance_multithreaded(&query, max_distance)
        } else {
            self.trie.search_with_distance(&query, max_distance)
        };
        debug!("{} candidates for {:?} in {:.3}s",
               candidates.len(), query, start.elapsed().as_secs_f64());

        let mut suggestions: Vec<Suggestion> = candidates.into_iter()
            .map(|x| {
                let freq = self.freqs.get(x.word).copied().unwrap_or(0);
                Suggestion::new(x.word.to_string(), x.distance, freq)
            })
            .collect();
        suggestions.sort_by(|a, b| {
            (Reverse(a.freq), a.distance, &a.word).cmp(&(Reverse(b.freq), b.distance, &b.word))
        });
        if let Some(max_results) = config.max_results {
            suggestions.truncate(max_results);
        }
        suggestions
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::new()
    }
}
