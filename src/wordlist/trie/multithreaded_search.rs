use log::debug;
use rayon::prelude::*;

use crate::wordlist::trie::row::DistanceRow;
use crate::wordlist::trie::search::{find_distances, Candidate};
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Same results, in the same order, as [`Trie::search_with_distance`], with
    /// each subtree under the root walked on the rayon pool.
    pub fn search_with_distance_multithreaded(&self, query: &str, max_distance: isize) -> Vec<Candidate<'_>> {
        let max_distance = match usize::try_from(max_distance) {
            Ok(d) => d,
            Err(_) => {
                debug!("negative distance bound {}, nothing to search", max_distance);
                return vec![];
            }
        };
        let query: Vec<char> = query.chars().collect();
        let origin = DistanceRow::origin(&query);

        let mut results = vec![];
        if let Some(word) = self.root.terminal() {
            if origin.distance() <= max_distance {
                results.push(Candidate::new(word, origin.distance()));
            }
        }
        if origin.exceeds(max_distance) {
            return results;
        }

        let subtrees: Vec<_> = self.root.children().collect();
        let found: Vec<Vec<Candidate>> = subtrees
            .par_iter()
            .map(|&(letter, child)| {
                let mut found = vec![];
                find_distances(child, &query, origin.advance(&query, letter), max_distance, &mut found);
                found
            })
            .collect();
        results.extend(found.into_iter().flatten());
        results
    }

    pub fn search_multithreaded(&self, query: &str, max_distance: isize) -> Vec<String> {
        self.search_with_distance_multithreaded(query, max_distance)
            .into_iter()
            .map(|x| x.word.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn matches_sequential_search() {
        let words = vec!["", "a", "cat", "cats", "bat", "hat", "rain", "rainy", "brain", "train", "zebra"];
        let trie = Trie::build(words);
        for query in ["", "cet", "rain", "bran", "zzz"] {
            for k in -1..5 {
                assert_eq!(trie.search_with_distance_multithreaded(query, k),
                           trie.search_with_distance(query, k),
                           "query {:?} within {}", query, k);
            }
        }
    }

    #[test]
    fn one_substitution_away() {
        let trie = Trie::build(vec!["cat", "cats", "bat", "hat"]);
        assert_eq!(trie.search_multithreaded("cet", 1), vec!["bat", "cat", "hat"]);
    }
}
