//! Pruned edit-distance search over the trie.
//!
//! Each visited node gets one [`DistanceRow`] derived from its parent's row and
//! the edge character, so words sharing a prefix share the work for it. A
//! subtree is skipped as soon as every cell of its row is over the bound,
//! since appending characters never lowers the best reachable distance.

use derive_new::new;
use log::debug;

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::row::DistanceRow;
use crate::wordlist::trie::trie::Trie;

/// A dictionary word within the bound, with its distance to the query.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub distance: usize,
}

impl Trie {
    /// Every indexed word within `max_distance` edits of `query`, in trie order.
    ///
    /// A negative bound matches nothing.
    pub fn search(&self, query: &str, max_distance: isize) -> Vec<String> {
        self.search_with_distance(query, max_distance)
            .into_iter()
            .map(|x| x.word.to_string())
            .collect()
    }

    pub fn search_with_distance(&self, query: &str, max_distance: isize) -> Vec<Candidate<'_>> {
        let max_distance = match usize::try_from(max_distance) {
            Ok(d) => d,
            Err(_) => {
                debug!("negative distance bound {}, nothing to search", max_distance);
                return vec![];
            }
        };
        let query: Vec<char> = query.chars().collect();
        let mut results = vec![];
        let rows = find_distances(&self.root, &query, DistanceRow::origin(&query), max_distance, &mut results);
        debug!("{} rows computed, {} matches within {}", rows, results.len(), max_distance);
        results
    }
}

/// Walks the trie below `node`, whose row is `row`, pushing every word within
/// `max_distance` onto `results` in edge order. Returns the number of rows
/// computed below `node`.
///
/// Each frame holds a node's remaining children and its row, so memory grows
/// with the depth of the walk and not with the size of the dictionary.
pub(crate) fn find_distances<'a>(node: &'a TrieNode,
                                 query: &[char],
                                 row: DistanceRow,
                                 max_distance: usize,
                                 results: &mut Vec<Candidate<'a>>) -> usize {
    let mut rows = 0;
    let mut stack = vec![];
    if visit(node, &row, max_distance, results) {
        stack.push((node.children(), row));
    }
    while let Some((children, row)) = stack.last_mut() {
        match children.next() {
            None => {
                stack.pop();
            }
            Some((letter, child)) => {
                let next = row.advance(query, letter);
                rows += 1;
                if visit(child, &next, max_distance, results) {
                    stack.push((child.children(), next));
                }
            }
        }
    }
    rows
}

/// Records `node`'s word if it is close enough; false when its subtree is pruned.
fn visit<'a>(node: &'a TrieNode,
             row: &DistanceRow,
             max_distance: usize,
             results: &mut Vec<Candidate<'a>>) -> bool {
    if let Some(word) = node.terminal() {
        let distance = row.distance();
        if distance <= max_distance {
            results.push(Candidate::new(word, distance));
        }
    }
    !row.exceeds(max_distance)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::levenshtein::levenshtein;
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::row::DistanceRow;
    use crate::wordlist::trie::search::find_distances;
    use crate::wordlist::trie::trie::Trie;

    fn set(words: Vec<String>) -> BTreeSet<String> {
        words.into_iter().collect()
    }

    fn expected(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|x| x.to_string()).collect()
    }

    fn random_word(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
    }

    #[test]
    fn one_substitution_away() {
        let trie = Trie::build(vec!["cat", "cats", "bat", "hat"]);
        assert_eq!(set(trie.search("cet", 1)), expected(&["cat", "bat", "hat"]));
    }

    #[test]
    fn one_insertion_away() {
        let trie = Trie::build(vec!["rain"]);
        assert_eq!(trie.search("rainy", 1), vec!["rain"]);
    }

    #[test]
    fn reports_distances() {
        let trie = Trie::build(vec!["cat", "cats", "bat", "hat"]);
        let found = trie.search_with_distance("cet", 2);
        let cats = found.iter().find(|x| x.word == "cats").unwrap();
        assert_eq!(cats.distance, 2);
        assert!(found.iter().filter(|x| x.word != "cats").all(|x| x.distance == 1));
    }

    #[test]
    fn exact_at_distance_zero() {
        let trie = Trie::build(vec!["hello", "help", "goodbye", "good"]);
        assert_eq!(trie.search("help", 0), vec!["help"]);
        assert!(trie.search("hel", 0).is_empty());
        assert!(trie.search("helps", 0).is_empty());
    }

    #[test]
    fn negative_bound_matches_nothing() {
        let trie = Trie::build(vec!["a", "ab", ""]);
        assert!(trie.search("a", -1).is_empty());
        assert!(trie.search("", -3).is_empty());
    }

    #[test]
    fn empty_query_matches_short_words() {
        let words = vec!["a", "ab", "abc", "b", "bcd", "xyzw"];
        let trie = Trie::build(words.clone());
        for k in 0..5 {
            let short: BTreeSet<String> = words.iter()
                .filter(|x| x.chars().count() <= k)
                .map(|x| x.to_string())
                .collect();
            assert_eq!(set(trie.search("", k as isize)), short);
        }
    }

    #[test]
    fn results_follow_trie_order() {
        let trie = Trie::build(vec!["hat", "cat", "bat", "cats"]);
        assert_eq!(trie.search("cet", 2), vec!["bat", "cat", "cats", "hat"]);
    }

    #[test]
    fn empty_trie_finds_nothing() {
        assert!(Trie::new().search("anything", 10).is_empty());
    }

    #[test]
    fn duplicate_insertion_does_not_change_results() {
        let once = Trie::build(vec!["cat", "cart", "care"]);
        let twice = Trie::build(vec!["cat", "cart", "care", "cart", "cat"]);
        for query in ["car", "cat", "", "scare"] {
            for k in 0..4 {
                assert_eq!(once.search(query, k), twice.search(query, k));
            }
        }
    }

    #[test]
    fn agrees_with_full_matrix() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet: Vec<char> = "abcé".chars().collect();
        let words: Vec<String> = (0..300).map(|_| random_word(&mut rng, &alphabet, 7)).collect();
        let trie = Trie::build(words.iter().map(|x| x.as_str()));

        for _ in 0..40 {
            let query = random_word(&mut rng, &alphabet, 6);
            for k in 0..4 {
                let found = trie.search_with_distance(&query, k);
                let direct: BTreeSet<&str> = trie.words()
                    .filter(|w| levenshtein(&query, w) <= k as usize)
                    .collect();
                assert_eq!(found.iter().map(|x| x.word).collect::<BTreeSet<_>>(), direct,
                           "query {:?} within {}", query, k);
                for candidate in found {
                    assert_eq!(candidate.distance, levenshtein(&query, candidate.word));
                }
            }
        }
    }

    #[test]
    fn larger_bounds_find_more() {
        let mut rng = StdRng::seed_from_u64(11);
        let alphabet: Vec<char> = "abcd".chars().collect();
        let words: Vec<String> = (0..200).map(|_| random_word(&mut rng, &alphabet, 6)).collect();
        let trie = Trie::build(words.iter().map(|x| x.as_str()));

        for _ in 0..20 {
            let query = random_word(&mut rng, &alphabet, 6);
            let mut previous = BTreeSet::new();
            for k in 0..6 {
                let current = set(trie.search(&query, k));
                assert!(previous.is_subset(&current));
                previous = current;
            }
        }
    }

    #[test]
    fn prunes_branches_past_the_bound() {
        let deep = format!("b{}", "x".repeat(1000));
        let trie = Trie::build(vec!["a", "ab", deep.as_str()]);
        let query: Vec<char> = "a".chars().collect();

        let mut results = vec![];
        let rows = find_distances(&trie.root, &query, DistanceRow::origin(&query), 1, &mut results);
        assert_eq!(results.iter().map(|x| x.word).collect::<Vec<_>>(), vec!["a", "ab"]);
        // a, ab, b and bx; bx is over the bound so nothing below it is computed
        assert_eq!(rows, 4);

        let mut all = vec![];
        let unbounded = find_distances(&trie.root, &query, DistanceRow::origin(&query), 2000, &mut all);
        assert_eq!(unbounded, 1003);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn handles_very_long_words() {
        let long = "a".repeat(50_000);
        let trie = Trie::build(vec![long.as_str(), "a"]);
        assert!(trie.contains(&long));
        assert!(!trie.contains(&long[1..]));
        assert_eq!(trie.search("a", 100_000), vec!["a".to_string(), long.clone()]);
        assert_eq!(trie.search("a", 1), vec!["a"]);
        assert_eq!(trie.search_multithreaded("aa", 100_000).len(), 2);
    }
}
