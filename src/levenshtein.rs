use std::cmp::min;

/// Full-matrix Levenshtein distance between `source` and `target`,
/// counted in `char`s.
///
/// The trie search never builds this matrix; this is the direct
/// computation its results are checked against.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let mut m = vec![vec![0; source.len() + 1]; target.len() + 1];

    for j in 1..=target.len() {
        m[j][0] = j;
    }
    for i in 1..=source.len() {
        m[0][i] = i;
    }

    for j in 1..=target.len() {
        for i in 1..=source.len() {
            m[j][i] = if target[j - 1] == source[i - 1] {
                m[j - 1][i - 1]
            } else {
                min(min(m[j - 1][i - 1] + 1, m[j - 1][i] + 1), m[j][i - 1] + 1)
            };
        }
    }

    m[target.len()][source.len()]
}
