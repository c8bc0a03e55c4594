/// One row of the Levenshtein matrix between a dictionary prefix and the query.
///
/// `cells[i]` is the distance from the current prefix to the first `i`
/// characters of the query, so `cells[0]` is the prefix length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DistanceRow {
    cells: Vec<usize>,
}

impl DistanceRow {
    /// Row of the empty prefix held by the root: `[0, 1, .., query.len()]`.
    pub(crate) fn origin(query: &[char]) -> DistanceRow {
        DistanceRow { cells: (0..=query.len()).collect() }
    }

    /// Row for the prefix extended by `letter`.
    pub(crate) fn advance(&self, query: &[char], letter: char) -> DistanceRow {
        let mut cells = Vec::with_capacity(self.cells.len());
        cells.push(self.cells[0] + 1);
        for (i, &target) in query.iter().enumerate() {
            let i = i + 1;
            let cell = if target == letter {
                self.cells[i - 1]
            } else {
                let substitution = self.cells[i - 1] + 1;
                let deletion = self.cells[i] + 1;
                let insertion = cells[i - 1] + 1;
                substitution.min(deletion).min(insertion)
            };
            cells.push(cell);
        }
        DistanceRow { cells }
    }

    /// Distance between the prefix and the whole query.
    pub(crate) fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// True when no extension of the prefix can come back within `max_distance`.
    pub(crate) fn exceeds(&self, max_distance: usize) -> bool {
        self.cells.iter().all(|&cell| cell > max_distance)
    }
}
