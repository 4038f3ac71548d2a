//! Precomputed substring lookups over a base number.

/// Substrings of a digit string, indexed by starting position.
///
/// For a base number of length `L`, position `i` holds the substrings
/// `base[i..i+1], base[i..i+2], ...` in increasing length order. The
/// wordification engine uses this to enumerate candidate spans anchored at
/// a gap's start. O(L²) space, which is fine at telephone-number scale.
#[derive(Debug, Clone, Default)]
pub struct SubstringIndex {
    starts: Vec<Vec<String>>,
}

impl SubstringIndex {
    /// Build the index. An empty input yields an empty index.
    pub fn new(base: &str) -> Self {
        let chars: Vec<char> = base.chars().collect();
        let starts = (0..chars.len())
            .map(|i| {
                (i + 1..=chars.len())
                    .map(|j| chars[i..j].iter().collect())
                    .collect()
            })
            .collect();
        Self { starts }
    }

    /// Length of the indexed string.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether the indexed string was empty.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// All substrings starting at `i`, shortest first.
    pub fn substrings_at(&self, i: usize) -> &[String] {
        &self.starts[i]
    }

    /// Substrings starting at `i` with length at most `max_len`,
    /// shortest first.
    pub fn prefixes(&self, i: usize, max_len: usize) -> &[String] {
        let all = self.substrings_at(i);
        &all[..max_len.min(all.len())]
    }
}
