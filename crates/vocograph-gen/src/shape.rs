//! Splitter-tree shape calculation.

/// Per-level splitter counts of the minimum-depth ternary distribution tree
/// for a given band count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeShape {
    /// Splitters per level, root first. The root level is always `[1]`.
    pub levels: Vec<usize>,
    /// Sum over all levels.
    pub total_splitters: usize,
}

impl TreeShape {
    /// Computes the shape whose leaf capacity covers `band_count`.
    ///
    /// Works leaf to root: while more than three taps remain, the next
    /// shallower level needs `ceil(remaining / 3)` splitters. A final root
    /// level of one splitter is always appended, so `band_count <= 3` yields
    /// a single-level tree.
    pub fn for_bands(band_count: usize) -> Self {
        let mut levels = Vec::new();
        let mut remaining = band_count;

        while remaining > 3 {
            let count = remaining.div_ceil(3);
            levels.push(count);
            remaining = count;
        }
        levels.push(1);
        levels.reverse();

        let total_splitters = levels.iter().sum();
        Self {
            levels,
            total_splitters,
        }
    }

    /// Number of levels, root included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Output sockets available at the leaf level.
    pub fn leaf_capacity(&self) -> usize {
        self.levels.last().copied().unwrap_or(0) * 3
    }
}
