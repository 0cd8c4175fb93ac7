/// Pascal's triangle, precomputed for `0 <= n <= max_n` and `0 <= k <= max_k`.
///
/// The table is bounded by the dimensions it was built with, so lookups
/// never grow it. Share one table between several `Combinations` by wrapping
/// it in an `Arc`.
///
/// Entries too large for `u128` saturate at `u128::MAX`. Every entry below
/// that is exact, since Pascal's rule only sums smaller values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinomialTable {
    max_n: usize,
    max_k: usize,
    values: Vec<u128>,
}

impl BinomialTable {
    pub fn new(max_n: usize, max_k: usize) -> Self {
        let width = max_k + 1;
        let mut values = vec![0u128; (max_n + 1) * width];
        for n in 0..=max_n {
            values[n * width] = 1;
            for k in 1..=max_k.min(n) {
                let above = (n - 1) * width;
                values[n * width + k] = values[above + k - 1].saturating_add(values[above + k]);
            }
        }
        BinomialTable {
            max_n,
            max_k,
            values,
        }
    }

    /// `C(n, k)`, or `None` when `(n, k)` lies outside the table.
    pub fn get(&self, n: usize, k: usize) -> Option<u128> {
        if n > self.max_n || k > self.max_k {
            return None;
        }
        Some(self.values[n * (self.max_k + 1) + k])
    }

    /// Number of coefficients held.
    pub fn entries(&self) -> usize {
        self.values.len()
    }
}
