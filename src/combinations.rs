use std::sync::Arc;

use crate::binomial::BinomialTable;
use crate::error::{Result, WordRankError};
use crate::indexable::{checked_len, normalize_index, Indexable};

/// All `r`-element combinations of a sequence, addressed by rank.
///
/// Ranks follow lexicographic order over source positions: the first
/// position varies slowest and every combination keeps source order. No
/// combination is stored; `at` unranks on demand.
#[derive(Debug, Clone)]
pub struct Combinations<S> {
    seq: S,
    r: usize,
    len: usize,
    table: Arc<BinomialTable>,
}

impl<S: Indexable> Combinations<S> {
    pub fn new(seq: S, r: usize) -> Result<Self> {
        let n = seq.len();
        if r > n {
            return Err(WordRankError::InvalidArgument(format!(
                "arity {} exceeds sequence length {}",
                r, n
            )));
        }
        let table = Arc::new(BinomialTable::new(n, r));
        Self::with_table(seq, r, table)
    }

    /// Build on a caller-supplied table, which must cover `C(len, r)`.
    pub fn with_table(seq: S, r: usize, table: Arc<BinomialTable>) -> Result<Self> {
        let n = seq.len();
        if r > n {
            return Err(WordRankError::InvalidArgument(format!(
                "arity {} exceeds sequence length {}",
                r, n
            )));
        }
        let count = table.get(n, r).ok_or_else(|| {
            WordRankError::InvalidArgument(format!(
                "binomial table does not cover C({}, {})",
                n, r
            ))
        })?;
        // a saturated coefficient is already too large for checked_len
        let len = checked_len(count)?;
        tracing::debug!(n, r, len, table_entries = table.entries(), "combinations ready");
        Ok(Combinations { seq, r, len, table })
    }

    pub fn arity(&self) -> usize {
        self.r
    }

    pub fn source(&self) -> &S {
        &self.seq
    }

    fn binom(&self, n: usize, k: usize) -> u128 {
        // Lookups stay inside the (len, r) rectangle checked at construction,
        // and none exceeds C(len, r), so no saturated entry is ever read.
        self.table.get(n, k).unwrap_or(0)
    }

    fn unrank(&self, rank: usize) -> Result<Vec<S::Item>> {
        let n = self.seq.len();
        let mut rank = rank as u128;
        let mut picked = Vec::with_capacity(self.r);
        let mut start = 0;

        for k in (1..=self.r).rev() {
            let remaining = n - start;
            let total = self.binom(remaining, k);

            // Smallest cut `m` such that the combinations skipped by jumping
            // over the first `remaining - m` positions do not exceed the rank.
            let mut m = k;
            let mut skipped = total - self.binom(m, k);
            while rank < skipped {
                m += 1;
                skipped = total - self.binom(m, k);
            }
            rank -= skipped;

            let pos = start + (remaining - m);
            picked.push(self.seq.at(pos as isize)?);
            start = pos + 1;
        }

        Ok(picked)
    }
}

impl<S: Indexable> Indexable for Combinations<S> {
    type Item = Vec<S::Item>;

    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: isize) -> Result<Vec<S::Item>> {
        let rank = normalize_index(index, self.len)?;
        self.unrank(rank)
    }
}
