use crate::error::Result;
use crate::indexable::{checked_len, normalize_index, Indexable};

/// Cartesian product of two sequences in row-major order: the first
/// sequence varies slowest.
#[derive(Debug, Clone)]
pub struct Product<A, B> {
    first: A,
    second: B,
    len: usize,
}

impl<A: Indexable, B: Indexable> Product<A, B> {
    pub fn new(first: A, second: B) -> Result<Self> {
        let len = checked_len(first.len() as u128 * second.len() as u128)?;
        Ok(Product { first, second, len })
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Indexable, B: Indexable> Indexable for Product<A, B> {
    type Item = (A::Item, B::Item);

    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: isize) -> Result<(A::Item, B::Item)> {
        let rank = normalize_index(index, self.len)?;
        let width = self.second.len();
        let row = self.first.at((rank / width) as isize)?;
        let col = self.second.at((rank % width) as isize)?;
        Ok((row, col))
    }
}
