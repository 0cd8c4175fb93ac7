use rand::Rng;

use crate::error::{Result, WordRankError};
use crate::indexable::{normalize_index, Indexable};

/// Primes for the quadratic residue map, ascending. Each satisfies
/// `p % 4 == 3` and sits just above the size of one bundled name space.
pub const PRIMES: [u64; 6] = [
    179,        // 1 member
    16091,      // 2 members
    740099,     // 3 members
    22449671,   // 4 members
    505114223,  // 5 members
    8991032159, // 6 members
];

/// Seeded pseudorandom permutation of `[0, size)` computed one index at a
/// time by cycle-walking a quadratic residue map modulo a prime.
///
/// With seed 0, ranks 0 and 1 are fixed points. This is not a secure cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleWalk {
    size: usize,
    seed: usize,
    prime: u64,
    walk_limit: Option<u64>,
}

impl CycleWalk {
    /// `seed` of `None` picks one uniformly from `[0, size)`.
    pub fn new(size: usize, seed: Option<usize>) -> Result<Self> {
        if size == 0 {
            return Err(WordRankError::InvalidArgument(
                "size must be a positive integer".to_string(),
            ));
        }
        let prime = PRIMES
            .iter()
            .copied()
            .find(|&p| p as u128 > size as u128)
            .ok_or(WordRankError::Overflow { size: size as u128 })?;
        let seed = match seed {
            Some(s) => s % size,
            None => rand::thread_rng().gen_range(0..size),
        };
        tracing::debug!(size, seed, prime, "cycle walk ready");
        Ok(CycleWalk {
            size,
            seed,
            prime,
            walk_limit: None,
        })
    }

    /// Fail `at` with `WalkLimitExceeded` once a walk takes more than
    /// `limit` residue steps. Without a limit walks always terminate, but
    /// the worst case is bounded only by the cycle length.
    pub fn with_walk_limit(mut self, limit: u64) -> Self {
        self.walk_limit = Some(limit);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn seed(&self) -> usize {
        self.seed
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Longest walk over every rank. Linear in `size`.
    pub fn max_walk_len(&self) -> u64 {
        (0..self.size)
            .map(|rank| self.walk(rank, None).1)
            .max()
            .unwrap_or(0)
    }

    fn residue(&self, x: u64) -> u64 {
        let p = self.prime as u128;
        let x = x as u128;
        let sq = (x * x % p) as u64;
        if 2 * x < p {
            sq
        } else {
            self.prime - sq
        }
    }

    /// Returns the permuted value and the number of residue steps taken.
    /// A walk that passes `limit` stops early and reports `limit + 1` steps.
    fn walk(&self, rank: usize, limit: Option<u64>) -> (usize, u64) {
        let size = self.size as u64;
        // The start must lie inside [0, size) so its own cycle is guaranteed
        // to contain an in-range value.
        let start = ((self.seed as u128 + rank as u128) % size as u128) as u64;
        let mut value = self.residue(start);
        let mut steps = 1;
        while value >= size {
            if limit.is_some_and(|limit| steps >= limit) {
                return (value as usize, steps + 1);
            }
            value = self.residue(value);
            steps += 1;
        }
        (value as usize, steps)
    }
}

impl Indexable for CycleWalk {
    type Item = usize;

    fn len(&self) -> usize {
        self.size
    }

    fn at(&self, index: isize) -> Result<usize> {
        let rank = normalize_index(index, self.size)?;
        let (value, steps) = self.walk(rank, self.walk_limit);
        if let Some(limit) = self.walk_limit {
            if steps > limit {
                tracing::warn!(rank, limit, "cycle walk exceeded its step limit");
                return Err(WordRankError::WalkLimitExceeded { index: rank, limit });
            }
        }
        Ok(value)
    }
}
