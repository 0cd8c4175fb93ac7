use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indexable::{Indexable, Iter};
use crate::namespace::NameSpace;
use crate::permutation::CycleWalk;

/// Which walk over a name space to take.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every name in rank order, wrapping around forever
    Simple,
    /// Independent uniform draws, duplicates allowed
    Random,
    /// Every name exactly once in shuffled order, then stop
    #[default]
    Unique,
}

/// Endless walk over the space in rank order.
#[derive(Debug, Clone)]
pub struct Cyclic<'a> {
    space: &'a NameSpace,
    offset: usize,
}

impl<'a> Cyclic<'a> {
    pub fn new(space: &'a NameSpace) -> Self {
        Cyclic { space, offset: 0 }
    }

    pub fn starting_at(space: &'a NameSpace, offset: usize) -> Self {
        Cyclic {
            space,
            offset: offset % space.unique_count(),
        }
    }
}

impl<'a> Iterator for Cyclic<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.space.render(self.offset as isize);
        self.offset = (self.offset + 1) % self.space.unique_count();
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let len = self.space.unique_count();
        self.offset = ((self.offset as u128 + n as u128) % len as u128) as usize;
        self.next()
    }
}

/// Endless stream of uniformly drawn names.
#[derive(Debug, Clone)]
pub struct RandomNames<'a, R = StdRng> {
    space: &'a NameSpace,
    rng: R,
}

impl<'a> RandomNames<'a, StdRng> {
    pub fn new(space: &'a NameSpace) -> Self {
        Self::with_rng(space, StdRng::from_entropy())
    }

    /// Reproducible draws for a fixed seed.
    pub fn seeded(space: &'a NameSpace, seed: u64) -> Self {
        Self::with_rng(space, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> RandomNames<'a, R> {
    pub fn with_rng(space: &'a NameSpace, rng: R) -> Self {
        RandomNames { space, rng }
    }
}

impl<'a, R: Rng> Iterator for RandomNames<'a, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.rng.gen_range(0..self.space.unique_count());
        Some(self.space.render(index as isize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Every name of a space exactly once, in an order fixed by the seed.
///
/// Works both as a sequence (`at`, `slice`, `len`) and as a finite stream
/// (`items`, or `for name in &unique`).
#[derive(Debug, Clone)]
pub struct UniqueRandom<'a> {
    space: &'a NameSpace,
    perm: CycleWalk,
}

impl<'a> UniqueRandom<'a> {
    pub fn new(space: &'a NameSpace, seed: Option<usize>) -> Result<Self> {
        let perm = CycleWalk::new(space.unique_count(), seed)?;
        Ok(UniqueRandom { space, perm })
    }

    pub fn with_walk_limit(mut self, limit: u64) -> Self {
        self.perm = self.perm.with_walk_limit(limit);
        self
    }

    pub fn seed(&self) -> usize {
        self.perm.seed()
    }

}

impl<'a> Indexable for UniqueRandom<'a> {
    type Item = String;

    fn len(&self) -> usize {
        self.perm.len()
    }

    fn at(&self, index: isize) -> Result<String> {
        let rank = self.perm.at(index)?;
        self.space.render(rank as isize)
    }
}

impl<'a, 'b> IntoIterator for &'b UniqueRandom<'a> {
    type Item = Result<String>;
    type IntoIter = Iter<'b, UniqueRandom<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

impl<'a> fmt::Display for UniqueRandom<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slice(..2) {
            Ok(head) => {
                let preview: Vec<String> = head.iter().map(|name| format!("'{}'", name)).collect();
                write!(
                    f,
                    "<UniqueRandom: {}, ... ({} total)>",
                    preview.join(", "),
                    self.len()
                )
            }
            // a walk limit can fail even the first lookups
            Err(_) => write!(f, "<UniqueRandom: ... ({} total)>", self.len()),
        }
    }
}

/// A name stream picked by [`Strategy`]. Simple and random streams never
/// end; a unique stream ends after every name has been produced once.
#[derive(Debug, Clone)]
pub enum NameStream<'a> {
    Simple(Cyclic<'a>),
    Random(RandomNames<'a>),
    Unique { names: UniqueRandom<'a>, next: usize },
}

impl<'a> NameStream<'a> {
    /// `seed` fixes the shuffle of a unique stream and the draws of a
    /// random one. A simple stream ignores it.
    pub fn new(space: &'a NameSpace, strategy: Strategy, seed: Option<usize>) -> Result<Self> {
        let stream = match strategy {
            Strategy::Simple => NameStream::Simple(Cyclic::new(space)),
            Strategy::Random => NameStream::Random(match seed {
                Some(seed) => RandomNames::seeded(space, seed as u64),
                None => RandomNames::new(space),
            }),
            Strategy::Unique => NameStream::Unique {
                names: UniqueRandom::new(space, seed)?,
                next: 0,
            },
        };
        tracing::debug!(?strategy, ?seed, "name stream ready");
        Ok(stream)
    }

    /// Only a unique stream walks, so other strategies are unaffected.
    pub fn with_walk_limit(self, limit: u64) -> Self {
        match self {
            NameStream::Unique { names, next } => NameStream::Unique {
                names: names.with_walk_limit(limit),
                next,
            },
            other => other,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            NameStream::Simple(_) => Strategy::Simple,
            NameStream::Random(_) => Strategy::Random,
            NameStream::Unique { .. } => Strategy::Unique,
        }
    }
}

impl<'a> Iterator for NameStream<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            NameStream::Simple(cyclic) => cyclic.next(),
            NameStream::Random(random) => random.next(),
            NameStream::Unique { names, next } => {
                if *next >= names.len() {
                    return None;
                }
                let name = names.at(*next as isize);
                *next += 1;
                Some(name)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NameStream::Simple(cyclic) => cyclic.size_hint(),
            NameStream::Random(random) => random.size_hint(),
            NameStream::Unique { names, next } => {
                let remaining = names.len().saturating_sub(*next);
                (remaining, Some(remaining))
            }
        }
    }

    // Simple and unique streams can jump straight to a rank.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self {
            NameStream::Simple(cyclic) => cyclic.nth(n),
            NameStream::Random(random) => random.nth(n),
            NameStream::Unique { names, next } => {
                *next = next.saturating_add(n).min(names.len());
                self.next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::from_strs;
    use std::collections::HashSet;

    fn tiny(members: usize) -> NameSpace {
        NameSpace::new(
            members,
            "_",
            Some(from_strs(&["x", "y"])),
            Some(from_strs(&["a", "b", "c"])),
        )
        .unwrap()
    }

    fn check_shape(name: &str, members: usize) {
        assert!(name.chars().all(|c| c == '_' || c.is_ascii_lowercase()), "{}", name);
        let parts: Vec<&str> = name.split('_').collect();
        assert_eq!(parts.len(), members, "{}", name);
        assert!(parts.iter().all(|p| !p.is_empty()), "{}", name);
    }

    #[test]
    fn every_strategy_yields_well_formed_names() {
        for strategy in [Strategy::Simple, Strategy::Random, Strategy::Unique] {
            for members in 1..5 {
                let space = NameSpace::bundled(members).unwrap();
                let stream = NameStream::new(&space, strategy, None).unwrap();
                let sample: Vec<String> = stream.take(64).map(|n| n.unwrap()).collect();
                assert_eq!(sample.len(), 64);
                for name in &sample {
                    check_shape(name, members);
                }
            }
        }
    }

    #[test]
    fn cyclic_wraps_around() {
        let space = tiny(2);
        let names: Vec<String> = Cyclic::new(&space).take(8).map(|n| n.unwrap()).collect();
        assert_eq!(
            names,
            vec!["a_x", "a_y", "b_x", "b_y", "c_x", "c_y", "a_x", "a_y"]
        );
    }

    #[test]
    fn cyclic_can_start_anywhere() {
        let space = tiny(2);
        let mut cyclic = Cyclic::starting_at(&space, 10);
        assert_eq!(cyclic.next().unwrap().unwrap(), "c_x");
        assert_eq!(cyclic.nth(2).unwrap().unwrap(), "a_y");
    }

    #[test]
    fn seeded_random_draws_repeat() {
        let space = NameSpace::bundled(2).unwrap();
        let first: Vec<String> = RandomNames::seeded(&space, 7).take(20).map(|n| n.unwrap()).collect();
        let second: Vec<String> = RandomNames::seeded(&space, 7).take(20).map(|n| n.unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn random_draws_stay_in_space() {
        let space = tiny(3);
        let all: HashSet<String> = space.items().map(|n| n.unwrap()).collect();
        for name in RandomNames::new(&space).take(200) {
            assert!(all.contains(&name.unwrap()));
        }
    }

    #[test]
    fn unique_covers_space_exactly_once() {
        for members in 1..3 {
            let space = NameSpace::bundled(members).unwrap();
            let unique = UniqueRandom::new(&space, None).unwrap();

            let names: Vec<String> = unique.items().map(|n| n.unwrap()).collect();
            assert_eq!(names.len(), unique.len());
            assert_eq!(names.len(), space.unique_count());
            let distinct: HashSet<&String> = names.iter().collect();
            assert_eq!(distinct.len(), names.len());
            assert_eq!(names, unique.slice(..).unwrap());
        }
    }

    #[test]
    fn unique_random_access_matches_iteration() {
        let space = NameSpace::bundled(3).unwrap();
        let unique = UniqueRandom::new(&space, Some(12345)).unwrap();
        let head: Vec<String> = (&unique).into_iter().take(50).map(|n| n.unwrap()).collect();
        for (k, name) in head.iter().enumerate() {
            assert_eq!(&unique.at(k as isize).unwrap(), name);
            assert_eq!(&unique.at(k as isize).unwrap(), name);
        }
        assert_eq!(unique.slice(10..20).unwrap(), &head[10..20]);
        assert_eq!(
            unique.at(-1).unwrap(),
            unique.at(unique.len() as isize - 1).unwrap()
        );
    }

    #[test]
    fn same_seed_same_order() {
        let space = tiny(3);
        let a = UniqueRandom::new(&space, Some(4)).unwrap();
        let b = UniqueRandom::new(&space, Some(4)).unwrap();
        assert_eq!(a.slice(..).unwrap(), b.slice(..).unwrap());
        assert_eq!(a.seed(), 4);
    }

    #[test]
    fn unique_over_three_adjectives() {
        let space = NameSpace::new(
            3,
            "_",
            Some(from_strs(&["x"])),
            Some(from_strs(&["a", "b", "c"])),
        )
        .unwrap();
        let unique = UniqueRandom::new(&space, Some(1)).unwrap();
        // seed 1 over three ranks permutes to [1, 2, 0]
        assert_eq!(unique.slice(..).unwrap(), vec!["a_c_x", "b_c_x", "a_b_x"]);
    }

    #[test]
    fn unique_stream_ends() {
        let space = tiny(2);
        let stream = NameStream::new(&space, Strategy::Unique, Some(0)).unwrap();
        assert_eq!(stream.size_hint(), (6, Some(6)));
        let names: Vec<String> = stream.map(|n| n.unwrap()).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 6);
    }

    #[test]
    fn unique_stream_skips_by_rank() {
        let space = NameSpace::bundled(2).unwrap();
        let unique = UniqueRandom::new(&space, Some(99)).unwrap();
        let mut stream = NameStream::new(&space, Strategy::Unique, Some(99)).unwrap();
        assert_eq!(stream.nth(500).unwrap().unwrap(), unique.at(500).unwrap());
        assert_eq!(stream.next().unwrap().unwrap(), unique.at(501).unwrap());

        let mut tail = NameStream::new(&space, Strategy::Unique, Some(99)).unwrap();
        assert!(tail.nth(space.unique_count()).is_none());
    }

    #[test]
    fn walk_limit_reaches_unique_streams() {
        let letters = from_strs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let space = NameSpace::new(1, "_", Some(letters), None).unwrap();
        let stream = NameStream::new(&space, Strategy::Unique, Some(0))
            .unwrap()
            .with_walk_limit(5);
        let results: Vec<Result<String>> = stream.collect();
        assert_eq!(results.len(), 10);
        assert!(results.iter().any(|r| r.is_err()));
        assert_eq!(results[0].as_ref().unwrap(), "a");
    }

    #[test]
    fn strategy_round_trips_through_names() {
        let space = tiny(1);
        for strategy in [Strategy::Simple, Strategy::Random, Strategy::Unique] {
            let stream = NameStream::new(&space, strategy, Some(3)).unwrap();
            assert_eq!(stream.strategy(), strategy);
        }
        assert_eq!(Strategy::default(), Strategy::Unique);
    }

    #[test]
    fn display_without_preview_when_walks_fail() {
        let letters = from_strs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let space = NameSpace::new(1, "_", Some(letters), None).unwrap();
        // seed 6 starts on the two ranks whose walks take 22 steps
        let unique = UniqueRandom::new(&space, Some(6)).unwrap().with_walk_limit(5);
        assert!(unique.at(0).is_err());
        assert_eq!(unique.to_string(), "<UniqueRandom: ... (10 total)>");
    }

    #[test]
    fn display_previews_first_names() {
        let space = tiny(2);
        let unique = UniqueRandom::new(&space, Some(0)).unwrap();
        let first = unique.at(0).unwrap();
        let second = unique.at(1).unwrap();
        assert_eq!(
            unique.to_string(),
            format!("<UniqueRandom: '{}', '{}', ... (6 total)>", first, second)
        );
    }
}
