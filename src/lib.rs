//! Human-readable random identifiers such as `festive_hopper`, drawn from a
//! virtual space of adjective/name combinations that is never materialized.

pub mod binomial;
pub mod combinations;
pub mod config;
pub mod error;
pub mod generators;
pub mod indexable;
pub mod namespace;
pub mod permutation;
pub mod product;
pub mod words;

pub use combinations::Combinations;
pub use error::{Result, WordRankError};
pub use generators::{Cyclic, NameStream, RandomNames, Strategy, UniqueRandom};
pub use indexable::Indexable;
pub use namespace::NameSpace;
pub use permutation::CycleWalk;
pub use product::Product;
