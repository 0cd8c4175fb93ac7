use wordrank::config::Config;
use wordrank::{Indexable, Result, UniqueRandom};

pub fn run(config: &Config, index: isize) -> Result<()> {
    let space = config.name_space()?;
    let mut unique = UniqueRandom::new(&space, config.seed)?;
    if let Some(limit) = config.walk_limit {
        unique = unique.with_walk_limit(limit);
    }
    println!("{}", unique.at(index)?);
    Ok(())
}
