use wordrank::config::Config;
use wordrank::{NameStream, Result};

pub fn run(config: &Config, offset: usize, json: bool) -> Result<()> {
    let space = config.name_space()?;
    let mut stream = NameStream::new(&space, config.strategy, config.seed)?;
    if let Some(limit) = config.walk_limit {
        stream = stream.with_walk_limit(limit);
    }
    tracing::info!(
        members = config.members,
        strategy = ?config.strategy,
        unique = space.unique_count(),
        "generating {} names",
        config.count
    );

    let names = stream
        .skip(offset)
        .take(config.count)
        .collect::<Result<Vec<String>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in &names {
            println!("{}", name);
        }
    }
    Ok(())
}
