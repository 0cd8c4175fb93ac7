use wordrank::config::Config;
use wordrank::Result;

pub fn run(config: &Config) -> Result<()> {
    let space = config.name_space()?;
    println!("{}", space.unique_count());
    Ok(())
}
