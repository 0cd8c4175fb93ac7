use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordrank::config::Config;
use wordrank::Strategy;

#[derive(Parser)]
#[command(name = "wordrank", about = "Human-readable random names like festive_hopper")]
pub struct Cli {
    /// Config file (defaults to ./wordrank.toml when it exists)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log construction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shaping the name space; unset options fall back to the config file.
#[derive(Args, Debug, Default)]
pub struct SpaceArgs {
    /// Words per name: 1 is a bare name, 2 adds an adjective, and so on
    #[arg(short, long)]
    pub members: Option<usize>,
    /// Text placed between words
    #[arg(short, long)]
    pub separator: Option<String>,
    /// Adjective list, one word per line
    #[arg(long)]
    pub adjectives: Option<PathBuf>,
    /// Name list, one word per line
    #[arg(long)]
    pub names: Option<PathBuf>,
}

impl SpaceArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(members) = self.members {
            config.members = members;
        }
        if let Some(ref separator) = self.separator {
            config.separator = separator.clone();
        }
        if let Some(ref path) = self.adjectives {
            config.adjectives_file = Some(path.clone());
        }
        if let Some(ref path) = self.names {
            config.names_file = Some(path.clone());
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print names from the space
    Generate {
        #[command(flatten)]
        space: SpaceArgs,
        /// How many names to print (a unique walk stops early when the space runs out)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// How to walk the space
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
        /// Seed for the unique shuffle or the random draws
        #[arg(long)]
        seed: Option<usize>,
        /// Skip this many names first (random access for simple and unique walks)
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Give up on a unique name after this many residue steps
        #[arg(long)]
        walk_limit: Option<u64>,
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Print how many unique names the space holds
    Count {
        #[command(flatten)]
        space: SpaceArgs,
    },

    /// Print the name at one position of a seeded unique walk
    Get {
        /// Position in the walk; negative positions count from the end
        #[arg(allow_negative_numbers = true)]
        index: isize,
        #[command(flatten)]
        space: SpaceArgs,
        /// Seed for the unique shuffle
        #[arg(long)]
        seed: Option<usize>,
    },

    /// Show a few unique names for one to four members
    Demo {
        /// Names per section
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,
        /// Seed for every section's shuffle
        #[arg(long)]
        seed: Option<usize>,
    },

    /// Write a default config file
    InitConfig {
        /// Where to write it (defaults to ./wordrank.toml)
        path: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}
