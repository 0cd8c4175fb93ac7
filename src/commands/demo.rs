use wordrank::{Indexable, NameSpace, Result, UniqueRandom};

use crate::ui;

const SECTIONS: [(usize, &str); 4] = [
    (1, "Random names:"),
    (2, "Random names preceded by an adjective:"),
    (3, "Random names preceded by two adjectives:"),
    (4, "Random names preceded by three adjectives:"),
];

pub fn run(count: usize, seed: Option<usize>) -> Result<()> {
    for (members, title) in SECTIONS {
        let space = NameSpace::bundled(members)?;
        let unique = UniqueRandom::new(&space, seed)?;
        let shown = count.min(unique.len());

        println!("{}", ui::heading(title));
        for name in unique.slice(..shown as isize)? {
            println!("{}", ui::list_item(&name));
        }
        println!("{}", ui::remainder(unique.len() - shown));
        println!();
    }
    Ok(())
}
