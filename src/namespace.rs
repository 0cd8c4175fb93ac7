use std::fmt;

use crate::combinations::Combinations;
use crate::error::{Result, WordRankError};
use crate::indexable::Indexable;
use crate::product::Product;
use crate::words::{self, Words};

pub const DEFAULT_SEPARATOR: &str = "_";

/// How ranks are decoded, chosen by the member count.
#[derive(Debug, Clone)]
enum Layout {
    /// `name`
    Single(Words),
    /// `adjective_name`
    Pair(Product<Words, Words>),
    /// `adjective_..._adjective_name`, adjectives in list order, never repeated
    Multi(Product<Combinations<Words>, Words>),
}

/// The virtual sequence of every name with a given number of members.
#[derive(Debug, Clone)]
pub struct NameSpace {
    members: usize,
    separator: String,
    layout: Layout,
}

impl NameSpace {
    /// Word lists left as `None` fall back to the bundled ones. Adjectives
    /// are ignored when `members == 1`.
    pub fn new(
        members: usize,
        separator: impl Into<String>,
        names: Option<Words>,
        adjectives: Option<Words>,
    ) -> Result<Self> {
        if members < 1 {
            return Err(WordRankError::InvalidArgument(
                "members must be an integer greater than 0".to_string(),
            ));
        }
        let names = names.unwrap_or_else(words::names);
        if names.is_empty() {
            return Err(WordRankError::InvalidArgument("empty names".to_string()));
        }

        let layout = if members == 1 {
            Layout::Single(names)
        } else {
            let adjectives = adjectives.unwrap_or_else(words::adjectives);
            if adjectives.is_empty() {
                return Err(WordRankError::InvalidArgument(
                    "empty adjectives".to_string(),
                ));
            }
            if members == 2 {
                Layout::Pair(Product::new(adjectives, names)?)
            } else {
                let combos = Combinations::new(adjectives, members - 1)?;
                Layout::Multi(Product::new(combos, names)?)
            }
        };

        let space = NameSpace {
            members,
            separator: separator.into(),
            layout,
        };
        tracing::debug!(members, unique = space.unique_count(), "name space ready");
        Ok(space)
    }

    /// Bundled word lists joined with `_`.
    pub fn bundled(members: usize) -> Result<Self> {
        Self::new(members, DEFAULT_SEPARATOR, None, None)
    }

    pub fn members(&self) -> usize {
        self.members
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn unique_count(&self) -> usize {
        match &self.layout {
            Layout::Single(names) => names.len(),
            Layout::Pair(product) => product.len(),
            Layout::Multi(product) => product.len(),
        }
    }

    pub fn render(&self, index: isize) -> Result<String> {
        match &self.layout {
            Layout::Single(names) => Indexable::at(names, index),
            Layout::Pair(product) => {
                let (adjective, name) = product.at(index)?;
                Ok([adjective, name].join(self.separator.as_str()))
            }
            Layout::Multi(product) => {
                let (mut parts, name) = product.at(index)?;
                parts.push(name);
                Ok(parts.join(self.separator.as_str()))
            }
        }
    }
}

impl Indexable for NameSpace {
    type Item = String;

    fn len(&self) -> usize {
        self.unique_count()
    }

    fn at(&self, index: isize) -> Result<String> {
        self.render(index)
    }
}

impl fmt::Display for NameSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<NameSpace: {} unique names>", self.unique_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::from_strs;

    #[test]
    fn single_member_is_the_name_list() {
        let space = NameSpace::new(1, "_", Some(from_strs(&["alice", "bob"])), None).unwrap();
        assert_eq!(space.unique_count(), 2);
        assert_eq!(space.render(0).unwrap(), "alice");
        assert_eq!(space.render(1).unwrap(), "bob");
    }

    #[test]
    fn two_members_pair_adjective_with_name() {
        let space = NameSpace::new(
            2,
            "_",
            Some(from_strs(&["fox"])),
            Some(from_strs(&["red", "blue"])),
        )
        .unwrap();
        assert_eq!(space.unique_count(), 2);
        assert_eq!(space.render(0).unwrap(), "red_fox");
        assert_eq!(space.render(1).unwrap(), "blue_fox");
    }

    #[test]
    fn three_members_use_adjective_pairs() {
        let space = NameSpace::new(
            3,
            "_",
            Some(from_strs(&["x"])),
            Some(from_strs(&["a", "b", "c"])),
        )
        .unwrap();
        assert_eq!(space.unique_count(), 3);
        let all: Vec<String> = space.items().map(|n| n.unwrap()).collect();
        assert_eq!(all, vec!["a_b_x", "a_c_x", "b_c_x"]);
    }

    #[test]
    fn custom_separator() {
        let space = NameSpace::new(
            3,
            "-",
            Some(from_strs(&["owl", "yak"])),
            Some(from_strs(&["calm", "keen", "wise"])),
        )
        .unwrap();
        assert_eq!(space.unique_count(), 6);
        assert_eq!(space.render(1).unwrap(), "calm-keen-yak");
        assert_eq!(space.render(-1).unwrap(), "keen-wise-yak");
        assert_eq!(space.separator(), "-");
    }

    #[test]
    fn bundled_sizes() {
        assert_eq!(NameSpace::bundled(1).unwrap().unique_count(), 160);
        assert_eq!(NameSpace::bundled(2).unwrap().unique_count(), 93 * 160);
        assert_eq!(NameSpace::bundled(3).unwrap().unique_count(), 4278 * 160);
        assert_eq!(NameSpace::bundled(4).unwrap().unique_count(), 129766 * 160);
    }

    #[test]
    fn bundled_names_have_member_count_parts() {
        for members in 1..=4 {
            let space = NameSpace::bundled(members).unwrap();
            for index in [0, 1, 97, -1] {
                let name = space.render(index).unwrap();
                let parts: Vec<&str> = name.split('_').collect();
                assert_eq!(parts.len(), members, "{}", name);
                assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_lowercase())));
            }
        }
    }

    #[test]
    fn adjectives_are_ignored_for_single_member() {
        let space = NameSpace::new(1, "_", None, Some(from_strs(&[]))).unwrap();
        assert_eq!(space.unique_count(), 160);
    }

    #[test]
    fn invalid_arguments() {
        assert!(matches!(
            NameSpace::bundled(0),
            Err(WordRankError::InvalidArgument(_))
        ));
        assert!(matches!(
            NameSpace::new(1, "_", Some(from_strs(&[])), None),
            Err(WordRankError::InvalidArgument(_))
        ));
        assert!(matches!(
            NameSpace::new(2, "_", None, Some(from_strs(&[]))),
            Err(WordRankError::InvalidArgument(_))
        ));
        assert!(matches!(
            NameSpace::new(5, "_", Some(from_strs(&["x"])), Some(from_strs(&["a", "b", "c"]))),
            Err(WordRankError::InvalidArgument(_))
        ));
    }

    #[test]
    fn members_close_to_adjective_count() {
        let adjectives: Words = (0..140).map(|i| format!("w{}", i)).collect::<Vec<_>>().into();
        let space = NameSpace::new(139, "_", Some(from_strs(&["x"])), Some(adjectives)).unwrap();
        assert_eq!(space.unique_count(), 140 * 139 / 2);

        let first = space.render(0).unwrap();
        assert!(first.starts_with("w0_w1_w2_"));
        assert!(first.ends_with("_w137_x"));
        assert_eq!(first.split('_').count(), 139);
        assert!(space.render(-1).unwrap().starts_with("w2_w3_"));
    }

    #[test]
    fn out_of_range_render() {
        let space = NameSpace::new(1, "_", Some(from_strs(&["alice", "bob"])), None).unwrap();
        assert!(matches!(
            space.render(2),
            Err(WordRankError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(space.render(-2).unwrap(), "alice");
    }

    #[test]
    fn concurrent_readers_agree() {
        let space = NameSpace::bundled(3).unwrap();
        let expected: Vec<String> = (0..64).map(|i| space.render(i * 1000).unwrap()).collect();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for (i, name) in expected.iter().enumerate() {
                        assert_eq!(&space.render(i as isize * 1000).unwrap(), name);
                    }
                });
            }
        });
    }

    #[test]
    fn display_reports_size() {
        let space = NameSpace::bundled(2).unwrap();
        assert_eq!(space.to_string(), "<NameSpace: 14880 unique names>");
    }
}
