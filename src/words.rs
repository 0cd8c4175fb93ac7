use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, WordRankError};

/// An immutable, shareable word list.
pub type Words = Arc<[String]>;

// Adjectives and surnames in the style of the moby/docker container name
// generator.
pub const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "affectionate", "agitated", "amazing", "angry",
    "awesome", "blissful", "boring", "brave", "clever", "cocky",
    "compassionate", "competent", "condescending", "confident", "cranky",
    "dazzling", "determined", "distracted", "dreamy", "eager", "ecstatic",
    "elastic", "elated", "elegant", "eloquent", "epic", "fervent", "festive",
    "flamboyant", "focused", "friendly", "frosty", "gallant", "gifted", "goofy",
    "gracious", "happy", "hardcore", "heuristic", "hopeful", "hungry",
    "infallible", "inspiring", "jolly", "jovial", "keen", "kind", "laughing",
    "loving", "lucid", "mystifying", "modest", "musing", "naughty", "nervous",
    "nifty", "nostalgic", "objective", "optimistic", "peaceful", "pedantic",
    "pensive", "practical", "priceless", "quirky", "quizzical", "relaxed",
    "reverent", "romantic", "sad", "serene", "sharp", "silly", "sleepy",
    "stoic", "stupefied", "suspicious", "tender", "thirsty", "trusting",
    "unruffled", "upbeat", "vibrant", "vigilant", "vigorous", "wizardly",
    "wonderful", "xenodochial", "youthful", "zealous", "zen",
];

pub const NAMES: &[&str] = &[
    "albattani", "allen", "almeida", "agnesi", "archimedes", "ardinghelli",
    "aryabhata", "austin", "babbage", "banach", "bardeen", "bartik", "bassi",
    "beaver", "bell", "benz", "bhabha", "bhaskara", "blackwell", "bohr",
    "booth", "borg", "bose", "boyd", "brahmagupta", "brattain", "brown",
    "carson", "chandrasekhar", "shannon", "clarke", "colden", "cori", "cray",
    "curran", "curie", "darwin", "davinci", "dijkstra", "dubinsky", "easley",
    "edison", "einstein", "elion", "engelbart", "euclid", "euler", "fermat",
    "fermi", "feynman", "franklin", "galileo", "gates", "goldberg", "goldstine",
    "goldwasser", "golick", "goodall", "haibt", "hamilton", "hawking",
    "heisenberg", "hermann", "heyrovsky", "hodgkin", "hoover", "hopper",
    "hugle", "hypatia", "jackson", "jang", "jennings", "jepsen", "johnson",
    "joliot", "jones", "kalam", "kare", "keller", "kepler", "khorana", "kilby",
    "kirch", "knuth", "kowalevski", "lalande", "lamarr", "lamport", "leakey",
    "leavitt", "lewin", "lichterman", "liskov", "lovelace", "lumiere",
    "mahavira", "mayer", "mccarthy", "mcclintock", "mclean", "mcnulty",
    "meitner", "meninsky", "mestorf", "minsky", "mirzakhani", "morse",
    "murdock", "neumann", "newton", "nightingale", "nobel", "noether",
    "northcutt", "noyce", "panini", "pare", "pasteur", "payne", "perlman",
    "pike", "poincare", "poitras", "ptolemy", "raman", "ramanujan", "ride",
    "montalcini", "ritchie", "roentgen", "rosalind", "saha", "sammet", "shaw",
    "shirley", "shockley", "sinoussi", "snyder", "spence", "stallman",
    "stonebraker", "swanson", "swartz", "swirles", "tesla", "thompson",
    "torvalds", "turing", "varahamihira", "visvesvaraya", "volhard", "wescoff",
    "wiles", "williams", "wilson", "wing", "wozniak", "wright", "yalow",
    "yonath",
];

pub fn adjectives() -> Words {
    from_strs(ADJECTIVES)
}

pub fn names() -> Words {
    from_strs(NAMES)
}

pub fn from_strs(words: &[&str]) -> Words {
    words.iter().map(|w| w.to_string()).collect()
}

/// Parse a word list: one word per line, surrounding whitespace trimmed,
/// blank lines and `#` comments skipped.
pub fn parse_words(content: &str) -> Words {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a word list file. An empty list is an error since no name space
/// can be built from it.
pub fn load_words(path: &Path) -> Result<Words> {
    let content = std::fs::read_to_string(path)?;
    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordRankError::InvalidArgument(format!(
            "no words in {}",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}
