use rand::seq::SliceRandom;
use rand::Rng;

/// Keyword pool for upbeat search phrases.
pub const FUN_KEYWORDS: &[&str] = &[
    "fun",
    "lighthearted",
    "comedy",
    "silly",
    "quirky",
    "whimsical",
    "playful",
    "happy",
    "imaginative",
    "adventure",
    "mystery",
    "fantasy",
    "space",
    "ocean",
];

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 3;

/// Builds randomized search phrases: two distinct keywords from the pool,
/// then a short random suffix so repeated fetches never send the same query.
#[derive(Debug, Clone)]
pub struct QueryGenerator {
    keywords: &'static [&'static str],
}

impl QueryGenerator {
    pub fn new() -> Self {
        Self {
            keywords: FUN_KEYWORDS,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // choose_multiple samples without replacement, so the pair is distinct
        let picked: Vec<&str> = self
            .keywords
            .choose_multiple(rng, 2)
            .copied()
            .collect();

        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();

        format!("{} {} {}", picked[0], picked[1], suffix)
    }
}

impl Default for QueryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
