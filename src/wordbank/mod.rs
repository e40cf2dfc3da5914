//! Word categories for hangman
//!
//! Provides embedded category word lists compiled into the binary and
//! uniform random word selection over a chosen category.

mod embedded;

pub use embedded::{ANIMALS, COUNTRIES, FRUITS, VEGETABLES};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A named, read-only word category
#[derive(Debug, Clone, Copy)]
pub struct Category {
    name: &'static str,
    words: &'static [&'static str],
}

/// All categories, in menu order
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "fruits",
        words: FRUITS,
    },
    Category {
        name: "animals",
        words: ANIMALS,
    },
    Category {
        name: "countries",
        words: COUNTRIES,
    },
    Category {
        name: "vegetables",
        words: VEGETABLES,
    },
];

impl Category {
    /// Lowercase category name
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The category's candidate words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Draw a word uniformly at random from this category
    ///
    /// # Panics
    /// Will not panic - the embedded lists are non-empty and hold only
    /// lowercase ASCII words, which `Word::new` always accepts.
    #[must_use]
    pub fn random_word(&self, rng: &mut impl Rng) -> Word {
        let text = self
            .words
            .choose(rng)
            .expect("embedded category lists are non-empty");
        Word::new(*text).expect("embedded category lists hold valid words")
    }
}

/// Find a category by its lowercase name
#[must_use]
pub fn find(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn categories_in_declaration_order() {
        let names: Vec<&str> = CATEGORIES.iter().map(Category::name).collect();
        assert_eq!(names, vec!["fruits", "animals", "countries", "vegetables"]);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(FRUITS.len(), 20);
        assert_eq!(ANIMALS.len(), 20);
        assert_eq!(COUNTRIES.len(), 20);
        assert_eq!(VEGETABLES.len(), 18);
    }

    #[test]
    fn all_words_are_valid() {
        // Every embedded word must be non-empty lowercase ASCII
        for category in CATEGORIES {
            for &word in category.words() {
                assert!(!word.is_empty(), "empty word in '{}'", category.name());
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "word '{word}' in '{}' contains non-lowercase chars",
                    category.name()
                );
            }
        }
    }

    #[test]
    fn random_word_comes_from_the_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let fruits = find("fruits").unwrap();

        for _ in 0..20 {
            let word = fruits.random_word(&mut rng);
            assert!(fruits.words().contains(&word.text()));
        }
    }

    #[test]
    fn random_word_deterministic_under_seeded_rng() {
        let animals = find("animals").unwrap();

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(animals.random_word(&mut rng1), animals.random_word(&mut rng2));
    }

    #[test]
    fn find_unknown_category() {
        assert!(find("minerals").is_none());
    }
}
