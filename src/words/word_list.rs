use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{GeneratorError, Result};
use crate::words::traits::WordSupplier;
use log::debug;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

const WORDLIST: &str = include_str!("../assets/words.txt");

static EMBEDDED_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| parse_words(WORDLIST).collect());

/// Non-blank lines that are not `#` comments, trimmed.
fn parse_words(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

/// In-memory word corpus; every call picks one word uniformly.
pub struct WordList {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(GeneratorError::invalid("The word list cannot be empty!"));
        }

        Ok(Self {
            words,
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        })
    }

    /// The word list compiled into the crate.
    pub fn embedded() -> Self {
        Self {
            words: EMBEDDED_WORDS.iter().map(|w| w.to_string()).collect(),
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Reads a newline separated dictionary. Blank lines and `#` comments are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let words: Vec<String> = parse_words(&content).map(str::to_string).collect();
        debug!("Loaded {} words from {}", words.len(), path.display());

        Self::new(words).map_err(|_| {
            GeneratorError::invalid(format!("No words found in {}", path.display()))
        })
    }

    /// Makes the selection order reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            words: self.words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSupplier for WordList {
    fn next_word(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.words
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_default()
    }
}
