use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};
use crate::generator::{DEFAULT_SEPARATOR, RandomValueGenerator};
use crate::sources::{SeededSource, ThreadRngSource, UniformSource};
use crate::words::WordList;
use log::info;
use serde::{Deserialize, Serialize};

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Settings used to assemble a generator.
///
/// Loaded from YAML, e.g.
///
/// ```yaml
/// seed: 42
/// word_list: /usr/share/dict/words
/// separator: ", "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Makes every draw reproducible. Thread-local randomness when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Dictionary file with one word per line. The embedded list when absent.
    #[serde(default)]
    pub word_list: Option<PathBuf>,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            word_list: None,
            separator: default_separator(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| GeneratorError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Values given explicitly (command line or environment) win over the file.
    pub fn with_overrides(mut self, seed: Option<u64>, word_list: Option<PathBuf>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if word_list.is_some() {
            self.word_list = word_list;
        }
        self
    }

    pub fn word_list(&self) -> Result<WordList> {
        let list = match &self.word_list {
            Some(path) => WordList::from_file(path)?,
            None => WordList::embedded(),
        };

        Ok(match self.seed {
            Some(seed) => list.with_seed(seed),
            None => list,
        })
    }

    pub fn source(&self) -> Box<dyn UniformSource> {
        match self.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadRngSource::new()),
        }
    }

    /// A generator with its word supplier already set.
    pub fn build(&self) -> Result<RandomValueGenerator<Box<dyn UniformSource>>> {
        let mut generator = RandomValueGenerator::new(self.source());
        generator.set_word_supplier(Box::new(self.word_list()?));

        info!(
            "Generator ready (seed: {}, words: {})",
            self.seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
            self.word_list
                .as_ref()
                .map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
        );
        Ok(generator)
    }
}
