use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::generator::models::{
    DEFAULT_ALPHABET, DEFAULT_DIGITS, DEFAULT_LETTERS, DEFAULT_SEPARATOR, DEFAULT_SYMBOLS,
};
use crate::sources::{ThreadRngSource, UniformSource};
use crate::storage::{LocalTextFileStore, TextFileStore};
use crate::words::WordSupplier;

/// Upper bound for every redraw loop.
pub const MAX_DRAW_ATTEMPTS: usize = 1024;

/// Facade over a uniform source and a word supplier that produces random
/// fixture values: strings, numbers, identifiers, dates, words and text files.
///
/// The operations are spread over several `impl` blocks, one per value family.
/// Every operation validates its arguments before drawing anything.
pub struct RandomValueGenerator<S: UniformSource = ThreadRngSource> {
    pub(crate) source: S,
    pub(crate) word_supplier: Option<Box<dyn WordSupplier>>,
    pub(crate) store: Box<dyn TextFileStore>,
}

impl Default for RandomValueGenerator<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource::new())
    }
}

impl<S: UniformSource> RandomValueGenerator<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, Box::new(LocalTextFileStore::new()))
    }

    pub fn with_store(source: S, store: Box<dyn TextFileStore>) -> Self {
        Self {
            source,
            word_supplier: None,
            store,
        }
    }

    /// Required before any word, sentence or text file operation.
    pub fn set_word_supplier(&mut self, supplier: Box<dyn WordSupplier>) {
        self.word_supplier = Some(supplier);
    }

    pub fn default_alphabet(&self) -> &'static str {
        DEFAULT_ALPHABET
    }

    pub fn default_letters(&self) -> &'static str {
        DEFAULT_LETTERS
    }

    pub fn default_digits(&self) -> &'static str {
        DEFAULT_DIGITS
    }

    pub fn default_symbols(&self) -> &'static str {
        DEFAULT_SYMBOLS
    }

    pub fn default_separator(&self) -> &'static str {
        DEFAULT_SEPARATOR
    }

    pub(crate) fn word_supplier(&self) -> Result<&dyn WordSupplier> {
        self.word_supplier
            .as_deref()
            .ok_or(GeneratorError::WordSupplierNotSet)
    }

    /// Every integer draw goes through here. A source that answers outside
    /// `[min, max_exclusive)` breaks the `UniformSource` contract.
    pub(crate) fn draw(&self, min: i32, max_exclusive: i32) -> i32 {
        let value = self.source.next_int(min, max_exclusive);
        debug_assert!(
            value == min || (min..max_exclusive).contains(&value),
            "uniform source drew {} outside [{}, {})",
            value,
            min,
            max_exclusive
        );
        value
    }

    /// Uniform pick from a non-empty slice.
    pub(crate) fn pick<'a, T>(&self, items: &'a [T]) -> &'a T {
        &items[self.draw(0, items.len() as i32) as usize]
    }

    pub(crate) fn draw_string(&self, chars: &[char], length: usize) -> String {
        (0..length).map(|_| *self.pick(chars)).collect()
    }
}

impl RandomValueGenerator<Box<dyn UniformSource>> {
    /// Source, word list and separator handling as described by `config`.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.build()
    }
}
