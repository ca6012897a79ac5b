//! Random values for test fixtures: strings, numbers, identifiers, dates,
//! words, sentences and text files, drawn from an injectable uniform source.
//!
//! ```no_run
//! use randval::{RandomValueGenerator, ThreadRngSource, WordList};
//!
//! let mut generator = RandomValueGenerator::new(ThreadRngSource::new());
//! generator.set_word_supplier(Box::new(WordList::embedded()));
//!
//! let name = generator.get_string_from("abc", 8)?;
//! let sentence = generator.get_sentence(5, " ")?;
//! let id = generator.get_guid()?;
//! # Ok::<(), randval::GeneratorError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod sources;
pub mod storage;
pub mod words;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{CaseMode, RandomValueGenerator};
pub use sources::{SeededSource, ThreadRngSource, UniformSource};
pub use storage::{LocalTextFileStore, TextFileStore};
pub use words::{WordList, WordSupplier};
