use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};
use crate::generator::facade::{MAX_DRAW_ATTEMPTS, RandomValueGenerator};
use crate::generator::models::DEFAULT_SEPARATOR;
use crate::sources::UniformSource;
use chrono::Local;
use log::debug;

const TEXT_FILE_EXTENSION: &str = "txt";

/// Day-month-year, unpadded hour, then minutes, seconds and milliseconds.
const FILE_NAME_FORMAT: &str = "%d-%m-%Y-%-H-%M-%S-%3f";

fn candidate_name(stamp: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("{}.{}", stamp, TEXT_FILE_EXTENSION)
    } else {
        format!("{}-{}.{}", stamp, attempt, TEXT_FILE_EXTENSION)
    }
}

impl<S: UniformSource> RandomValueGenerator<S> {
    /// Writes a sentence of `number_of_words` space separated words to a new
    /// `.txt` file in `directory` and returns its path.
    pub fn get_text_file<P: AsRef<Path>>(&self, number_of_words: i32, directory: P) -> Result<PathBuf> {
        self.get_text_file_with_separator(number_of_words, DEFAULT_SEPARATOR, directory)
    }

    /// The file is named after the current local time. When that name is
    /// taken a numeric suffix is added; existing files are never touched.
    pub fn get_text_file_with_separator<P: AsRef<Path>>(
        &self,
        number_of_words: i32,
        separator: &str,
        directory: P,
    ) -> Result<PathBuf> {
        let directory = directory.as_ref();

        if number_of_words < 0 {
            return Err(GeneratorError::invalid(
                "The number of words cannot be negative!",
            ));
        }
        if directory.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(GeneratorError::invalid(
                "The directory cannot be empty or whitespace!",
            ));
        }
        if !self.store.directory_exists(directory) {
            return Err(GeneratorError::DirectoryNotFound(directory.to_path_buf()));
        }

        let contents = self.get_sentence(number_of_words, separator)?;
        let stamp = Local::now().format(FILE_NAME_FORMAT).to_string();

        for attempt in 0..MAX_DRAW_ATTEMPTS {
            let path = directory.join(candidate_name(&stamp, attempt));
            match self.store.create_new(&path, &contents) {
                Ok(()) => {
                    debug!("Wrote {} words to {}", number_of_words, path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("{} already exists, trying next name", path.display());
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(GeneratorError::DrawsExhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }
}
