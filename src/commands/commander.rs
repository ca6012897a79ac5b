use crate::commands::models::{Command, GeneratedValue};
use crate::error::Result;
use crate::generator::{DEFAULT_ALPHABET, RandomValueGenerator};
use crate::sources::UniformSource;
use log::debug;

/// Runs command-line requests against a generator.
pub struct Commander<S: UniformSource> {
    generator: RandomValueGenerator<S>,
    separator: String,
}

impl<S: UniformSource> Commander<S> {
    /// `separator` is used by sentence and text file commands that do not name one.
    pub fn new(generator: RandomValueGenerator<S>, separator: impl Into<String>) -> Self {
        Self {
            generator,
            separator: separator.into(),
        }
    }

    pub fn execute(&self, command: &Command) -> Result<GeneratedValue> {
        debug!("Executing {:?}", command);
        let generator = &self.generator;

        let value = match command {
            Command::String {
                length,
                alphabet,
                max_length,
            } => {
                let alphabet = alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET);
                let text = match max_length {
                    Some(max_length) => generator.get_string_between(alphabet, *length, *max_length)?,
                    None => generator.get_string_from(alphabet, *length)?,
                };
                GeneratedValue::Text(text)
            }
            Command::Int { min, max } => GeneratedValue::Integer(generator.get_int(*min, *max)?.into()),
            Command::Positive { max } => GeneratedValue::Integer(generator.get_positive(*max)?.into()),
            Command::Negative { max } => GeneratedValue::Integer(generator.get_negative(*max)?.into()),
            Command::Decimal { min, max, decimals } => {
                GeneratedValue::Text(generator.get_decimal(*min, *max, *decimals)?.to_string())
            }
            Command::Digit => GeneratedValue::Integer(generator.get_digit().into()),
            Command::Different { number } => {
                GeneratedValue::Integer(generator.get_different_number(*number)?.into())
            }
            Command::Guid => GeneratedValue::Text(generator.get_guid()?.to_string()),
            Command::Letter { alphabet } => {
                let letter = match alphabet {
                    Some(alphabet) => generator.get_letter_from(alphabet)?,
                    None => generator.get_letter(),
                };
                GeneratedValue::Text(letter.to_string())
            }
            Command::Boolean => GeneratedValue::Boolean(generator.get_boolean()),
            Command::Word { case } => GeneratedValue::Text(generator.get_word_with_case(*case)?),
            Command::Words { count, case } => {
                GeneratedValue::List(generator.get_words_with_case(*count, *case)?)
            }
            Command::Sentence {
                count,
                separator,
                case,
            } => {
                let separator = separator.as_deref().unwrap_or(&self.separator);
                GeneratedValue::Text(generator.get_sentence_with_case(*count, separator, *case)?)
            }
            Command::Email => GeneratedValue::Text(generator.get_email_address()),
            Command::NullOrBlank => {
                GeneratedValue::OptionalText(generator.get_null_or_empty_or_whitespace())
            }
            Command::Past { reference } => {
                let date = match reference {
                    Some(reference) => generator.get_past_date_time_offset_from(*reference)?,
                    None => generator.get_past_date_time_offset()?,
                };
                GeneratedValue::Text(date.to_rfc3339())
            }
            Command::Future { reference } => {
                let date = match reference {
                    Some(reference) => generator.get_future_date_time_offset_from(*reference)?,
                    None => generator.get_future_date_time_offset()?,
                };
                GeneratedValue::Text(date.to_rfc3339())
            }
            Command::TextFile {
                count,
                directory,
                separator,
            } => {
                let separator = separator.as_deref().unwrap_or(&self.separator);
                GeneratedValue::Path(generator.get_text_file_with_separator(
                    *count, separator, directory,
                )?)
            }
        };

        Ok(value)
    }
}
