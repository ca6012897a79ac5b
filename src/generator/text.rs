use crate::error::{GeneratorError, Result};
use crate::generator::facade::RandomValueGenerator;
use crate::generator::models::{CaseMode, DEFAULT_ALPHABET, DEFAULT_DIGITS, DEFAULT_LETTERS, WHITESPACE};
use crate::sources::UniformSource;

const EMAIL_PART_LENGTH: usize = 20;
const MIN_TLD_LENGTH: i32 = 1;
const MAX_TLD_LENGTH: i32 = 3;

pub(crate) fn validate_alphabet(alphabet: &str) -> Result<()> {
    if alphabet.trim().is_empty() {
        return Err(GeneratorError::invalid(
            "The alphabet cannot be empty or whitespace!",
        ));
    }
    Ok(())
}

fn validate_word_count(number_of_words: i32) -> Result<()> {
    if number_of_words < 0 {
        return Err(GeneratorError::invalid(
            "The number of words cannot be negative!",
        ));
    }
    Ok(())
}

impl<S: UniformSource> RandomValueGenerator<S> {
    /// `length` characters drawn from the default alphabet.
    pub fn get_string(&self, length: i32) -> Result<String> {
        self.get_string_from(DEFAULT_ALPHABET, length)
    }

    pub fn get_string_from(&self, alphabet: &str, length: i32) -> Result<String> {
        if length < 0 {
            return Err(GeneratorError::invalid(
                "The string length cannot be negative!",
            ));
        }
        validate_alphabet(alphabet)?;

        self.get_string_between(alphabet, length, length)
    }

    /// Draws the length from `[min_length, max_length)` (exactly `min_length`
    /// when both are equal), then that many characters from `alphabet`.
    pub fn get_string_between(
        &self,
        alphabet: &str,
        min_length: i32,
        max_length: i32,
    ) -> Result<String> {
        if min_length < 0 {
            return Err(GeneratorError::invalid(
                "The string minimum length cannot be negative!",
            ));
        }
        if max_length < 0 {
            return Err(GeneratorError::invalid(
                "The string maximum length cannot be negative!",
            ));
        }
        if max_length < min_length {
            return Err(GeneratorError::invalid(
                "Maximum length is less than minimum length!",
            ));
        }
        validate_alphabet(alphabet)?;

        let length = self.get_int(min_length, max_length)?;
        let chars: Vec<char> = alphabet.chars().collect();
        Ok(self.draw_string(&chars, length as usize))
    }

    pub fn get_word(&self) -> Result<String> {
        Ok(self.word_supplier()?.next_word())
    }

    pub fn get_word_with_case(&self, mode: CaseMode) -> Result<String> {
        Ok(mode.apply(self.get_word()?))
    }

    pub fn get_upper_case_word(&self) -> Result<String> {
        self.get_word_with_case(CaseMode::UpperCase)
    }

    pub fn get_lower_case_word(&self) -> Result<String> {
        self.get_word_with_case(CaseMode::LowerCase)
    }

    pub fn get_words(&self, number_of_words: i32) -> Result<Vec<String>> {
        self.get_words_with_case(number_of_words, CaseMode::Default)
    }

    /// One supplier call per word, returned in call order. Words may repeat.
    pub fn get_words_with_case(&self, number_of_words: i32, mode: CaseMode) -> Result<Vec<String>> {
        validate_word_count(number_of_words)?;

        (0..number_of_words)
            .map(|_| self.get_word_with_case(mode))
            .collect()
    }

    pub fn get_sentence(&self, number_of_words: i32, separator: &str) -> Result<String> {
        self.get_sentence_with_case(number_of_words, separator, CaseMode::Default)
    }

    pub fn get_sentence_with_case(
        &self,
        number_of_words: i32,
        separator: &str,
        mode: CaseMode,
    ) -> Result<String> {
        validate_word_count(number_of_words)?;

        Ok(self.get_words_with_case(number_of_words, mode)?.join(separator))
    }

    /// One of `None`, an empty string or a whitespace-only string, with equal odds.
    pub fn get_null_or_empty_or_whitespace(&self) -> Option<String> {
        let candidates = [None, Some(String::new()), Some(WHITESPACE.to_string())];
        self.pick(&candidates).clone()
    }

    /// `<letter><20 alphanumerics>@<letter><20 alphanumerics>.<1 to 3 letters>`
    pub fn get_email_address(&self) -> String {
        let letters: Vec<char> = DEFAULT_LETTERS.chars().collect();
        let alphanumerics: Vec<char> = DEFAULT_LETTERS.chars().chain(DEFAULT_DIGITS.chars()).collect();

        let mut address = String::with_capacity(2 * (EMAIL_PART_LENGTH + 1) + 5);
        address.push(self.get_letter());
        address.push_str(&self.draw_string(&alphanumerics, EMAIL_PART_LENGTH));
        address.push('@');
        address.push(self.get_letter());
        address.push_str(&self.draw_string(&alphanumerics, EMAIL_PART_LENGTH));
        address.push('.');

        let tld_length = self.draw(MIN_TLD_LENGTH, MAX_TLD_LENGTH + 1) as usize;
        address.push_str(&self.draw_string(&letters, tld_length));
        address
    }
}
