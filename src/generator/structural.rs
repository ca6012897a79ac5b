use crate::error::{GeneratorError, Result};
use crate::generator::facade::{MAX_DRAW_ATTEMPTS, RandomValueGenerator};
use crate::generator::models::DEFAULT_LETTERS;
use crate::generator::text::validate_alphabet;
use crate::sources::UniformSource;
use log::warn;
use uuid::Uuid;

impl<S: UniformSource> RandomValueGenerator<S> {
    /// Random 128-bit identifier, never the nil UUID.
    pub fn get_guid(&self) -> Result<Uuid> {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let mut bytes = [0u8; 16];
            self.source.fill_bytes(&mut bytes);

            let guid = Uuid::from_bytes(bytes);
            if !guid.is_nil() {
                return Ok(guid);
            }
        }

        warn!("Only nil identifiers after {} draws", MAX_DRAW_ATTEMPTS);
        Err(GeneratorError::DrawsExhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }

    /// Fisher-Yates shuffle of a copy of `items`.
    pub fn shuffle<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.draw(0, i as i32 + 1) as usize;
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// First element of a shuffled copy of `items`.
    pub fn get_element<T: Clone>(&self, items: &[T]) -> Result<T> {
        if items.is_empty() {
            return Err(GeneratorError::invalid("The elements collection is empty!"));
        }

        self.shuffle(items)
            .into_iter()
            .next()
            .ok_or_else(|| GeneratorError::invalid("The elements collection is empty!"))
    }

    pub fn get_letter_from(&self, alphabet: &str) -> Result<char> {
        validate_alphabet(alphabet)?;
        if alphabet.chars().any(|c| !c.is_alphabetic()) {
            return Err(GeneratorError::invalid(
                "The alphabet contains non letter characters!",
            ));
        }

        let letters: Vec<char> = alphabet.chars().collect();
        self.get_element(&letters)
    }

    /// Uniform letter from the default letters.
    pub fn get_letter(&self) -> char {
        let letters: Vec<char> = DEFAULT_LETTERS.chars().collect();
        *self.pick(&letters)
    }

    pub fn get_boolean(&self) -> bool {
        self.source.next_real() < 0.5
    }
}
