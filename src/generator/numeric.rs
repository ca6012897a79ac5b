use crate::error::{GeneratorError, Result};
use crate::generator::facade::{MAX_DRAW_ATTEMPTS, RandomValueGenerator};
use crate::generator::models::DEFAULT_DIGITS;
use crate::sources::UniformSource;
use log::warn;
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry.
pub const MAX_DECIMAL_PLACES: u8 = 28;

impl<S: UniformSource> RandomValueGenerator<S> {
    /// Uniform integer in `[min, max)`; `min` when both bounds are equal.
    pub fn get_int(&self, min: i32, max: i32) -> Result<i32> {
        if max < min {
            return Err(GeneratorError::invalid(
                "Maximum value is less than minimum value!",
            ));
        }
        if max == min {
            return Ok(min);
        }

        Ok(self.draw(min, max))
    }

    /// Uniform integer in `[0, max)`.
    pub fn get_positive(&self, max: i32) -> Result<i32> {
        if max < 0 {
            return Err(GeneratorError::invalid("Maximum value cannot be negative!"));
        }

        self.get_int(0, max)
    }

    /// Uniform integer in `[max + 1, -1]`, drawn as `-uniform(1, |max|)`.
    pub fn get_negative(&self, max: i32) -> Result<i32> {
        if max >= 0 {
            return Err(GeneratorError::invalid(
                "Maximum value should be less than zero!",
            ));
        }

        let bound = max.checked_neg().unwrap_or(i32::MAX);
        Ok(-self.get_int(1, bound)?)
    }

    /// Integer part from `[min, max)` followed by `number_of_decimals`
    /// independently drawn fractional digits. The result carries exactly
    /// `number_of_decimals` as its scale and the fraction takes the sign of
    /// the integer part.
    pub fn get_decimal(&self, min: i32, max: i32, number_of_decimals: u8) -> Result<Decimal> {
        if max < min {
            return Err(GeneratorError::invalid(
                "Maximum value is less than minimum value!",
            ));
        }
        if number_of_decimals > MAX_DECIMAL_PLACES {
            return Err(GeneratorError::invalid(format!(
                "The number of decimals cannot exceed {}!",
                MAX_DECIMAL_PLACES
            )));
        }

        let whole = i128::from(self.get_int(min, max)?);
        let fraction = (0..number_of_decimals)
            .fold(0i128, |acc, _| acc * 10 + i128::from(self.draw(0, 10)));

        let scale = 10i128.pow(u32::from(number_of_decimals));
        let mantissa = if whole < 0 {
            whole * scale - fraction
        } else {
            whole * scale + fraction
        };

        Decimal::try_from_i128_with_scale(mantissa, u32::from(number_of_decimals))
            .map_err(|e| GeneratorError::invalid(format!("The decimal cannot be represented: {}", e)))
    }

    /// Uniform digit in `0..=9`.
    pub fn get_digit(&self) -> u8 {
        let digits = DEFAULT_DIGITS.as_bytes();
        self.pick(digits) - b'0'
    }

    /// Uniform byte different from `number`.
    pub fn get_different_number(&self, number: u8) -> Result<u8> {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let candidate = self.draw(0, i32::from(u8::MAX) + 1) as u8;
            if candidate != number {
                return Ok(candidate);
            }
        }

        warn!(
            "No byte different from {} after {} draws",
            number, MAX_DRAW_ATTEMPTS
        );
        Err(GeneratorError::DrawsExhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }
}
