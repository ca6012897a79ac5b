pub mod facade;
pub mod files;
pub mod models;
pub mod numeric;
pub mod structural;
pub mod temporal;
pub mod text;

pub use facade::{MAX_DRAW_ATTEMPTS, RandomValueGenerator};
pub use models::{
    CaseMode, DEFAULT_ALPHABET, DEFAULT_DIGITS, DEFAULT_LETTERS, DEFAULT_SEPARATOR,
    DEFAULT_SYMBOLS, WHITESPACE,
};
pub use numeric::MAX_DECIMAL_PLACES;
