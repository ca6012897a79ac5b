use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The 52 Latin letters.
pub const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_DIGITS: &str = "0123456789";

/// Printable, non-whitespace symbols.
pub const DEFAULT_SYMBOLS: &str = "!#$%&()*+-/:;<=>?@[]^_{|}~§±¶°€£¥©®";

/// `DEFAULT_LETTERS`, `DEFAULT_DIGITS` and `DEFAULT_SYMBOLS`, in that order.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789!#$%&()*+-/:;<=>?@[]^_{|}~§±¶°€£¥©®";

pub const DEFAULT_SEPARATOR: &str = " ";

/// Whitespace-only value returned by `get_null_or_empty_or_whitespace`.
pub const WHITESPACE: &str = "\r \n \t";

/// Case transform applied to generated words.
/// Serialises to: "default", "upper" or "lower".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum CaseMode {
    #[default]
    #[serde(rename = "default")]
    #[value(name = "default")]
    Default,
    #[serde(rename = "upper")]
    #[value(name = "upper")]
    UpperCase,
    #[serde(rename = "lower")]
    #[value(name = "lower")]
    LowerCase,
}

impl CaseMode {
    pub fn apply(self, word: String) -> String {
        match self {
            CaseMode::Default => word,
            CaseMode::UpperCase => word.to_uppercase(),
            CaseMode::LowerCase => word.to_lowercase(),
        }
    }
}
