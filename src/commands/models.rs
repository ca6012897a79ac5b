use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::generator::CaseMode;

#[derive(Debug, Parser)]
#[command(name = "randval", version, about = "Random values for test fixtures")]
pub struct Cli {
    /// Seed for reproducible output
    #[arg(long, env = "RANDVAL_SEED")]
    pub seed: Option<u64>,

    /// Word list file, one word per line
    #[arg(long, env = "RANDVAL_WORDS")]
    pub words: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, env = "RANDVAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON document instead of the bare value
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Random string; a length range when --max-length is given
    String {
        #[arg(default_value_t = 16, allow_negative_numbers = true)]
        length: i32,
        #[arg(long)]
        alphabet: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        max_length: Option<i32>,
    },
    /// Integer in [min, max)
    Int {
        #[arg(allow_negative_numbers = true)]
        min: i32,
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },
    /// Integer in [0, max)
    Positive {
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },
    /// Integer in [max + 1, -1]
    Negative {
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },
    /// Decimal with an integer part in [min, max)
    Decimal {
        #[arg(allow_negative_numbers = true)]
        min: i32,
        #[arg(allow_negative_numbers = true)]
        max: i32,
        #[arg(long, default_value_t = 2)]
        decimals: u8,
    },
    /// Single digit
    Digit,
    /// Byte different from the given one
    Different { number: u8 },
    /// Random UUID, never nil
    Guid,
    /// Single letter
    Letter {
        #[arg(long)]
        alphabet: Option<String>,
    },
    Boolean,
    /// Single word
    Word {
        #[arg(long, value_enum, default_value_t)]
        case: CaseMode,
    },
    /// Words, one per line
    Words {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(long, value_enum, default_value_t)]
        case: CaseMode,
    },
    /// Words joined by a separator
    Sentence {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(long)]
        separator: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        case: CaseMode,
    },
    Email,
    /// Null, empty or whitespace-only value
    NullOrBlank,
    /// Date 1 to 99 days before now or --reference (RFC 3339)
    Past {
        #[arg(long)]
        reference: Option<DateTime<FixedOffset>>,
    },
    /// Date 1 to 99 days after now or --reference (RFC 3339)
    Future {
        #[arg(long)]
        reference: Option<DateTime<FixedOffset>>,
    },
    /// Text file of random words written to a directory
    TextFile {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        directory: PathBuf,
        #[arg(long)]
        separator: Option<String>,
    },
}

/// Value produced by a command.
/// Serialises untagged: `"abc"`, `42`, `true`, `null` or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Text(String),
    OptionalText(Option<String>),
    Integer(i64),
    Boolean(bool),
    List(Vec<String>),
    Path(PathBuf),
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedValue::Text(text) => f.write_str(text),
            GeneratedValue::OptionalText(Some(text)) => write!(f, "{:?}", text),
            GeneratedValue::OptionalText(None) => f.write_str("<null>"),
            GeneratedValue::Integer(value) => write!(f, "{}", value),
            GeneratedValue::Boolean(value) => write!(f, "{}", value),
            GeneratedValue::List(items) => f.write_str(&items.join("\n")),
            GeneratedValue::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// JSON envelope printed with `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<GeneratedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Report {
    pub fn ok(data: GeneratedValue) -> Self {
        Self {
            status: "ok".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_global_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "randval", "--seed", "7", "--json", "sentence", "3", "--separator", ",", "--case",
            "upper",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Command::Sentence {
                count: 3,
                separator: Some(",".to_string()),
                case: CaseMode::UpperCase,
            }
        );
    }

    #[test]
    fn negative_numbers_are_values() {
        let cli = Cli::try_parse_from(["randval", "int", "-10", "-2"]).unwrap();
        assert_eq!(cli.command, Command::Int { min: -10, max: -2 });

        let cli = Cli::try_parse_from(["randval", "negative", "-5"]).unwrap();
        assert_eq!(cli.command, Command::Negative { max: -5 });
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["randval", "string"]).unwrap();
        assert_eq!(
            cli.command,
            Command::String {
                length: 16,
                alphabet: None,
                max_length: None,
            }
        );

        let cli = Cli::try_parse_from(["randval", "word"]).unwrap();
        assert_eq!(cli.command, Command::Word { case: CaseMode::Default });
    }

    #[test]
    fn parses_reference_dates() {
        let cli =
            Cli::try_parse_from(["randval", "past", "--reference", "2024-03-15T12:00:00+02:00"])
                .unwrap();
        match cli.command {
            Command::Past { reference: Some(reference) } => {
                assert_eq!(reference.offset().local_minus_utc(), 7200);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_case_mode() {
        assert!(Cli::try_parse_from(["randval", "word", "--case", "title"]).is_err());
    }

    #[test]
    fn values_display_plainly() {
        assert_eq!(GeneratedValue::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(GeneratedValue::Integer(-4).to_string(), "-4");
        assert_eq!(GeneratedValue::OptionalText(None).to_string(), "<null>");
        assert_eq!(GeneratedValue::OptionalText(Some(" ".to_string())).to_string(), "\" \"");
        assert_eq!(
            GeneratedValue::List(vec!["a".to_string(), "b".to_string()]).to_string(),
            "a\nb"
        );
    }

    #[test]
    fn reports_serialise_like_api_responses() {
        let ok = serde_json::to_value(Report::ok(GeneratedValue::Integer(3))).unwrap();
        assert_eq!(ok, json!({"status": "ok", "data": 3}));

        let none = serde_json::to_value(Report::ok(GeneratedValue::OptionalText(None))).unwrap();
        assert_eq!(none, json!({"status": "ok", "data": null}));

        let err = serde_json::to_value(Report::error("boom")).unwrap();
        assert_eq!(err, json!({"status": "error", "error": "boom"}));
    }
}
