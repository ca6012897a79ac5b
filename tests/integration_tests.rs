use clap::Parser;
use randval::commands::{Cli, Commander, GeneratedValue};
use randval::{
    CaseMode, GeneratorConfig, GeneratorError, RandomValueGenerator, SeededSource,
    ThreadRngSource, WordList, WordSupplier,
};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Hands out `word0`, `word1`, ... and remembers what it handed out.
#[derive(Clone, Default)]
struct RecordingSupplier {
    counter: Arc<AtomicUsize>,
    issued: Arc<Mutex<Vec<String>>>,
}

impl RecordingSupplier {
    fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl WordSupplier for RecordingSupplier {
    fn next_word(&self) -> String {
        let word = format!("word{}", self.counter.fetch_add(1, Ordering::SeqCst));
        self.issued.lock().unwrap().push(word.clone());
        word
    }
}

fn generator_with_recorder() -> (RandomValueGenerator, RecordingSupplier) {
    let supplier = RecordingSupplier::default();
    let mut generator = RandomValueGenerator::new(ThreadRngSource::new());
    generator.set_word_supplier(Box::new(supplier.clone()));
    (generator, supplier)
}

#[test]
fn test_text_file_contains_supplied_words_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (generator, supplier) = generator_with_recorder();

    let path = generator.get_text_file(25, dir.path()).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));

    let contents = fs::read_to_string(&path).unwrap();
    let words: Vec<String> = contents.split_whitespace().map(str::to_string).collect();
    assert_eq!(words.len(), 25);
    assert_eq!(words, supplier.issued());
}

#[test]
fn test_text_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let (generator, supplier) = generator_with_recorder();

    let result = generator.get_text_file(3, dir.path().join("does-not-exist"));

    assert!(matches!(result, Err(GeneratorError::DirectoryNotFound(_))));
    assert!(supplier.issued().is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_words_call_supplier_once_per_word() {
    let (generator, supplier) = generator_with_recorder();

    let words = generator.get_words(4).unwrap();
    assert_eq!(words, vec!["word0", "word1", "word2", "word3"]);
    assert_eq!(supplier.issued(), words);

    let sentence = generator
        .get_sentence_with_case(2, "-", CaseMode::UpperCase)
        .unwrap();
    assert_eq!(sentence, "WORD4-WORD5");
}

#[test]
fn test_two_letter_alphabet_strings() {
    let generator = RandomValueGenerator::new(ThreadRngSource::new());
    for _ in 0..200 {
        let value = generator.get_string_between("ab", 2, 2).unwrap();
        assert!(["aa", "ab", "ba", "bb"].contains(&value.as_str()), "{}", value);
    }
}

#[test]
fn test_guid_never_nil_over_many_seeds() {
    for seed in 0..200 {
        let generator = RandomValueGenerator::new(SeededSource::new(seed));
        assert!(!generator.get_guid().unwrap().is_nil());
    }
}

#[test]
fn test_email_shape_over_many_seeds() {
    for seed in 0..200 {
        let generator = RandomValueGenerator::new(SeededSource::new(seed));
        let address = generator.get_email_address();

        let (local, domain) = address.split_once('@').unwrap();
        let (host, tld) = domain.rsplit_once('.').unwrap();
        assert_eq!(local.len(), 21);
        assert_eq!(host.len(), 21);
        assert!((1..=3).contains(&tld.len()));
        assert!(local.chars().next().unwrap().is_ascii_alphabetic());
        assert!(host.chars().next().unwrap().is_ascii_alphabetic());
        assert!(local.chars().chain(host.chars()).all(|c| c.is_ascii_alphanumeric()));
        assert!(tld.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn test_different_number_never_matches() {
    let generator = RandomValueGenerator::new(ThreadRngSource::new());
    for number in 0..=u8::MAX {
        assert_ne!(generator.get_different_number(number).unwrap(), number);
    }
}

#[test]
fn test_word_operations_without_supplier() {
    let generator = RandomValueGenerator::new(ThreadRngSource::new());
    assert!(matches!(generator.get_word(), Err(GeneratorError::WordSupplierNotSet)));
    // Operations that draw no words still work.
    assert_eq!(generator.get_words(0).unwrap(), Vec::<String>::new());
    assert!((1..3).contains(&generator.get_int(1, 3).unwrap()));
}

#[test]
fn test_seeded_config_reproduces_values() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("randval.yaml");
    fs::write(&config_path, "seed: 99\nseparator: \"|\"\n").unwrap();

    let config = GeneratorConfig::load(&config_path).unwrap();
    let first = config.build().unwrap();
    let second = config.build().unwrap();

    assert_eq!(first.get_decimal(-50, 50, 4).unwrap(), second.get_decimal(-50, 50, 4).unwrap());
    assert_eq!(
        first.get_sentence(6, &config.separator).unwrap(),
        second.get_sentence(6, &config.separator).unwrap()
    );
}

#[test]
fn test_cli_round_trip_through_commander() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = dir.path().join("words.txt");
    fs::write(&words_path, "# fixtures\nlima\nmike\n").unwrap();

    let cli = Cli::try_parse_from([
        "randval",
        "--seed",
        "5",
        "--words",
        words_path.to_str().unwrap(),
        "sentence",
        "3",
        "--separator",
        "/",
    ])
    .unwrap();

    let config = GeneratorConfig::default().with_overrides(cli.seed, cli.words.clone());
    let commander = Commander::new(config.build().unwrap(), config.separator.clone());

    let GeneratedValue::Text(sentence) = commander.execute(&cli.command).unwrap() else {
        panic!("expected text");
    };
    let words: Vec<&str> = sentence.split('/').collect();
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|w| *w == "lima" || *w == "mike"));
}

#[test]
fn test_embedded_word_list_feeds_sentences() {
    let mut generator = RandomValueGenerator::new(ThreadRngSource::new());
    generator.set_word_supplier(Box::new(WordList::embedded()));

    let sentence = generator.get_sentence(10, " ").unwrap();
    assert_eq!(sentence.split(' ').count(), 10);
    assert!(sentence.split(' ').all(|w| !w.is_empty()));
}
