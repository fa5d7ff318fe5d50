use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lexis_config::{Config, WriteMode};
use lexis_core::{LookupOptions, OutputFormat};
use lexis_lang_english::EnglishProcessor;
use lexis_lang_english::fixture::DictionaryFixture;
use tempfile::TempDir;

use crate::pipeline::{RunSummary, process_words, run};

struct Workspace {
    dir: TempDir,
    config: Config,
}

impl Workspace {
    fn new(words: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        DictionaryFixture::sample()
            .write_to(&dir.path().join("dict"))
            .unwrap();
        fs::write(dir.path().join("inputwords"), words).unwrap();

        let mut config = Config::default();
        config.input_path = dir.path().join("inputwords");
        config.dictionary.path = dir.path().join("dict");
        config.output.path = dir.path().join("outputdictionary");

        Self { dir, config }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn output(&self) -> String {
        fs::read_to_string(&self.config.output.path).unwrap()
    }
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn test_happy_flat_output() {
    let ws = Workspace::new("happy\n");

    let summary = run(&ws.config).unwrap();

    assert_eq!(
        lines(&ws.output()),
        vec!["cheerful", "felicitous", "glad", "happy", "well-chosen"]
    );
    assert_eq!(
        summary,
        RunSummary {
            words: 1,
            matched: 1,
            failed: 0,
            lines: 5,
        }
    );
}

#[test]
fn test_unknown_word_writes_nothing() {
    let ws = Workspace::new("xyzzy123\n");

    let summary = run(&ws.config).unwrap();

    assert_eq!(ws.output(), "");
    assert_eq!(summary.words, 1);
    assert_eq!(summary.matched, 0);
    assert_eq!(summary.lines, 0);
}

#[test]
fn test_bracketed_output_one_line_per_stem() {
    let mut ws = Workspace::new("happy\nxyzzy123\n\ndogs\n");
    ws.config.output.format = OutputFormat::Bracketed;

    let summary = run(&ws.config).unwrap();

    assert_eq!(
        lines(&ws.output()),
        vec![
            "[cheerful, felicitous, glad, happy, well-chosen]",
            "[Canis_familiaris, canid, canine, chase, chase_after, dog, domestic_dog, follow, frump, \
             give_chase, go_after, poodle, poodle_dog, pursue, tag, tail, track, trail]",
        ]
    );
    assert_eq!(summary.words, 3);
    assert_eq!(summary.matched, 2);
}

#[test]
fn test_flat_output_has_no_duplicates_per_word() {
    let ws = Workspace::new("dogs\n");

    run(&ws.config).unwrap();

    let output = ws.output();
    let mut seen = lines(&output);
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
    assert!(seen.contains(&"domestic dog"));
    assert!(seen.contains(&"Canis familiaris"));
}

#[test]
fn test_overwrite_runs_are_idempotent() {
    let ws = Workspace::new("happy\nran\nsaw\n");

    run(&ws.config).unwrap();
    let first = ws.output();
    run(&ws.config).unwrap();
    let second = ws.output();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_append_runs_accumulate() {
    let mut ws = Workspace::new("happy\n");
    ws.config.output.mode = WriteMode::Append;

    run(&ws.config).unwrap();
    let first = ws.output();
    run(&ws.config).unwrap();

    assert_eq!(ws.output(), format!("{first}{first}"));
}

#[test]
fn test_synonyms_only() {
    let mut ws = Workspace::new("ran\n");
    ws.config.dictionary.relations.clear();

    run(&ws.config).unwrap();

    assert_eq!(lines(&ws.output()), vec!["run"]);
}

#[test]
fn test_missing_input_is_fatal_and_leaves_output_alone() {
    let mut ws = Workspace::new("happy\n");
    ws.config.input_path = ws.path("no-such-file");
    fs::write(&ws.config.output.path, "previous run\n").unwrap();

    let err = run(&ws.config).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to open input file"));
    assert_eq!(ws.output(), "previous run\n");
}

#[test]
fn test_missing_dictionary_is_fatal_and_leaves_output_alone() {
    let mut ws = Workspace::new("happy\n");
    ws.config.dictionary.path = ws.path("no-dict");

    let err = run(&ws.config).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to open lexical database"));
    assert!(!ws.config.output.path.exists());
}

fn append_line(path: &Path, line: &str) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    writeln!(file, "{line}").unwrap();
}

#[test]
fn test_lookup_failure_skips_word_and_continues() {
    let ws = Workspace::new("");
    append_line(&ws.path("dict/index.noun"), "zzbroken n 1 0 1 0 99999999  ");
    let processor = EnglishProcessor::open(&ws.config.dictionary.path).unwrap();

    let words = ["zzbroken", "happy"].map(|w| Ok::<_, io::Error>(w.to_string()));
    let mut out = Vec::new();
    let summary = process_words(
        &processor,
        words,
        LookupOptions::default(),
        OutputFormat::Bracketed,
        &mut out,
    )
    .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.matched, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[cheerful, felicitous, glad, happy, well-chosen]\n"
    );
}

#[test]
fn test_oversized_record_counts_skip_word() {
    let mut ws = Workspace::new("zzhuge\nhappy\n");
    ws.config.output.format = OutputFormat::Bracketed;
    let data = ws.path("dict/data.noun");
    let offset = fs::metadata(&data).unwrap().len();
    append_line(
        &data,
        &format!("{offset:08} 05 n 01 zzhuge 0 18446744073709551615 @ 00000000 n 0000 | x  "),
    );
    append_line(
        &ws.path("dict/index.noun"),
        &format!("zzhuge n 1 0 1 0 {offset:08}  "),
    );

    let summary = run(&ws.config).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.matched, 1);
    assert_eq!(
        ws.output(),
        "[cheerful, felicitous, glad, happy, well-chosen]\n"
    );
}

#[test]
fn test_read_error_aborts() {
    let ws = Workspace::new("");
    let processor = EnglishProcessor::open(&ws.config.dictionary.path).unwrap();

    let words = vec![
        Ok("happy".to_string()),
        Err(io::Error::new(io::ErrorKind::InvalidData, "disk went away")),
        Ok("dogs".to_string()),
    ];
    let mut out = Vec::new();
    let err = process_words(
        &processor,
        words,
        LookupOptions::default(),
        OutputFormat::Flat,
        &mut out,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("line 2"));
    // the first word was already written
    assert!(String::from_utf8(out).unwrap().starts_with("cheerful\n"));
}
