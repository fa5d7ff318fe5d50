use std::io::{self, Write};

use anyhow::Context;
use lexis_config::Config;
use lexis_core::{LanguageProcessor, LookupOptions, OutputFormat, Serializer, WordLookup};
use lexis_lang_english::EnglishProcessor;

use crate::io::{OutputSink, WordReader};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank input lines
    pub words: usize,
    /// Words with at least one related word
    pub matched: usize,
    /// Words skipped after a lookup error
    pub failed: usize,
    /// Lines written to the output
    pub lines: usize,
}

/// Process the whole word list described by `config`
///
/// The input is opened first and the database second, so neither a missing
/// word list nor a broken database touches an existing output file.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    let words = WordReader::open(&config.input_path).with_context(|| {
        format!("Failed to open input file {}", config.input_path.display())
    })?;

    let processor = EnglishProcessor::open(&config.dictionary.path).with_context(|| {
        format!(
            "Failed to open lexical database at {}",
            config.dictionary.path.display()
        )
    })?;
    let metadata = processor.dictionary().metadata();
    tracing::info!(
        language = processor.language_code(),
        "Using {} {} ({} entries)",
        metadata.name,
        metadata.version,
        metadata.entry_count
    );

    let mut sink = OutputSink::open(&config.output.path, config.output.mode).with_context(|| {
        format!("Failed to open output file {}", config.output.path.display())
    })?;

    let options = LookupOptions {
        relations: config.dictionary.relations.clone(),
    };
    let summary = process_words(&processor, words, options, config.output.format, sink.writer())?;

    sink.finish()
        .with_context(|| format!("Failed to write {}", config.output.path.display()))?;

    Ok(summary)
}

/// Look up every word and write its related words to `out`
///
/// Read and write failures abort; a word whose senses cannot be resolved is
/// logged and skipped.
pub fn process_words<I, W>(
    processor: &dyn LanguageProcessor,
    words: I,
    options: LookupOptions,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunSummary>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let lookup = WordLookup::new(processor, options);
    let serializer = Serializer::new(format);
    let mut summary = RunSummary::default();

    for (number, word) in words.into_iter().enumerate() {
        let line = number + 1;
        let word = word.with_context(|| format!("Failed to read input line {line}"))?;
        if word.trim().is_empty() {
            continue;
        }
        summary.words += 1;

        let _span = tracing::debug_span!("word", line, word = %word).entered();

        match lookup.related_words(&word) {
            Ok(set) if set.is_empty() => {
                tracing::debug!("no related words");
            }
            Ok(set) => {
                summary.matched += 1;
                summary.lines += serializer
                    .write(&set, out)
                    .context("Failed to write output")?;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("Skipping {word:?} (line {line}): {e}");
            }
        }
    }

    tracing::info!(
        words = summary.words,
        matched = summary.matched,
        failed = summary.failed,
        lines = summary.lines,
        "Processed word list"
    );

    Ok(summary)
}
